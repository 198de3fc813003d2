use std::ops::Range;

/// Rectangular region of the frame, in pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub x: Range<usize>,
    pub y: Range<usize>,
}

impl Tile {
    pub fn new(x: Range<usize>, y: Range<usize>) -> Tile {
        Tile { x, y }
    }

    pub fn width(&self) -> usize {
        self.x.len()
    }

    pub fn height(&self) -> usize {
        self.y.len()
    }

    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Pixel coordinates of the tile, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.y
            .clone()
            .flat_map(move |y| self.x.clone().map(move |x| (x, y)))
    }
}

/// Partition a `(width, height)` frame into tiles of at most `side` x `side` pixels.
/// Tiles are disjoint and cover the whole frame. Border tiles may be smaller.
pub fn split_into_tiles(resolution: (usize, usize), side: usize) -> Vec<Tile> {
    assert!(side > 0, "tile side must be positive");
    let (width, height) = resolution;

    let mut tiles = Vec::with_capacity(
        ((width + side - 1) / side) * ((height + side - 1) / side),
    );
    for start_y in (0..height).step_by(side) {
        let end_y = usize::min(start_y + side, height);
        for start_x in (0..width).step_by(side) {
            let end_x = usize::min(start_x + side, width);
            tiles.push(Tile::new(start_x..end_x, start_y..end_y));
        }
    }
    tiles
}
