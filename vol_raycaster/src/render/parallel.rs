use std::num::NonZeroUsize;

use crossbeam::channel;
use log::{debug, warn};

use crate::{
    camera::Camera,
    color::RGBA,
    common::{split_into_tiles, Tile},
    volumetric::{GradientField, Volume},
};

use super::Tracer;

/// Side of a square tile, in pixels
pub const TILE_SIDE: usize = 16;

/// Tile and its pixels in row order
type TileResult = (Tile, Vec<RGBA>);

/// Number of render threads: one per hardware thread, at most one per tile
fn worker_count(tile_count: usize) -> usize {
    let cores = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    usize::min(cores, tile_count).max(1)
}

fn render_tile<V, G, C>(tracer: &Tracer<V, G, C>, tile: &Tile) -> Vec<RGBA>
where
    V: Volume + ?Sized,
    G: GradientField + ?Sized,
    C: Camera + ?Sized,
{
    tile.pixels()
        .map(|(x, y)| tracer.render_pixel(x, y))
        .collect()
}

fn blit(buffer: &mut [RGBA], width: usize, tile: &Tile, pixels: &[RGBA]) {
    for ((x, y), color) in tile.pixels().zip(pixels) {
        buffer[y * width + x] = *color;
    }
}

/// Render the frame split into tiles, distributed among worker threads.
///
/// Workers pull tiles from a queue and send rendered pixels back, this thread
/// copies them into `buffer`. Tiles are disjoint, every pixel is written once.
pub fn render_tiles<V, G, C>(tracer: &Tracer<V, G, C>, resolution: (usize, usize), buffer: &mut [RGBA])
where
    V: Volume + Sync + ?Sized,
    G: GradientField + Sync + ?Sized,
    C: Camera + Sync + ?Sized,
{
    let (width, _) = resolution;
    let tiles = split_into_tiles(resolution, TILE_SIDE);
    let workers = worker_count(tiles.len());

    debug!("Rendering {} tiles on {workers} threads", tiles.len());

    let (task_sender, task_receiver) = channel::unbounded::<Tile>();
    let (result_sender, result_receiver) = channel::unbounded::<TileResult>();

    for tile in tiles {
        // receiver is alive, cannot fail
        let _ = task_sender.send(tile);
    }
    drop(task_sender);

    // Scope assures threads will be joined before exiting the scope
    let scope_result = crossbeam::scope(|s| {
        for id in 0..workers {
            let tasks = task_receiver.clone();
            let results = result_sender.clone();

            let spawned = s.builder().name(format!("Ren{id}")).spawn(move |_| {
                for tile in tasks.iter() {
                    let pixels = render_tile(tracer, &tile);
                    if results.send((tile, pixels)).is_err() {
                        break;
                    }
                }
            });

            if let Err(err) = spawned {
                warn!("Cannot spawn render thread {id}: {err}");
            }
        }
        // Workers hold the remaining senders
        drop(result_sender);

        for (tile, pixels) in result_receiver.iter() {
            blit(buffer, width, &tile, &pixels);
        }

        // Tiles left behind by workers that failed to start
        for tile in task_receiver.try_iter() {
            let pixels = render_tile(tracer, &tile);
            blit(buffer, width, &tile, &pixels);
        }
    });

    if let Err(panic) = scope_result {
        std::panic::resume_unwind(panic);
    }
}

/// Render the frame on the calling thread, row by row.
pub fn render_serial<V, G, C>(tracer: &Tracer<V, G, C>, resolution: (usize, usize), buffer: &mut [RGBA])
where
    V: Volume + ?Sized,
    G: GradientField + ?Sized,
    C: Camera + ?Sized,
{
    let (width, _) = resolution;
    for (index, pixel) in buffer.iter_mut().enumerate() {
        *pixel = tracer.render_pixel(index % width, index / width);
    }
}
