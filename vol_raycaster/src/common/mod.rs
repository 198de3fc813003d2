mod bound_box;
mod ray;
mod tile;
mod value_range;

pub use bound_box::BoundBox;
pub use ray::{Ray, RaySamples};
pub use tile::{split_into_tiles, Tile};
pub use value_range::ValueRange;
