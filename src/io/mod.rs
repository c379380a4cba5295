//! I/O layer: load any supported raster as RGBA8 and write RGBA8 buffers
//! back to disk in the format implied by the target extension.
pub mod reader;
pub use reader::load_rgba;

pub mod writer;
pub use writer::save_rgba;
