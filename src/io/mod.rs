//! I/O layer for reading source icons and writing PNG outputs.
//! Provides the `reader` for decoding arbitrary raster inputs to RGBA8 and
//! `writers` for lossless PNG encoding.
pub mod reader;
pub use reader::load_rgba;

pub mod writers;
