//! Core building blocks: bounding-box detection and cropping over RGBA
//! buffers, plus the serializable `CropParams`. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
