pub mod bbox;
pub mod crop;
