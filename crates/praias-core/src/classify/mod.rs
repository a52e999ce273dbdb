pub mod zone;

pub use zone::classify_zone;
