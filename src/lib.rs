pub mod error;
pub mod geoalg;
pub mod windows;
pub mod demo;
pub mod prettify;
