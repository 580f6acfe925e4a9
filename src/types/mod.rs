//! Data types for the heatmap engine.

mod config;
mod datum;
mod geometry;
mod shapes;

pub use config::*;
pub use datum::*;
pub use geometry::*;
pub use shapes::*;
