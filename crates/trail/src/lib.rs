pub mod geojson;
pub mod geometry;
pub mod marker;
pub mod poi;
pub mod reveal;

pub use geojson::*;
pub use geometry::*;
pub use marker::*;
pub use poi::*;
pub use reveal::*;
