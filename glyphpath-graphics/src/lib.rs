//! Geometry for `glyphpath`: bounding boxes, canvas-fitting transforms and
//! outline transformation, built on `kurbo`.

pub mod types;

pub mod bbox;
pub mod error;
pub mod transform;

pub use bbox::BoundingBox;
pub use error::GraphicsError;
pub use transform::{CanvasFit, Transformable, fit_to_canvas};
