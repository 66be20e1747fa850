//! Projection and frame assembly

pub mod camera;
pub mod frame;

pub use camera::Camera;
pub use frame::{build_frame, NullSink, Primitive, RenderFrame, RenderSink};
