pub mod directive;
pub mod fit;

pub use directive::CameraDirective;
pub use fit::{bounding_box, CameraFitEngine};
