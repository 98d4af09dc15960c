pub mod controller;
pub mod uniforms;

pub use controller::FlyCamera;
pub use uniforms::CameraUniforms;
