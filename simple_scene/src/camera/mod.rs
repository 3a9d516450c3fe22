//! Camera module: eye/at/up camera, its configuration and input state.
//!
//! The camera is a plain value owned and driven by the caller. It reads
//! the device resources and frame timer it is handed each update and keeps
//! no references to them.

mod camera;
mod camera_config;
mod camera_input;

pub use camera::{Camera, CameraConstants};
pub use camera_config::CameraConfig;
pub use camera_input::{CameraInput, MoveKey};
