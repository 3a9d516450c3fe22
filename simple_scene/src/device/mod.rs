//! Device module: the camera's view of the output surface.
//!
//! The camera reads the output aspect ratio and display orientation through
//! the `DeviceResources` trait. It borrows the provider per call and never
//! keeps a reference to it.

mod device_resources;

pub use device_resources::{DeviceResources, DisplayOrientation, WindowDeviceResources};
