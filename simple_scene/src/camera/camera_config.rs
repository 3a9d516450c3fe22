/// Camera configuration
///
/// Initial frame, projection and movement parameters. Aspect ratio and
/// scene orientation are not configured here: they come from the device
/// resources at construction.

use glam::Vec4;

#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Camera position
    pub eye: Vec4,
    /// Point looked at
    pub at: Vec4,
    /// Reference up direction
    pub up: Vec4,
    /// Vertical field of view, in degrees
    pub fov_degrees: f32,
    pub near_clipping_plane: f32,
    pub far_clipping_plane: f32,
    /// Distance units per second
    pub movement_speed: f32,
    /// Radians of rotation per pixel of mouse-look motion
    pub look_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec4::new(0.0, 0.7, 1.5, 0.0),
            at: Vec4::new(0.0, -0.1, 0.0, 0.0),
            up: Vec4::new(0.0, 1.0, 0.0, 0.0),
            fov_degrees: 70.0,
            near_clipping_plane: 0.01,
            far_clipping_plane: 100.0,
            movement_speed: 1.0,
            look_sensitivity: 0.005,
        }
    }
}
