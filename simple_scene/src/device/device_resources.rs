/// Device resources: output size and display orientation.
///
/// The GPU device itself lives outside this crate. What the camera needs
/// from it is narrow: the aspect ratio of the output surface and the
/// transform that rotates the scene into the display's native orientation.

use glam::Mat4;
use std::f32::consts::{FRAC_PI_2, PI};

/// Provider of output-surface state read by the camera.
///
/// Borrowed for the duration of `Camera::new` / `Camera::update` only.
pub trait DeviceResources {
    /// Width / height of the output surface
    fn aspect_ratio(&self) -> f32;

    /// Transform aligning world space with the display orientation
    fn orientation_transform_3d(&self) -> Mat4;
}

/// Physical orientation of the display relative to its native landscape mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayOrientation {
    /// Native orientation, no rotation
    #[default]
    Landscape,
    /// Rotated 90 degrees
    Portrait,
    /// Rotated 180 degrees
    LandscapeFlipped,
    /// Rotated 270 degrees
    PortraitFlipped,
}

impl DisplayOrientation {
    /// Rotation about Z, in radians, that maps the scene onto this orientation
    pub fn rotation_angle(&self) -> f32 {
        match self {
            DisplayOrientation::Landscape => 0.0,
            DisplayOrientation::Portrait => FRAC_PI_2,
            DisplayOrientation::LandscapeFlipped => PI,
            DisplayOrientation::PortraitFlipped => 3.0 * FRAC_PI_2,
        }
    }

    /// True when the render target is rotated a quarter turn from the window
    pub fn swaps_dimensions(&self) -> bool {
        matches!(self, DisplayOrientation::Portrait | DisplayOrientation::PortraitFlipped)
    }
}

/// Device resources backed by a window's logical size and orientation.
///
/// Holds no GPU objects. The owner pushes size and orientation changes in
/// from its windowing events; the camera pulls them on the next update.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDeviceResources {
    logical_width: f32,
    logical_height: f32,
    orientation: DisplayOrientation,
}

impl WindowDeviceResources {
    /// Create device resources for a window of the given logical size.
    pub fn new(logical_width: f32, logical_height: f32) -> Self {
        Self {
            logical_width,
            logical_height,
            orientation: DisplayOrientation::Landscape,
        }
    }

    // ===== GETTERS =====

    /// Window size as the user sees it
    pub fn logical_size(&self) -> (f32, f32) {
        (self.logical_width, self.logical_height)
    }

    /// Current display orientation
    pub fn orientation(&self) -> DisplayOrientation {
        self.orientation
    }

    /// Size of the swap chain / render target.
    ///
    /// Width and height are swapped for quarter-turn orientations.
    pub fn render_target_size(&self) -> (f32, f32) {
        if self.orientation.swaps_dimensions() {
            (self.logical_height, self.logical_width)
        } else {
            (self.logical_width, self.logical_height)
        }
    }

    // ===== SETTERS =====

    /// Record a window resize.
    pub fn set_logical_size(&mut self, width: f32, height: f32) {
        self.logical_width = width;
        self.logical_height = height;
    }

    /// Record a display rotation.
    pub fn set_orientation(&mut self, orientation: DisplayOrientation) {
        self.orientation = orientation;
    }
}

impl Default for WindowDeviceResources {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl DeviceResources for WindowDeviceResources {
    fn aspect_ratio(&self) -> f32 {
        // Minimized windows report a zero height
        if self.logical_height <= 0.0 {
            return 1.0;
        }
        self.logical_width / self.logical_height
    }

    fn orientation_transform_3d(&self) -> Mat4 {
        match self.orientation {
            DisplayOrientation::Landscape => Mat4::IDENTITY,
            other => Mat4::from_rotation_z(other.rotation_angle()),
        }
    }
}

#[cfg(test)]
#[path = "device_resources_tests.rs"]
mod tests;
