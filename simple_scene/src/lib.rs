/*!
# SimpleScene

Camera and frame plumbing for a small real-time 3D scene.

The crate is renderer-agnostic: it produces matrices and leaves the GPU side
to the caller. Everything here is a plain value owned by the caller and
driven from a single render/update thread.

## Architecture

- **Camera**: eye/at/up frame, view and projection matrices, per-frame update
- **CameraInput**: held movement keys and mouse-look deltas fed from winit
- **DeviceResources**: output aspect ratio and display orientation, borrowed per call
- **StepTimer**: variable or fixed time-step frame timer
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod device;
pub mod timer;

// Main simple3d namespace module
pub mod simple3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging entry point
    pub use crate::engine::Engine;

    pub use crate::camera::{Camera, CameraConfig, CameraConstants, CameraInput, MoveKey};
    pub use crate::device::{DeviceResources, DisplayOrientation, WindowDeviceResources};
    pub use crate::timer::{StepTimer, TICKS_PER_SECOND};

    // Logging sub-module (types only; scene_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}

// Re-export math library at crate root
pub use glam;
