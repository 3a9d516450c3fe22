/// Camera: eye/at/up frame with a perspective projection.
///
/// The camera owns plain values only. Device resources and the frame timer
/// are borrowed for the duration of a call and never retained.
///
/// Conventions match the Direct3D-style renderer it feeds:
/// - Left-handed view space, the camera looks down +Z.
/// - Clip-space depth in [0, 1].
///
/// Points and directions are stored as 4-component vectors. The 4th
/// component is carried along verbatim and ignored by all derived math.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
use winit::event::WindowEvent;
use crate::device::DeviceResources;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::timer::StepTimer;
use super::camera_config::CameraConfig;
use super::camera_input::CameraInput;

const SOURCE: &str = "simple_scene::Camera";

/// Smallest angle kept between the view direction and `up` when pitching
const MIN_ANGLE_TO_UP: f32 = 0.01;

/// Per-frame matrices, laid out for a constant buffer upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraConstants {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
}

impl CameraConstants {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Scene camera.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Vec4,
    at: Vec4,
    up: Vec4,
    fov: f32,
    aspect_ratio: f32,
    near_clipping_plane: f32,
    far_clipping_plane: f32,

    movement_speed: f32,
    movement_dir: Vec4,
    look_sensitivity: f32,

    scene_orientation: Mat4,

    input: CameraInput,
}

impl Default for Camera {
    /// Default frame with a square aspect and no orientation correction.
    fn default() -> Self {
        let config = CameraConfig::default();
        Self {
            eye: config.eye,
            at: config.at,
            up: config.up,
            fov: config.fov_degrees.to_radians(),
            aspect_ratio: 1.0,
            near_clipping_plane: config.near_clipping_plane,
            far_clipping_plane: config.far_clipping_plane,
            movement_speed: config.movement_speed,
            movement_dir: Vec4::ZERO,
            look_sensitivity: config.look_sensitivity,
            scene_orientation: Mat4::IDENTITY,
            input: CameraInput::new(),
        }
    }
}

impl Camera {
    /// Create a camera with an explicit frame.
    ///
    /// `device_resources` seeds the aspect ratio and scene orientation and
    /// is not kept. Projection and movement parameters use the defaults of
    /// `CameraConfig`.
    pub fn new(eye: Vec4, at: Vec4, up: Vec4, device_resources: &dyn DeviceResources) -> Self {
        let config = CameraConfig {
            eye,
            at,
            up,
            ..CameraConfig::default()
        };
        Self::from_config(&config, device_resources)
    }

    /// Create a camera from a full configuration.
    pub fn from_config(config: &CameraConfig, device_resources: &dyn DeviceResources) -> Self {
        let camera = Self {
            eye: config.eye,
            at: config.at,
            up: config.up,
            fov: config.fov_degrees.to_radians(),
            aspect_ratio: device_resources.aspect_ratio(),
            near_clipping_plane: config.near_clipping_plane,
            far_clipping_plane: config.far_clipping_plane,
            movement_speed: config.movement_speed,
            movement_dir: Vec4::ZERO,
            look_sensitivity: config.look_sensitivity,
            scene_orientation: device_resources.orientation_transform_3d(),
            input: CameraInput::new(),
        };

        crate::scene_debug!(
            SOURCE,
            "Camera created: eye {:?}, at {:?}, aspect {:.3}",
            camera.eye.truncate(),
            camera.at.truncate(),
            camera.aspect_ratio
        );

        camera
    }

    /// Like `new`, but rejects degenerate frames and projections.
    pub fn try_new(
        eye: Vec4,
        at: Vec4,
        up: Vec4,
        device_resources: &dyn DeviceResources,
    ) -> Result<Self> {
        let camera = Self::new(eye, at, up, device_resources);
        camera.validate()?;
        Ok(camera)
    }

    /// Check the frame and projection invariants.
    ///
    /// Accessors never call this: on a degenerate frame they return NaN or
    /// infinite values instead of failing.
    pub fn validate(&self) -> Result<()> {
        let forward = (self.at - self.eye).truncate();
        let up = self.up.truncate();

        if forward.length_squared() <= f32::EPSILON {
            return Err(Engine::log_and_return_error(
                SOURCE,
                Error::DegenerateCameraFrame("eye and at coincide".to_string()),
            ));
        }
        if up.length_squared() <= f32::EPSILON {
            return Err(Engine::log_and_return_error(
                SOURCE,
                Error::DegenerateCameraFrame("up vector is zero".to_string()),
            ));
        }
        if up.normalize().cross(forward.normalize()).length_squared() <= f32::EPSILON {
            return Err(Engine::log_and_return_error(
                SOURCE,
                Error::DegenerateCameraFrame("up is parallel to the view direction".to_string()),
            ));
        }
        if !(self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            return Err(Engine::log_and_return_error(
                SOURCE,
                Error::InvalidProjection(format!("field of view {} rad out of (0, pi)", self.fov)),
            ));
        }
        if !(self.aspect_ratio > 0.0 && self.aspect_ratio.is_finite()) {
            return Err(Engine::log_and_return_error(
                SOURCE,
                Error::InvalidProjection(format!("aspect ratio {} must be positive", self.aspect_ratio)),
            ));
        }
        if !(self.near_clipping_plane > 0.0) {
            return Err(Engine::log_and_return_error(
                SOURCE,
                Error::InvalidProjection(format!(
                    "near plane {} must be positive",
                    self.near_clipping_plane
                )),
            ));
        }
        if !(self.far_clipping_plane > self.near_clipping_plane) {
            return Err(Engine::log_and_return_error(
                SOURCE,
                Error::InvalidProjection(format!(
                    "far plane {} must lie beyond near plane {}",
                    self.far_clipping_plane, self.near_clipping_plane
                )),
            ));
        }
        Ok(())
    }

    // ===== FRAME ACCESSORS =====

    pub fn eye(&self) -> Vec4 {
        self.eye
    }

    pub fn set_eye(&mut self, eye: Vec4) {
        self.eye = eye;
    }

    pub fn at(&self) -> Vec4 {
        self.at
    }

    pub fn set_at(&mut self, at: Vec4) {
        self.at = at;
    }

    pub fn up(&self) -> Vec4 {
        self.up
    }

    pub fn set_up(&mut self, up: Vec4) {
        self.up = up;
    }

    /// Unit view direction, `normalize(at - eye)`.
    pub fn direction(&self) -> Vec3 {
        (self.at - self.eye).truncate().normalize()
    }

    /// View direction flattened onto the horizontal plane (y = 0), normalized.
    ///
    /// Undefined (NaN) when the camera looks straight up or down.
    pub fn plane_direction(&self) -> Vec3 {
        Vec3::new(self.at.x - self.eye.x, 0.0, self.at.z - self.eye.z).normalize()
    }

    pub fn movement_dir(&self) -> Vec4 {
        self.movement_dir
    }

    /// Set the direction travelled on the next updates.
    ///
    /// Stored verbatim: a non-unit vector scales the speed. Input key
    /// changes overwrite it on the following update.
    pub fn set_movement_dir(&mut self, dir: Vec4) {
        self.movement_dir = dir;
    }

    // ===== PROJECTION / MOVEMENT PARAMETERS =====

    /// Vertical field of view, in radians
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Set the vertical field of view, in radians.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    /// Set the vertical field of view in degrees, as `CameraConfig` takes it.
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.to_radians();
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near_clipping_plane(&self) -> f32 {
        self.near_clipping_plane
    }

    pub fn far_clipping_plane(&self) -> f32 {
        self.far_clipping_plane
    }

    pub fn set_clipping_planes(&mut self, near: f32, far: f32) {
        self.near_clipping_plane = near;
        self.far_clipping_plane = far;
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    pub fn look_sensitivity(&self) -> f32 {
        self.look_sensitivity
    }

    pub fn set_look_sensitivity(&mut self, sensitivity: f32) {
        self.look_sensitivity = sensitivity;
    }

    pub fn scene_orientation(&self) -> Mat4 {
        self.scene_orientation
    }

    // ===== DERIVED MATRICES =====

    /// World transform: the display orientation correction.
    pub fn world(&self) -> Mat4 {
        Mat4::IDENTITY * self.scene_orientation
    }

    /// Left-handed look-at view matrix.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_lh(self.eye.truncate(), self.at.truncate(), self.up.truncate().normalize())
    }

    /// Left-handed perspective projection, depth in [0, 1].
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_lh(
            self.fov,
            self.aspect_ratio,
            self.near_clipping_plane,
            self.far_clipping_plane,
        )
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Snapshot of all matrices for upload.
    pub fn constants(&self) -> CameraConstants {
        let view = self.view();
        let projection = self.projection();
        CameraConstants {
            world: self.world(),
            view,
            projection,
            view_projection: projection * view,
        }
    }

    // ===== ORIENTATION ANGLES =====
    //
    // Diagnostic only. Both divide by (at.x - eye.x) and return NaN or
    // +/- infinity-derived values when the camera looks along the YZ plane.

    pub fn pitch(&self) -> f32 {
        ((self.at.y - self.eye.y) / (self.at.x - self.eye.x)).atan()
    }

    pub fn yaw(&self) -> f32 {
        0.5 * ((self.at.z - self.eye.z) / (self.at.x - self.eye.x)).atan()
    }

    /// Roll is not modeled.
    pub fn roll(&self) -> f32 {
        0.0
    }

    // ===== INPUT =====

    pub fn input(&self) -> &CameraInput {
        &self.input
    }

    /// Direct access for input sources other than winit window events.
    pub fn input_mut(&mut self) -> &mut CameraInput {
        &mut self.input
    }

    /// Feed a window event to the camera's input state.
    ///
    /// Returns true if the event was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.input.handle_window_event(event)
    }

    // ===== PER-FRAME UPDATE =====

    /// Advance the camera by one frame.
    ///
    /// Applies pending input, moves eye and at together along the movement
    /// direction, then picks up aspect ratio / orientation changes from the
    /// device resources.
    pub fn update(&mut self, timer: &StepTimer, device_resources: &dyn DeviceResources) {
        let elapsed_seconds = timer.elapsed_seconds() as f32;

        self.process_input();

        let offset = self.movement_dir.truncate() * (self.movement_speed * elapsed_seconds);
        self.eye += offset.extend(0.0);
        self.at += offset.extend(0.0);

        self.refresh_device_state(device_resources);
    }

    fn process_input(&mut self) {
        let key_edge = self.input.take_key_edge();

        let look = self.input.take_look_delta();
        let looked = look != Vec2::ZERO;
        if looked {
            self.rotate_view(look.x * self.look_sensitivity, look.y * self.look_sensitivity);
        }

        // Held keys steer with the view; an external direction survives only
        // while no key is held
        let axes = self.input.movement_axes();
        if key_edge || (looked && axes != Vec3::ZERO) {
            self.movement_dir = self.movement_from_axes(axes).extend(0.0);
            crate::scene_trace!(SOURCE, "Movement direction now {:?}", self.movement_dir.truncate());
        }
    }

    /// Map local axes (strafe, rise, forward) to a unit world direction.
    fn movement_from_axes(&self, axes: Vec3) -> Vec3 {
        if axes == Vec3::ZERO {
            return Vec3::ZERO;
        }
        let forward = Vec3::new(self.at.x - self.eye.x, 0.0, self.at.z - self.eye.z).normalize_or_zero();
        let right = self.up.truncate().cross(forward).normalize_or_zero();

        (right * axes.x + Vec3::Y * axes.y + forward * axes.z).normalize_or_zero()
    }

    /// Rotate `at` around `eye`: yaw about `up`, then pitch about the right axis.
    ///
    /// Positive yaw turns right, positive pitch looks down (screen-space
    /// mouse deltas). Pitch is clamped so the view stays at least
    /// `MIN_ANGLE_TO_UP` away from `up` and never flips over the pole.
    fn rotate_view(&mut self, yaw: f32, pitch: f32) {
        let offset = (self.at - self.eye).truncate();
        let up = self.up.truncate().normalize_or_zero();
        if offset == Vec3::ZERO || up == Vec3::ZERO {
            return;
        }

        let mut rotated = Quat::from_axis_angle(up, yaw) * offset;

        let right = up.cross(rotated).normalize_or_zero();
        if right != Vec3::ZERO {
            let angle_to_up = rotated.normalize().dot(up).clamp(-1.0, 1.0).acos();
            let target = (angle_to_up + pitch)
                .clamp(MIN_ANGLE_TO_UP, std::f32::consts::PI - MIN_ANGLE_TO_UP);
            rotated = Quat::from_axis_angle(right, target - angle_to_up) * rotated;
        }

        let at = self.eye.truncate() + rotated;
        self.at = at.extend(self.at.w);
    }

    fn refresh_device_state(&mut self, device_resources: &dyn DeviceResources) {
        let aspect_ratio = device_resources.aspect_ratio();
        if aspect_ratio != self.aspect_ratio {
            crate::scene_debug!(
                SOURCE,
                "Aspect ratio changed {:.3} -> {:.3}",
                self.aspect_ratio,
                aspect_ratio
            );
            self.aspect_ratio = aspect_ratio;
        }

        let orientation = device_resources.orientation_transform_3d();
        if orientation != self.scene_orientation {
            crate::scene_debug!(SOURCE, "Scene orientation changed");
            self.scene_orientation = orientation;
        }
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
