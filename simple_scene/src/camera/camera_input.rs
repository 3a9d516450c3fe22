/// CameraInput: per-frame input sample consumed by the camera.
///
/// Window events are folded into this state as they arrive. Once per frame
/// `Camera::update` drains it: key edges re-derive the movement direction,
/// and the accumulated look delta rotates the view.

use glam::{Vec2, Vec3};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Logical movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl MoveKey {
    /// Default WASD/EQ mapping on physical key positions
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(MoveKey::Forward),
            KeyCode::KeyS => Some(MoveKey::Backward),
            KeyCode::KeyA => Some(MoveKey::Left),
            KeyCode::KeyD => Some(MoveKey::Right),
            KeyCode::KeyE => Some(MoveKey::Up),
            KeyCode::KeyQ => Some(MoveKey::Down),
            _ => None,
        }
    }

    fn bit(&self) -> u8 {
        match self {
            MoveKey::Forward => 1 << 0,
            MoveKey::Backward => 1 << 1,
            MoveKey::Left => 1 << 2,
            MoveKey::Right => 1 << 3,
            MoveKey::Up => 1 << 4,
            MoveKey::Down => 1 << 5,
        }
    }
}

/// Held keys, look button and mouse motion since the last frame.
#[derive(Debug, Clone, Default)]
pub struct CameraInput {
    held: u8,
    key_edge: bool,
    look_active: bool,
    last_cursor: Option<Vec2>,
    look_delta: Vec2,
}

impl CameraInput {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== KEYS =====

    /// Mark a movement key as held. Repeats of a held key are not edges.
    pub fn press(&mut self, key: MoveKey) {
        if self.held & key.bit() == 0 {
            self.held |= key.bit();
            self.key_edge = true;
        }
    }

    /// Mark a movement key as released.
    pub fn release(&mut self, key: MoveKey) {
        if self.held & key.bit() != 0 {
            self.held &= !key.bit();
            self.key_edge = true;
        }
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        self.held & key.bit() != 0
    }

    /// Whether the held-key set changed since the last call. Clears the flag.
    pub fn take_key_edge(&mut self) -> bool {
        std::mem::take(&mut self.key_edge)
    }

    /// Movement intent in camera-local axes.
    ///
    /// x = strafe (right positive), y = rise, z = forward. Opposing keys
    /// cancel out.
    pub fn movement_axes(&self) -> Vec3 {
        let axis = |positive: MoveKey, negative: MoveKey| -> f32 {
            (self.is_held(positive) as i8 - self.is_held(negative) as i8) as f32
        };
        Vec3::new(
            axis(MoveKey::Right, MoveKey::Left),
            axis(MoveKey::Up, MoveKey::Down),
            axis(MoveKey::Forward, MoveKey::Backward),
        )
    }

    // ===== MOUSE LOOK =====

    /// Enable or disable mouse look (right button held).
    pub fn set_look_active(&mut self, active: bool) {
        self.look_active = active;
        if !active {
            self.look_delta = Vec2::ZERO;
        }
    }

    pub fn is_look_active(&self) -> bool {
        self.look_active
    }

    /// Record a cursor position in window pixels.
    ///
    /// Motion only accumulates while look is active; the position is always
    /// tracked so that the first drag frame does not jump.
    pub fn cursor_moved(&mut self, position: Vec2) {
        if let Some(last) = self.last_cursor {
            if self.look_active {
                self.look_delta += position - last;
            }
        }
        self.last_cursor = Some(position);
    }

    /// Pixels of look motion since the last call. Resets the accumulator.
    pub fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.look_delta)
    }

    // ===== WINDOW EVENTS =====

    /// Fold a winit window event into the input state.
    ///
    /// Returns true if the event was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                let Some(key) = MoveKey::from_key_code(code) else {
                    return false;
                };
                match event.state {
                    ElementState::Pressed => self.press(key),
                    ElementState::Released => self.release(key),
                }
                true
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Right,
                ..
            } => {
                self.set_look_active(*state == ElementState::Pressed);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
                self.look_active
            }
            WindowEvent::Focused(false) => {
                // Key-up events are lost while unfocused
                for key in [
                    MoveKey::Forward,
                    MoveKey::Backward,
                    MoveKey::Left,
                    MoveKey::Right,
                    MoveKey::Up,
                    MoveKey::Down,
                ] {
                    self.release(key);
                }
                self.set_look_active(false);
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "camera_input_tests.rs"]
mod tests;
