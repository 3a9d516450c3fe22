use glam::{Vec2, Vec3};
use winit::dpi::PhysicalPosition;
use winit::event::{DeviceId, ElementState, MouseButton, WindowEvent};
use winit::keyboard::KeyCode;
use super::*;

// ============================================================================
// Key mapping
// ============================================================================

#[test]
fn test_default_key_mapping() {
    assert_eq!(MoveKey::from_key_code(KeyCode::KeyW), Some(MoveKey::Forward));
    assert_eq!(MoveKey::from_key_code(KeyCode::KeyS), Some(MoveKey::Backward));
    assert_eq!(MoveKey::from_key_code(KeyCode::KeyA), Some(MoveKey::Left));
    assert_eq!(MoveKey::from_key_code(KeyCode::KeyD), Some(MoveKey::Right));
    assert_eq!(MoveKey::from_key_code(KeyCode::KeyE), Some(MoveKey::Up));
    assert_eq!(MoveKey::from_key_code(KeyCode::KeyQ), Some(MoveKey::Down));
    assert_eq!(MoveKey::from_key_code(KeyCode::Space), None);
}

// ============================================================================
// Held keys and edges
// ============================================================================

#[test]
fn test_press_and_release_produce_edges() {
    let mut input = CameraInput::new();
    assert!(!input.take_key_edge());

    input.press(MoveKey::Forward);
    assert!(input.is_held(MoveKey::Forward));
    assert!(input.take_key_edge());
    assert!(!input.take_key_edge());

    input.release(MoveKey::Forward);
    assert!(!input.is_held(MoveKey::Forward));
    assert!(input.take_key_edge());
}

#[test]
fn test_key_repeat_is_not_an_edge() {
    let mut input = CameraInput::new();
    input.press(MoveKey::Left);
    input.take_key_edge();

    input.press(MoveKey::Left);
    assert!(!input.take_key_edge());
}

#[test]
fn test_release_of_unheld_key_is_not_an_edge() {
    let mut input = CameraInput::new();
    input.release(MoveKey::Up);
    assert!(!input.take_key_edge());
}

#[test]
fn test_movement_axes() {
    let mut input = CameraInput::new();
    assert_eq!(input.movement_axes(), Vec3::ZERO);

    input.press(MoveKey::Forward);
    input.press(MoveKey::Right);
    input.press(MoveKey::Down);
    assert_eq!(input.movement_axes(), Vec3::new(1.0, -1.0, 1.0));
}

#[test]
fn test_opposing_keys_cancel() {
    let mut input = CameraInput::new();
    input.press(MoveKey::Forward);
    input.press(MoveKey::Backward);
    assert_eq!(input.movement_axes(), Vec3::ZERO);
}

// ============================================================================
// Mouse look
// ============================================================================

#[test]
fn test_cursor_motion_ignored_while_look_inactive() {
    let mut input = CameraInput::new();
    input.cursor_moved(Vec2::new(10.0, 10.0));
    input.cursor_moved(Vec2::new(50.0, 20.0));

    assert_eq!(input.take_look_delta(), Vec2::ZERO);
}

#[test]
fn test_look_delta_accumulates_and_resets() {
    let mut input = CameraInput::new();
    input.cursor_moved(Vec2::new(100.0, 100.0));
    input.set_look_active(true);

    input.cursor_moved(Vec2::new(110.0, 95.0));
    input.cursor_moved(Vec2::new(115.0, 90.0));

    assert_eq!(input.take_look_delta(), Vec2::new(15.0, -10.0));
    assert_eq!(input.take_look_delta(), Vec2::ZERO);
}

#[test]
fn test_first_cursor_sample_does_not_jump() {
    let mut input = CameraInput::new();
    input.set_look_active(true);
    input.cursor_moved(Vec2::new(400.0, 300.0));

    assert_eq!(input.take_look_delta(), Vec2::ZERO);
}

#[test]
fn test_deactivating_look_drops_pending_delta() {
    let mut input = CameraInput::new();
    input.cursor_moved(Vec2::ZERO);
    input.set_look_active(true);
    input.cursor_moved(Vec2::new(5.0, 5.0));

    input.set_look_active(false);
    assert!(!input.is_look_active());
    assert_eq!(input.take_look_delta(), Vec2::ZERO);
}

// ============================================================================
// Window events
// ============================================================================

#[test]
fn test_focus_loss_releases_keys() {
    let mut input = CameraInput::new();
    input.press(MoveKey::Forward);
    input.set_look_active(true);
    input.take_key_edge();

    let consumed = input.handle_window_event(&WindowEvent::Focused(false));

    assert!(!consumed);
    assert_eq!(input.movement_axes(), Vec3::ZERO);
    assert!(input.take_key_edge());
    assert!(!input.is_look_active());
}

#[test]
fn test_unrelated_event_not_consumed() {
    let mut input = CameraInput::new();
    assert!(!input.handle_window_event(&WindowEvent::Focused(true)));
}

fn mouse_button(state: ElementState, button: MouseButton) -> WindowEvent {
    WindowEvent::MouseInput {
        device_id: unsafe { DeviceId::dummy() },
        state,
        button,
    }
}

fn cursor_at(x: f64, y: f64) -> WindowEvent {
    WindowEvent::CursorMoved {
        device_id: unsafe { DeviceId::dummy() },
        position: PhysicalPosition::new(x, y),
    }
}

#[test]
fn test_right_button_toggles_look() {
    let mut input = CameraInput::new();

    assert!(input.handle_window_event(&mouse_button(ElementState::Pressed, MouseButton::Right)));
    assert!(input.is_look_active());

    assert!(input.handle_window_event(&mouse_button(ElementState::Released, MouseButton::Right)));
    assert!(!input.is_look_active());
}

#[test]
fn test_other_buttons_not_consumed() {
    let mut input = CameraInput::new();

    assert!(!input.handle_window_event(&mouse_button(ElementState::Pressed, MouseButton::Left)));
    assert!(!input.is_look_active());
}

#[test]
fn test_cursor_moved_consumed_only_while_looking() {
    let mut input = CameraInput::new();

    assert!(!input.handle_window_event(&cursor_at(10.0, 10.0)));
    assert!(!input.handle_window_event(&cursor_at(20.0, 10.0)));
    assert_eq!(input.take_look_delta(), Vec2::ZERO);

    input.handle_window_event(&mouse_button(ElementState::Pressed, MouseButton::Right));
    assert!(input.handle_window_event(&cursor_at(35.0, 4.0)));
    assert!(input.handle_window_event(&cursor_at(40.0, 0.0)));

    assert_eq!(input.take_look_delta(), Vec2::new(20.0, -10.0));
}

#[test]
fn test_right_release_drops_pending_look() {
    let mut input = CameraInput::new();
    input.handle_window_event(&cursor_at(0.0, 0.0));
    input.handle_window_event(&mouse_button(ElementState::Pressed, MouseButton::Right));
    input.handle_window_event(&cursor_at(8.0, 8.0));

    input.handle_window_event(&mouse_button(ElementState::Released, MouseButton::Right));

    assert_eq!(input.take_look_delta(), Vec2::ZERO);
}
