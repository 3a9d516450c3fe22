//! SimpleScene demo: fly a camera around an empty window.
//!
//! WASD moves, E/Q rise and fall, hold the right mouse button to look.
//! Camera state is logged through the engine logger once per second.

use std::sync::Arc;

use simple_scene::glam::Vec4;
use simple_scene::simple3d::{
    Camera, CameraConfig, Error, Result, StepTimer, WindowDeviceResources,
};
use simple_scene::{scene_error, scene_info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

const SOURCE: &str = "simple_scene_demo";

struct DemoApp {
    window: Option<Arc<Window>>,
    device: WindowDeviceResources,
    camera: Camera,
    timer: StepTimer,
    last_reported_second: u64,
}

impl DemoApp {
    fn new() -> Result<Self> {
        let device = WindowDeviceResources::default();
        let config = CameraConfig {
            eye: Vec4::new(0.0, 1.5, -4.0, 1.0),
            at: Vec4::new(0.0, 1.0, 0.0, 1.0),
            up: Vec4::new(0.0, 1.0, 0.0, 0.0),
            movement_speed: 3.0,
            ..CameraConfig::default()
        };
        let camera = Camera::from_config(&config, &device);
        camera.validate()?;

        Ok(Self {
            window: None,
            device,
            camera,
            timer: StepTimer::new(),
            last_reported_second: 0,
        })
    }

    fn frame(&mut self) {
        let camera = &mut self.camera;
        let device = &self.device;
        self.timer.tick(|timer| camera.update(timer, device));

        let second = self.timer.total_seconds() as u64;
        if second != self.last_reported_second {
            self.last_reported_second = second;
            let eye = self.camera.eye();
            let direction = self.camera.direction();
            scene_info!(
                SOURCE,
                "{} FPS, eye ({:.2}, {:.2}, {:.2}), looking ({:.2}, {:.2}, {:.2})",
                self.timer.frames_per_second(),
                eye.x,
                eye.y,
                eye.z,
                direction.x,
                direction.y,
                direction.z
            );
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes().with_title("SimpleScene");
        match event_loop.create_window(attributes) {
            Ok(window) => {
                let size = window.inner_size();
                self.device.set_logical_size(size.width as f32, size.height as f32);
                self.timer.reset_elapsed_time();
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                scene_error!(SOURCE, "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.camera.handle_window_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.device.set_logical_size(size.width as f32, size.height as f32);
            }
            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run() -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| Error::InitializationFailed(format!("event loop: {}", e)))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new()?;
    log::info!("Starting SimpleScene demo (WASD/E/Q to move, right mouse to look)");
    event_loop
        .run_app(&mut app)
        .map_err(|e| Error::InitializationFailed(format!("event loop exited: {}", e)))
}

fn main() {
    // winit reports through the `log` facade
    env_logger::init();

    if let Err(e) = run() {
        scene_error!(SOURCE, "{}", e);
        std::process::exit(1);
    }
}
