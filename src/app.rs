use serde::Deserialize;
use tumble_camera::Camera;
use tumble_logging::{log_info, log_verbose, log_debug};
use tumble_math::*;

use crate::{config::{InputSettings, Settings}, LOG_CAT};

/// Camera navigation mode, toggled with `z`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Rotate the view around the eye
    Tumble,
    /// Move the eye around the target
    Orbit,
}

/// Keys with a binding
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    W, S, A, D, Space, X,
    H, J, Y, U, N, M,
    Z, C, R,
}

/// Recorded input event
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// Key press followed by a release
    Key { key: Key },
    KeyDown { key: Key },
    KeyUp { key: Key },
    /// Relative mouse motion in pixels
    Mouse { dx: f32, dy: f32 },
    /// Window resize in pixels
    Resize { width: u32, height: u32 },
    /// Render a frame
    Frame,
}

/// Matrices produced for a single frame
#[derive(Clone, PartialEq, Debug)]
pub struct FrameMatrices {
    pub view            : Mat4<f32>,
    pub view_projection : Mat4<f32>,
    /// Views of the 3 fixed observers, only filled in the four-viewport layout
    pub observers       : Vec<Mat4<f32>>,
}

const FOV_Y : Degrees<f32> = Degrees(45.0);
const NEAR  : f32 = 0.1;
const FAR   : f32 = 100.0;

const DEFAULT_WIDTH  : u32 = 640;
const DEFAULT_HEIGHT : u32 = 480;

/// State of a viewer session: the camera and everything the input handling toggles
pub struct AppState {
    camera     : Camera<f32>,
    mode       : Mode,
    rolling    : bool,
    viewports  : bool,
    input      : InputSettings,
    projection : Mat4<f32>,
    frames     : usize,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            camera: Camera::from_settings(&settings.camera),
            mode: settings.input.start_mode,
            rolling: false,
            viewports: false,
            input: settings.input,
            projection: Self::projection(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            frames: 0,
        }
    }

    pub fn camera(&self) -> &Camera<f32> {
        &self.camera
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    pub fn shows_viewports(&self) -> bool {
        self.viewports
    }

    pub fn projection_matrix(&self) -> Mat4<f32> {
        self.projection
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Apply a recorded event, returning the frame matrices for `Event::Frame`
    pub fn handle_event(&mut self, event: Event) -> Option<FrameMatrices> {
        match event {
            Event::Key { key } => {
                self.key_down(key);
                self.key_up(key);
            },
            Event::KeyDown { key } => self.key_down(key),
            Event::KeyUp { key } => self.key_up(key),
            Event::Mouse { dx, dy } => self.mouse_motion(dx, dy),
            Event::Resize { width, height } => self.resize(width, height),
            Event::Frame => return Some(self.frame()),
        }
        None
    }

    pub fn key_down(&mut self, key: Key) {
        let step = self.input.step;
        let cam = &mut self.camera;

        match key {
            Key::W => cam.strafe_forward(step),
            Key::S => cam.strafe_forward(-step),
            Key::D => cam.strafe_right(step),
            Key::A => cam.strafe_right(-step),
            Key::Space => cam.strafe_up(step),
            Key::X => cam.strafe_up(-step),
            Key::H => Self::move_both(cam, Vec3::new(step, 0.0, 0.0)),
            Key::J => Self::move_both(cam, Vec3::new(-step, 0.0, 0.0)),
            Key::Y => Self::move_both(cam, Vec3::new(0.0, step, 0.0)),
            Key::U => Self::move_both(cam, Vec3::new(0.0, -step, 0.0)),
            Key::N => Self::move_both(cam, Vec3::new(0.0, 0.0, step)),
            Key::M => Self::move_both(cam, Vec3::new(0.0, 0.0, -step)),
            Key::Z => {
                self.mode = match self.mode {
                    Mode::Tumble => Mode::Orbit,
                    Mode::Orbit => Mode::Tumble,
                };
                log_info!(LOG_CAT, "switched to {:?} mode", self.mode);
            },
            Key::C => {
                self.viewports = !self.viewports;
                log_info!(LOG_CAT, "four-viewport layout {}", if self.viewports { "on" } else { "off" });
            },
            Key::R => self.rolling = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if key == Key::R {
            self.rolling = false;
        }
    }

    fn move_both(cam: &mut Camera<f32>, offset: Vec3<f32>) {
        cam.move_position(offset);
        cam.move_target(offset);
    }

    /// Turn relative mouse motion into a roll, or a tumble/orbit depending on the mode
    pub fn mouse_motion(&mut self, dx: f32, dy: f32) {
        let dx = Degrees(dx * self.input.mouse_scale);
        let dy = Degrees(dy * self.input.mouse_scale);

        if self.rolling {
            self.camera.roll(dx);
            return;
        }

        match self.mode {
            Mode::Tumble => {
                self.camera.tumble_yaw(-dx);
                self.camera.tumble_pitch(-dy);
            },
            Mode::Orbit => {
                self.camera.orbit_yaw(-dx);
                self.camera.orbit_pitch(-dy);
            },
        }
    }

    /// Recompute the projection for the new window size, a height of 0 is treated as 1
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection = Self::projection(width, height);
        log_verbose!(LOG_CAT, "resized to {}x{}", width, height);
    }

    fn projection(width: u32, height: u32) -> Mat4<f32> {
        let aspect = width as f32 / Ord::max(height, 1) as f32;
        Mat4::create_perspective(FOV_Y.to_radians(), aspect, NEAR, FAR)
    }

    /// Produce the matrices for the next frame
    pub fn frame(&mut self) -> FrameMatrices {
        self.frames += 1;

        let view = self.camera.look_at();
        let view_projection = self.projection * view;
        log_verbose!(LOG_CAT, "frame {}: view {}", self.frames, view);
        log_debug!(LOG_CAT, Self::frame, "frame {}: projection * view {}", self.frames, view_projection);

        let observers = if self.viewports {
            let observers = Self::observer_views();
            for (idx, observer) in observers.iter().enumerate() {
                log_verbose!(LOG_CAT, "frame {}: observer {} view {}", self.frames, idx, observer);
            }
            observers.to_vec()
        } else {
            Vec::new()
        };

        FrameMatrices { view, view_projection, observers }
    }

    /// Fixed views looking at the origin from the side, from above and from the front
    pub fn observer_views() -> [Mat4<f32>; 3] {
        let origin = Vec3::zero();
        let y_up = Vec3::new(0.0, 1.0, 0.0);
        [
            Mat4::create_look_at(Vec3::new(50.0, 5.0, 0.0), origin, y_up),
            Mat4::create_look_at(Vec3::new(0.0, 50.0, 0.0), origin, Vec3::new(0.0, 0.0, 1.0)),
            Mat4::create_look_at(Vec3::new(0.0, 5.0, 50.0), origin, y_up),
        ]
    }
}
