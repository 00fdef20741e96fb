//! Interaction state machine
//!
//! A [`Scene`] owns the camera, the object transform and the mode flags, and
//! advances them by a fixed set of rules: a per-frame tick, held-key camera
//! and object moves, and edge-triggered mode toggles.

use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::input::{InputSource, Key, KeyPressed};
use crate::transform::ObjectTransform;
use nalgebra::{Matrix4, Vector3};

/// Camera-relative direction for object translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectAxis {
    /// normalize(front x up)
    Right,
    /// target - position, deliberately left unnormalized
    Forward,
    /// normalize(right x front)
    Up,
}

/// One discrete update rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Move the camera along a world axis; the vector is scaled by the camera step
    MoveCamera(Vector3<f32>),
    /// Snap the camera position to a preset
    SnapCamera(usize),
    /// Translate the object by `sign * object_step` along an axis
    TranslateObject(ObjectAxis, f32),
    ToggleRotate,
    ToggleRevolve,
}

impl Command {
    /// Command bound to a held key, if any
    pub fn for_held_key(key: Key) -> Option<Self> {
        let command = match key {
            Key::Q => Command::MoveCamera(Vector3::y()),
            Key::E => Command::MoveCamera(-Vector3::y()),
            Key::A => Command::MoveCamera(-Vector3::x()),
            Key::D => Command::MoveCamera(Vector3::x()),
            Key::W => Command::MoveCamera(Vector3::z()),
            Key::S => Command::MoveCamera(-Vector3::z()),
            Key::M => Command::TranslateObject(ObjectAxis::Right, 1.0),
            Key::B => Command::TranslateObject(ObjectAxis::Right, -1.0),
            Key::J => Command::TranslateObject(ObjectAxis::Forward, 1.0),
            Key::N => Command::TranslateObject(ObjectAxis::Forward, -1.0),
            Key::H => Command::TranslateObject(ObjectAxis::Up, 1.0),
            Key::K => Command::TranslateObject(ObjectAxis::Up, -1.0),
            Key::Digit1 => Command::SnapCamera(0),
            Key::Digit2 => Command::SnapCamera(1),
            _ => return None,
        };
        Some(command)
    }

    /// Command bound to a key press transition, if any
    pub fn for_key_press(key: Key) -> Option<Self> {
        match key {
            Key::R => Some(Command::ToggleRotate),
            Key::T => Some(Command::ToggleRevolve),
            _ => None,
        }
    }

    /// Whether this command repositions the camera or flips a mode, and so
    /// first undoes the target shift left behind by an object translate.
    fn resets_target(&self) -> bool {
        !matches!(self, Command::TranslateObject(..))
    }
}

/// Held keys in polling order
pub const HELD_KEYS: [Key; 14] = [
    Key::Q,
    Key::E,
    Key::A,
    Key::D,
    Key::W,
    Key::S,
    Key::M,
    Key::B,
    Key::J,
    Key::N,
    Key::H,
    Key::K,
    Key::Digit1,
    Key::Digit2,
];

/// The three mode flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub rotating: bool,
    pub revolving: bool,
    /// The most recent action was an object translate
    pub translated_last: bool,
}

/// Matrices handed to the renderer for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub model: Matrix4<f32>,
    pub view: Matrix4<f32>,
    pub projection: Matrix4<f32>,
}

/// Camera, object and mode state driven by keyboard input
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    camera: Camera,
    object: ObjectTransform,
    flags: ModeFlags,
    view: Matrix4<f32>,
}

impl Scene {
    /// Create a scene in its initial state
    pub fn new(config: SceneConfig) -> Self {
        let camera = config.camera.clone();
        let object = ObjectTransform::at(config.object_center);
        let view = camera.view_matrix();
        Self {
            config,
            camera,
            object,
            flags: ModeFlags::default(),
            view,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn object(&self) -> &ObjectTransform {
        &self.object
    }

    pub fn flags(&self) -> ModeFlags {
        self.flags
    }

    /// View matrix as of the last [`Scene::update_view`]
    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.view
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        self.object.matrix()
    }

    /// Per-frame tick: spin the object, rebuild its matrix, revolve the camera
    pub fn tick(&mut self) {
        if self.flags.rotating {
            self.object.angle += self.config.rotation_step;
        }

        self.object.recompute();

        if self.flags.revolving {
            self.camera.revolve(self.config.revolve_step);
        }
    }

    /// Apply one command
    pub fn apply(&mut self, command: Command) {
        if command.resets_target() {
            if self.flags.translated_last {
                self.camera.target = self.object.center;
            }
            self.flags.translated_last = false;
        }

        match command {
            Command::MoveCamera(axis) => {
                self.camera.position += axis * self.config.camera_step;
            }
            Command::SnapCamera(preset) => {
                if let Some(position) = self.config.presets.get(preset) {
                    self.camera.position = *position;
                    log::debug!("Camera snapped to preset {} at {}", preset + 1, position);
                }
            }
            Command::TranslateObject(axis, sign) => {
                let direction = match axis {
                    ObjectAxis::Right => self.camera.right(),
                    ObjectAxis::Forward => self.camera.front(),
                    ObjectAxis::Up => self.camera.local_up(),
                };
                self.object.translate(direction * (sign * self.config.object_step));
                self.flags.translated_last = true;
            }
            Command::ToggleRotate => {
                self.flags.rotating = !self.flags.rotating;
                log::info!("Object rotation {}", on_off(self.flags.rotating));
            }
            Command::ToggleRevolve => {
                self.flags.revolving = !self.flags.revolving;
                log::info!("Camera revolve {}", on_off(self.flags.revolving));
            }
        }
    }

    /// Apply the commands of every held key, in [`HELD_KEYS`] order
    pub fn poll_held<I: InputSource + ?Sized>(&mut self, input: &I) {
        for key in HELD_KEYS {
            if input.is_held(key) {
                if let Some(command) = Command::for_held_key(key) {
                    self.apply(command);
                }
            }
        }
    }

    /// Apply the toggles bound to a batch of press transitions
    pub fn handle_key_presses(&mut self, events: &[KeyPressed]) {
        for KeyPressed(key) in events {
            if let Some(command) = Command::for_key_press(*key) {
                self.apply(command);
            }
        }
    }

    /// Recompute the look-at matrix unless an object translate just happened,
    /// in which case last frame's view is kept for this frame. Returns whether
    /// the view was recomputed.
    pub fn update_view(&mut self) -> bool {
        if self.flags.translated_last {
            return false;
        }
        self.view = self.camera.view_matrix();
        true
    }

    /// Tick, poll held keys and refresh the view, returning this frame's matrices
    pub fn advance<I: InputSource + ?Sized>(
        &mut self,
        input: &I,
        viewport: (u32, u32),
    ) -> FrameMatrices {
        self.tick();
        self.poll_held(input);
        self.update_view();

        FrameMatrices {
            model: self.model_matrix(),
            view: self.view,
            projection: self.config.projection.matrix(viewport.0, viewport.1),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
