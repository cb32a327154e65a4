//! Mouse-driven view rig: orbit, pan and zoom for the whole scene.
//!
//! Left-drag spins the scene about the view X and Y axes, right-drag pans
//! it in the view plane, and the wheel dollies along Z. The rig only owns
//! the accumulated spin and pan; projection and the camera itself belong to
//! the host renderer, which left-multiplies [`ViewRig::matrix`] into every
//! model transform.

use glam::{Mat4, Vec2, Vec3, Vec4};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::input::Input;

/// Degrees of spin per pixel of left-button drag.
const SPIN_PER_PIXEL: f32 = 0.5;
/// World units of pan per pixel of right-button drag.
const PAN_PER_PIXEL: f32 = 0.01;
/// World units of dolly per wheel notch.
const ZOOM_PER_NOTCH: f32 = 0.1;

/// Discrete actions requested through the keyboard, for the host to carry
/// out. Rendering modes and window state are outside this crate; the rig
/// only does the key mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewCommand {
    /// Draw in wireframe.
    Wireframe,
    /// Draw filled polygons.
    Solid,
    /// Enter fullscreen.
    Fullscreen,
    /// Return to a normal window.
    Windowed,
    /// Exit the application.
    Quit,
}

impl ViewCommand {
    /// The demo's keyboard shortcuts.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyW => Some(Self::Wireframe),
            KeyCode::KeyS => Some(Self::Solid),
            KeyCode::KeyF => Some(Self::Fullscreen),
            KeyCode::KeyN => Some(Self::Windowed),
            KeyCode::Escape => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Accumulated orbit/pan/zoom state for the scene's global transform.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewRig {
    /// Spin angles in degrees: `x` about the view X axis (from vertical
    /// drag), `y` about the view Y axis (from horizontal drag).
    pub spin: Vec2,
    /// Scene offset: X/Y from panning, Z from wheel zoom.
    pub pan: Vec3,
}

impl ViewRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one frame of accumulated input.
    pub fn update(&mut self, input: &Input) {
        if input.held(MouseButton::Left) {
            let drag = input.cursor_delta();
            self.spin.x += SPIN_PER_PIXEL * drag.y;
            self.spin.y += SPIN_PER_PIXEL * drag.x;
        } else if input.held(MouseButton::Right) {
            let drag = input.cursor_delta();
            self.pan.x += PAN_PER_PIXEL * drag.x;
            self.pan.y -= PAN_PER_PIXEL * drag.y;
        }

        self.pan.z += ZOOM_PER_NOTCH * input.scroll_delta();
    }

    /// Commands requested by keys pressed this frame.
    pub fn commands<'a>(&self, input: &'a Input) -> impl Iterator<Item = ViewCommand> + 'a {
        input.pressed_keys().filter_map(ViewCommand::from_key)
    }

    /// The global transform: spin about Y, then about X, then the pan
    /// offset written into the translation column.
    pub fn matrix(&self) -> Mat4 {
        let mut m = Mat4::from_rotation_x(self.spin.x.to_radians())
            * Mat4::from_rotation_y(self.spin.y.to_radians());
        m.w_axis = Vec4::new(self.pan.x, self.pan.y, self.pan.z, 1.0);
        m
    }
}
