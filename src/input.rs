//! Frame-coherent input state.
//!
//! The host window loop forwards discrete `winit` events as they arrive;
//! the scene consumes the accumulated state exactly once per frame. This
//! replaces per-event mutation of scene state with a single explicit struct:
//! drags become a per-frame cursor delta, wheel motion a per-frame scroll
//! total, and key taps a per-frame set of presses.

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Accumulated keyboard and mouse state for one frame.
#[derive(Debug, Default)]
pub struct Input {
    held_buttons: HashSet<MouseButton>,
    pressed_keys: HashSet<KeyCode>,
    held_keys: HashSet<KeyCode>,
    cursor: Option<Vec2>,
    cursor_delta: Vec2,
    scroll_delta: f32,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the per-frame accumulators. Call once at the top of each
    /// frame, before forwarding that frame's events.
    pub fn begin_frame(&mut self) {
        self.pressed_keys.clear();
        self.cursor_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }

    /// Folds one window event into the frame's state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.key(key, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.button(*button, *state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scrolled(match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 120.0,
                });
            }
            _ => {}
        }
    }

    pub(crate) fn key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            // Key repeat while held does not count as a new press.
            if self.held_keys.insert(key) {
                self.pressed_keys.insert(key);
            }
        } else {
            self.held_keys.remove(&key);
        }
    }

    pub(crate) fn button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.held_buttons.insert(button);
        } else {
            self.held_buttons.remove(&button);
        }
    }

    pub(crate) fn cursor_moved(&mut self, pos: Vec2) {
        // The first event of a session has no previous position, so it
        // establishes the anchor without producing a jump.
        if let Some(prev) = self.cursor {
            self.cursor_delta += pos - prev;
        }
        self.cursor = Some(pos);
    }

    pub(crate) fn scrolled(&mut self, notches: f32) {
        self.scroll_delta += notches;
    }

    /// True while the given mouse button is held.
    pub fn held(&self, button: MouseButton) -> bool {
        self.held_buttons.contains(&button)
    }

    /// True if the key went down this frame.
    pub fn pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Keys that went down this frame.
    pub fn pressed_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.pressed_keys.iter().copied()
    }

    /// Last known cursor position in window pixels, if any event has
    /// reported one.
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Cursor movement accumulated this frame, in pixels.
    pub fn cursor_delta(&self) -> Vec2 {
        self.cursor_delta
    }

    /// Scroll wheel movement accumulated this frame, in notches.
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cursor_event_produces_no_delta() {
        let mut input = Input::new();
        input.cursor_moved(Vec2::new(100.0, 200.0));
        assert_eq!(input.cursor_delta(), Vec2::ZERO);
        assert_eq!(input.cursor(), Some(Vec2::new(100.0, 200.0)));
    }

    #[test]
    fn cursor_deltas_accumulate_within_a_frame() {
        let mut input = Input::new();
        input.cursor_moved(Vec2::new(10.0, 10.0));
        input.cursor_moved(Vec2::new(13.0, 12.0));
        input.cursor_moved(Vec2::new(15.0, 9.0));
        assert_eq!(input.cursor_delta(), Vec2::new(5.0, -1.0));

        input.begin_frame();
        assert_eq!(input.cursor_delta(), Vec2::ZERO);
        // The anchor survives the frame boundary.
        input.cursor_moved(Vec2::new(16.0, 9.0));
        assert_eq!(input.cursor_delta(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn key_repeat_is_a_single_press() {
        let mut input = Input::new();
        input.key(KeyCode::KeyW, true);
        input.key(KeyCode::KeyW, true);
        assert!(input.pressed(KeyCode::KeyW));
        assert_eq!(input.pressed_keys().count(), 1);

        input.begin_frame();
        assert!(!input.pressed(KeyCode::KeyW));
        // Still held from the earlier press, so no new press until release.
        input.key(KeyCode::KeyW, true);
        assert!(!input.pressed(KeyCode::KeyW));
        input.key(KeyCode::KeyW, false);
        input.key(KeyCode::KeyW, true);
        assert!(input.pressed(KeyCode::KeyW));
    }

    #[test]
    fn buttons_track_held_state() {
        let mut input = Input::new();
        input.button(MouseButton::Left, true);
        assert!(input.held(MouseButton::Left));
        assert!(!input.held(MouseButton::Right));
        input.button(MouseButton::Left, false);
        assert!(!input.held(MouseButton::Left));
    }

    #[test]
    fn scroll_accumulates_notches() {
        let mut input = Input::new();
        input.scrolled(1.0);
        input.scrolled(-3.0);
        assert_eq!(input.scroll_delta(), -2.0);
        input.begin_frame();
        assert_eq!(input.scroll_delta(), 0.0);
    }
}
