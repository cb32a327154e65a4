//! The per-frame scene driver.
//!
//! [`Scene`] owns the only state that outlives a frame: the animation phase,
//! the view rig, and the tracker's resting position. Each frame the host
//! hands it the accumulated [`Input`] and gets back a fresh
//! [`FrameTransforms`]; everything in it is computed, consumed by the draw
//! calls, and discarded.
//!
//! ```no_run
//! use sightline::{Input, Scene};
//!
//! let mut input = Input::new();
//! let mut scene = Scene::new();
//!
//! loop {
//!     input.begin_frame();
//!     // ...window loop forwards this frame's events into `input`...
//!     let transforms = scene.advance(&input);
//!     // upload transforms.target_model / transforms.tracker_model,
//!     // derive MV/MVP/normal matrices, issue draw calls
//!     for command in scene.view.commands(&input) {
//!         // apply wireframe/fullscreen/quit on the window side
//!     }
//! }
//! ```

use glam::{Mat4, Vec3};

use crate::animation::TargetAnimation;
use crate::input::Input;
use crate::rotation::look_at_or_identity;
use crate::view::ViewRig;

/// Model matrices for one frame, already composed with the view rig's
/// global transform.
#[derive(Clone, Copy, Debug)]
pub struct FrameTransforms {
    /// The animated target object.
    pub target_model: Mat4,
    /// The tracker, placed at its resting position and aimed at the target.
    pub tracker_model: Mat4,
    /// The view rig's global transform on its own, for hosts that draw
    /// additional geometry in scene space.
    pub view_global: Mat4,
}

/// Persistent demo state: one animated target, one tracker, one view rig.
#[derive(Clone, Copy, Debug)]
pub struct Scene {
    pub animation: TargetAnimation,
    pub view: ViewRig,
    /// Where the tracker mesh sits; only its orientation changes per frame.
    pub tracker_position: Vec3,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            animation: TargetAnimation::default(),
            view: ViewRig::new(),
            tracker_position: Vec3::new(0.0, 0.1, 0.0),
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one frame: applies input to the view rig, advances the target
    /// one tick, and rebuilds both model matrices.
    ///
    /// If the target passes exactly through the tracker there is no aim
    /// direction; the tracker keeps its unrotated orientation for that
    /// frame rather than going NaN.
    pub fn advance(&mut self, input: &Input) -> FrameTransforms {
        self.view.update(input);
        let target = self.animation.advance();
        let global = self.view.matrix();

        FrameTransforms {
            target_model: global * Mat4::from_translation(target),
            tracker_model: global * look_at_or_identity(self.tracker_position, target),
            view_global: global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::REFERENCE_AXIS;
    use winit::event::MouseButton;

    fn assert_rigid(m: Mat4) {
        let x = m.transform_vector3(Vec3::X);
        let y = m.transform_vector3(Vec3::Y);
        let z = m.transform_vector3(Vec3::Z);
        for v in [x, y, z] {
            assert!(v.is_finite());
            assert!((v.length() - 1.0).abs() < 1e-4, "axis length {}", v.length());
        }
        assert!(x.dot(y).abs() < 1e-4);
        assert!(y.dot(z).abs() < 1e-4);
        assert!(z.dot(x).abs() < 1e-4);
    }

    #[test]
    fn transforms_are_rigid_over_many_frames() {
        let input = Input::new();
        let mut scene = Scene::new();
        for _ in 0..500 {
            let frame = scene.advance(&input);
            assert_rigid(frame.target_model);
            assert_rigid(frame.tracker_model);
            assert_rigid(frame.view_global);
        }
    }

    #[test]
    fn tracker_aims_at_the_target() {
        let input = Input::new();
        let mut scene = Scene::new();
        let frame = scene.advance(&input);

        let target = scene.animation.position();
        let tracker_origin = frame.tracker_model.transform_point3(Vec3::ZERO);
        assert!((tracker_origin - scene.tracker_position).length() < 1e-5);

        // With an untouched view rig the global is identity, so the rotated
        // reference axis must point straight at the target.
        let aimed = frame.tracker_model.transform_vector3(REFERENCE_AXIS);
        let expected = (target - scene.tracker_position).normalize();
        assert!((aimed - expected).length() < 1e-4, "aimed {:?} vs {:?}", aimed, expected);
    }

    #[test]
    fn target_model_carries_the_animated_position() {
        let input = Input::new();
        let mut scene = Scene::new();
        let frame = scene.advance(&input);
        let placed = frame.target_model.transform_point3(Vec3::ZERO);
        assert!((placed - scene.animation.position()).length() < 1e-5);
    }

    #[test]
    fn view_rig_composes_on_the_left() {
        let mut input = Input::new();
        input.scrolled(1.0);

        let mut scene = Scene::new();
        let frame = scene.advance(&input);

        // The 0.1 zoom offset shows up on every output matrix.
        let expected = scene.view.matrix()
            * Mat4::from_translation(scene.animation.position());
        assert!((frame.target_model.transform_point3(Vec3::ZERO)
            - expected.transform_point3(Vec3::ZERO))
            .length()
            < 1e-5);
        assert!((frame.view_global.transform_point3(Vec3::ZERO).z - 0.1).abs() < 1e-6);
    }

    #[test]
    fn coincident_target_keeps_tracker_upright() {
        let input = Input::new();
        let mut scene = Scene::new();
        // Park the target path on top of the tracker.
        scene.animation.path.base = scene.tracker_position;
        scene.animation.path.amplitude = Vec3::ZERO;

        let frame = scene.advance(&input);
        let up = frame.tracker_model.transform_vector3(Vec3::Y);
        assert!(up.is_finite());
        assert!((up - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn dragging_changes_the_global_transform() {
        let mut input = Input::new();
        input.button(MouseButton::Left, true);
        input.cursor_moved(glam::Vec2::new(0.0, 0.0));
        input.cursor_moved(glam::Vec2::new(40.0, 0.0));

        let mut scene = Scene::new();
        let frame = scene.advance(&input);
        assert_ne!(frame.view_global, Mat4::IDENTITY);
        assert_rigid(frame.view_global);
    }
}
