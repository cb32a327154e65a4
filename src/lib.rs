//! # Sightline
//!
//! **Frame-local look-at math for interactive 3D demos.**
//!
//! Sightline computes the per-frame geometry for a classic tracking scene:
//! one object sweeps along a parametric path while a second continuously
//! re-orients to point at it, under a mouse-driven orbit/pan/zoom view.
//! Rendering, windowing, GPU buffers and projection stay with the host —
//! the host forwards input events in and gets model matrices back.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sightline::{Input, MeshData, Scene, ViewCommand};
//!
//! let mut input = Input::new();
//! let mut scene = Scene::new();
//!
//! // One-time: hand the vertex data to your renderer.
//! let cube = MeshData::cube();
//! let tracker = MeshData::tracker_triangle();
//!
//! // Each frame: clear the previous frame's accumulators first, then
//! // forward that frame's window events via `input.handle_event(..)`.
//! input.begin_frame();
//! // ...events forwarded here...
//! let transforms = scene.advance(&input);
//! // draw `cube` with transforms.target_model,
//! // draw `tracker` with transforms.tracker_model
//! if scene.view.commands(&input).any(|c| c == ViewCommand::Quit) {
//!     // shut down
//! }
//! ```
//!
//! The core is the shortest-arc orientation solver in [`rotation_arc`] and
//! [`look_at`]; the rest of the crate is the explicit frame state (input,
//! view rig, animation phase) that feeds it.

mod animation;
mod input;
mod mesh;
mod oscillator;
mod rotation;
mod scene;
mod view;

pub use animation::{OrbitPath, TargetAnimation};
pub use input::Input;
pub use mesh::{MeshData, Vertex3d, face_normal};
pub use oscillator::PhaseOscillator;
pub use rotation::{
    OrientationError, REFERENCE_AXIS, look_at, look_at_axis, look_at_or_identity, rotation_arc,
};
pub use scene::{FrameTransforms, Scene};
pub use view::{ViewCommand, ViewRig};

// Re-export the math types the public API traffics in.
pub use glam::{Mat4, Quat, Vec2, Vec3};

// Re-export commonly used winit types for convenience.
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;
