//! Shortest-arc orientation solving.
//!
//! This is the core of the crate: given where an object sits and where it
//! should be pointing, produce the 4×4 model matrix that places it there
//! with its reference axis aimed at the target.
//!
//! ```
//! use sightline::{look_at, Vec3};
//!
//! let tracker = Vec3::new(0.0, 0.1, 0.0);
//! let target = Vec3::new(3.0, 1.0, -2.0);
//!
//! let model = look_at(tracker, target).unwrap();
//! // Hand `model` to the renderer; MV/MVP/normal matrices derive from it.
//! ```
//!
//! The rotation is built directly as a quaternion from the half-angle
//! identity `w = sqrt(2(1 + cosθ))/2`, which stays numerically stable near
//! parallel inputs where an `acos` round trip would not. Both nearly-parallel
//! cases are handled explicitly: same direction yields the identity, opposite
//! directions yield a half turn about a fallback axis perpendicular to the
//! input.

use glam::{Mat4, Quat, Vec3};

/// Directions whose cosine is within this tolerance of ±1 are treated as
/// parallel.
const PARALLEL_EPSILON: f32 = 1e-5;

/// Squared length below which a vector cannot be normalized into a direction.
const DEGENERATE_EPSILON: f32 = 1e-12;

/// The axis a mesh is modeled along before any look-at rotation is applied.
///
/// Matches meshes authored to point "up", like
/// [`MeshData::tracker_triangle`](crate::MeshData::tracker_triangle).
pub const REFERENCE_AXIS: Vec3 = Vec3::Y;

/// Errors from the orientation solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrientationError {
    /// A direction vector was too short to normalize. Carries the squared
    /// length that was rejected.
    DegenerateDirection(f32),
}

impl std::fmt::Display for OrientationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrientationError::DegenerateDirection(len_sq) => {
                write!(
                    f,
                    "direction vector too short to normalize (length² = {})",
                    len_sq
                )
            }
        }
    }
}

impl std::error::Error for OrientationError {}

/// Computes the shortest-arc rotation mapping direction `start` onto
/// direction `dest`.
///
/// Both inputs are normalized independently; they do not need unit length
/// but must be non-zero. The result is always a unit quaternion.
///
/// # Errors
///
/// Returns [`OrientationError::DegenerateDirection`] if either input is too
/// short to define a direction. A zero vector is never silently turned into
/// NaN components.
///
/// # Example
///
/// ```
/// use sightline::{rotation_arc, Vec3};
///
/// let q = rotation_arc(Vec3::X, Vec3::Y).unwrap();
/// let rotated = q * Vec3::X;
/// assert!((rotated - Vec3::Y).length() < 1e-5);
/// ```
pub fn rotation_arc(start: Vec3, dest: Vec3) -> Result<Quat, OrientationError> {
    let start = direction(start)?;
    let dest = direction(dest)?;

    let cos_theta = start.dot(dest);

    if cos_theta >= 1.0 - PARALLEL_EPSILON {
        // Already aligned.
        return Ok(Quat::IDENTITY);
    }

    if cos_theta <= -1.0 + PARALLEL_EPSILON {
        // Opposite directions: any axis perpendicular to `start` gives a
        // valid half turn.
        return Ok(Quat::from_axis_angle(
            perpendicular_axis(start),
            std::f32::consts::PI,
        ));
    }

    // General case, trig-free: with s = sqrt(2(1 + cosθ)), the quaternion
    // (s/2, cross/s) encodes the half angle exactly. Near the antiparallel
    // threshold 1/s grows large and amplifies input rounding, so the result
    // is renormalized before it leaves.
    let axis = start.cross(dest);
    let s = (2.0 * (1.0 + cos_theta)).sqrt();
    let inv_s = 1.0 / s;

    Ok(Quat::from_xyzw(
        axis.x * inv_s,
        axis.y * inv_s,
        axis.z * inv_s,
        s * 0.5,
    )
    .normalize())
}

/// Builds the model matrix that places an object at `source` with its
/// [`REFERENCE_AXIS`] pointing at `target`.
///
/// The rotation is applied about the object's local origin first, then the
/// translation to `source` (glam's column-vector convention; the returned
/// matrix is `T * R`). The result is always a rigid transform.
///
/// # Errors
///
/// Returns [`OrientationError::DegenerateDirection`] when `source` and
/// `target` coincide, since no aim direction exists. See
/// [`look_at_or_identity`] for the fallback policy.
pub fn look_at(source: Vec3, target: Vec3) -> Result<Mat4, OrientationError> {
    look_at_axis(source, target, REFERENCE_AXIS)
}

/// Like [`look_at`], but aims an arbitrary local `axis` instead of the
/// default reference axis.
pub fn look_at_axis(source: Vec3, target: Vec3, axis: Vec3) -> Result<Mat4, OrientationError> {
    let rotation = rotation_arc(axis, target - source)?;
    Ok(Mat4::from_rotation_translation(rotation, source))
}

/// Infallible variant of [`look_at`]: when `source` and `target` coincide
/// the object keeps its unrotated orientation and is simply placed at
/// `source`.
///
/// This is the policy the [`Scene`](crate::Scene) driver uses so an animated
/// target passing exactly through the tracker never produces a NaN matrix.
pub fn look_at_or_identity(source: Vec3, target: Vec3) -> Mat4 {
    match rotation_arc(REFERENCE_AXIS, target - source) {
        Ok(rotation) => Mat4::from_rotation_translation(rotation, source),
        Err(OrientationError::DegenerateDirection(_)) => Mat4::from_translation(source),
    }
}

fn direction(v: Vec3) -> Result<Vec3, OrientationError> {
    let len_sq = v.length_squared();
    if len_sq <= DEGENERATE_EPSILON {
        return Err(OrientationError::DegenerateDirection(len_sq));
    }
    Ok(v / len_sq.sqrt())
}

/// Picks a unit axis perpendicular to `dir` for the 180° case. Crosses with
/// world Z first; when `dir` itself lies along Z that cross is degenerate,
/// so world Y is used instead.
fn perpendicular_axis(dir: Vec3) -> Vec3 {
    let axis = dir.cross(Vec3::Z);
    if axis.length_squared() > PARALLEL_EPSILON {
        axis.normalize()
    } else {
        dir.cross(Vec3::Y).normalize()
    }
}
