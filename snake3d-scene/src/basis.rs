use snake3d_math::{cross, transform, vector_multiply, Matrix3f, Vector3f};

const WORLD_UP: Vector3f = Vector3f::new(0.0, 1.0, 0.0);

/// Orthonormal frame shared by the camera and the snake: a forward
/// direction plus the up and right vectors steering rotates around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Basis {
    pub(crate) forward: Vector3f,
    pub(crate) up: Vector3f,
    pub(crate) right: Vector3f,
}

impl Basis {
    /// Builds a frame around `forward`, keeping up as close to world up as
    /// possible. Returns `None` for a zero or non-finite direction.
    pub(crate) fn from_forward(forward: &Vector3f) -> Option<Self> {
        let length_sqr = forward.magnitude_sqr();
        if length_sqr == 0.0 || !length_sqr.is_finite() {
            return None;
        }

        let forward = forward.normalized();
        let mut right = cross(&WORLD_UP, &forward);
        if right.magnitude_sqr() == 0.0 {
            // looking straight up or down
            right = Vector3f::new(1.0, 0.0, 0.0);
        }
        let right = right.normalized();
        let up = cross(&forward, &right);

        Some(Self { forward, up, right })
    }

    /// Pitches about the right vector by `rotation.x`, then yaws about the
    /// resulting up vector by `rotation.y`. Angles are in radians.
    ///
    /// The frame is re-orthonormalized afterwards so rounding errors do not
    /// accumulate over many steering steps.
    pub(crate) fn rotate(&mut self, rotation: &Vector3f) {
        let pitch: Matrix3f = transform::rotation_axis(&self.right, rotation.x());
        self.forward = vector_multiply(&self.forward, &pitch);
        self.up = vector_multiply(&self.up, &pitch);

        let yaw: Matrix3f = transform::rotation_axis(&self.up, rotation.y());
        self.forward = vector_multiply(&self.forward, &yaw);
        self.right = vector_multiply(&self.right, &yaw);

        self.orthonormalize();
    }

    /// Rebuilds right and up from the forward and up directions.
    fn orthonormalize(&mut self) {
        self.forward.normalize();
        self.right = cross(&self.up, &self.forward).normalized();
        self.up = cross(&self.forward, &self.right);
    }
}
