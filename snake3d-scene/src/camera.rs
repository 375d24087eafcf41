use snake3d_math::{deg_to_rad, transform, Matrix4f, Vector3f};

use crate::{basis::Basis, Error};

/// Lens and chase parameters for a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Distance kept behind a followed target.
    pub follow_distance: f32,
    /// Height added above a followed target.
    pub follow_lift: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y: 80.0,
            near: 1.0,
            far: 200.0,
            follow_distance: 50.0,
            follow_lift: 5.0,
        }
    }
}

/// A perspective camera with a free-look orientation.
///
/// The orientation is kept as an orthonormal look/up/right frame that is
/// steered by [`Camera::rotate`]; it is never rebuilt from Euler angles, so
/// there is no gimbal lock when looking straight up or down.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vector3f,
    basis: Basis,
    fov_y: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Creates a camera at `position` looking along `look`.
    ///
    /// # Parameters
    /// * `look` - viewing direction, normalized on construction
    /// * `fov_y` - vertical field of view in degrees
    /// * `near`, `far` - clip plane distances, `0 < near < far`
    pub fn new(
        position: Vector3f,
        look: Vector3f,
        fov_y: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, Error> {
        validate_fov(fov_y)?;
        validate_clip_planes(near, far)?;
        let basis = Basis::from_forward(&look).ok_or_else(Error::zero_look_direction)?;

        Ok(Self {
            position,
            basis,
            fov_y,
            near,
            far,
        })
    }

    /// Creates a camera using the lens settings of `config`.
    pub fn from_config(
        position: Vector3f,
        look: Vector3f,
        config: &CameraConfig,
    ) -> Result<Self, Error> {
        Self::new(position, look, config.fov_y, config.near, config.far)
    }

    pub fn position(&self) -> Vector3f {
        self.position
    }

    pub fn set_position(&mut self, position: Vector3f) {
        self.position = position;
    }

    /// Unit viewing direction.
    pub fn look(&self) -> Vector3f {
        self.basis.forward
    }

    /// Points the camera along `look`, resetting up towards world up.
    pub fn set_look(&mut self, look: Vector3f) -> Result<(), Error> {
        self.basis = Basis::from_forward(&look).ok_or_else(Error::zero_look_direction)?;
        Ok(())
    }

    pub fn up(&self) -> Vector3f {
        self.basis.up
    }

    pub fn right(&self) -> Vector3f {
        self.basis.right
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn set_fov_y(&mut self, fov_y: f32) -> Result<(), Error> {
        validate_fov(fov_y)?;
        self.fov_y = fov_y;
        Ok(())
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> Result<(), Error> {
        validate_clip_planes(near, far)?;
        self.near = near;
        self.far = far;
        Ok(())
    }

    /// Pitches by `rotation.x` and then yaws by `rotation.y` radians.
    pub fn rotate(&mut self, rotation: &Vector3f) {
        self.basis.rotate(rotation);
        log::trace!(
            "camera rotated by ({:.4}, {:.4}), look now ({:.3}, {:.3}, {:.3})",
            rotation.x(),
            rotation.y(),
            self.basis.forward.x(),
            self.basis.forward.y(),
            self.basis.forward.z()
        );
    }

    pub fn translate(&mut self, translation: &Vector3f) {
        self.position += *translation;
    }

    /// Places the camera `distance` units behind `target` along the current
    /// look direction, raised by `lift`.
    pub fn follow(&mut self, target: &Vector3f, distance: f32, lift: &Vector3f) {
        self.position = *target - self.basis.forward * distance + *lift;
    }

    /// World-to-camera transform.
    pub fn view_matrix(&self) -> Matrix4f {
        transform::view(&self.position, &self.basis.forward, &self.basis.up)
    }

    /// Perspective projection for a viewport with the given width/height
    /// ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4f {
        transform::perspective(deg_to_rad(self.fov_y), aspect, self.near, self.far)
    }
}

fn validate_fov(fov_y: f32) -> Result<(), Error> {
    if fov_y > 0.0 && fov_y < 180.0 {
        Ok(())
    } else {
        Err(Error::invalid_field_of_view(fov_y))
    }
}

fn validate_clip_planes(near: f32, far: f32) -> Result<(), Error> {
    if near > 0.0 && far > near {
        Ok(())
    } else {
        Err(Error::invalid_clip_planes(near, far))
    }
}
