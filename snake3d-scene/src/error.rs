/// Error categories.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Camera parameters that cannot produce a valid projection.
    #[error("Camera error: {0}")]
    Camera(String),

    /// Snake parameters that cannot produce a movable snake.
    #[error("Snake error: {0}")]
    Snake(String),
}

impl Error {
    // Camera errors
    pub fn invalid_field_of_view(fov_y: f32) -> Self {
        Self::Camera(format!("Field of view must be within (0, 180) degrees, got {fov_y}"))
    }

    pub fn invalid_clip_planes(near: f32, far: f32) -> Self {
        Self::Camera(format!("Clip planes must satisfy 0 < near < far, got near={near} far={far}"))
    }

    pub fn zero_look_direction() -> Self {
        Self::Camera("Look direction must not be zero".to_string())
    }

    // Snake errors
    pub fn no_segments() -> Self {
        Self::Snake("Snake needs at least one segment".to_string())
    }

    pub fn invalid_segment_size(size: f32) -> Self {
        Self::Snake(format!("Segment size must be positive, got {size}"))
    }

    pub fn invalid_move_interval(interval: f32) -> Self {
        Self::Snake(format!("Move interval must be positive, got {interval}"))
    }

    pub fn zero_heading() -> Self {
        Self::Snake("Heading must not be zero".to_string())
    }
}
