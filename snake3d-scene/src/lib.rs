//! Scene objects of the snake3d game: the chase camera and the snake.
//!
//! Rendering is left to the caller; these types only track positions,
//! orientations, colors and sizes, and produce the matrices a renderer
//! needs.

mod basis;
mod camera;
mod error;
mod snake;

pub use crate::{
    camera::{Camera, CameraConfig},
    error::Error,
    snake::{Snake, SnakeConfig, SnakeSegment},
};

#[cfg(all(test, feature = "serde"))]
mod tests {
    use crate::{CameraConfig, SnakeConfig};

    #[test]
    fn configs_fill_missing_fields_with_defaults() {
        let camera: CameraConfig = serde_json::from_str(r#"{ "fov_y": 60.0 }"#).unwrap();
        assert_eq!(camera.fov_y, 60.0);
        assert_eq!(camera.far, CameraConfig::default().far);

        let snake: SnakeConfig = serde_json::from_str(r#"{ "segment_count": 12 }"#).unwrap();
        assert_eq!(snake.segment_count, 12);
        assert_eq!(snake.move_interval, SnakeConfig::default().move_interval);
    }
}
