use std::collections::VecDeque;

use snake3d_math::{cosine_interpolate, frac, sqr, Color3f, Vector3f};

use crate::{basis::Basis, Error};

/// Color of the segments at the start of each band.
const BAND_START_COLOR: Color3f = Color3f::new(0.463, 0.282, 0.0);
/// Color of the segments in the middle of each band.
const BAND_MIDDLE_COLOR: Color3f = Color3f::new(0.0, 1.0, 0.0);
/// Number of segments in one color/size band.
const BAND_LENGTH: usize = 20;
/// Segments appended by [`Snake::increase_length`].
const GROWTH_SEGMENTS: usize = 20;
/// Segments right behind the head that cannot collide with it.
const NECK_SEGMENTS: usize = 4;

/// Movement parameters for a [`Snake`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct SnakeConfig {
    /// Seconds between two moves.
    pub move_interval: f32,
    pub segment_count: usize,
    pub segment_size: f32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            move_interval: 0.01,
            segment_count: 40,
            segment_size: 1.0,
        }
    }
}

/// A single sphere of the snake's body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakeSegment {
    pub position: Vector3f,
    /// Sphere radius.
    pub size: f32,
    pub color: Color3f,
}

impl SnakeSegment {
    pub fn new(position: Vector3f, size: f32, color: Color3f) -> Self {
        Self {
            position,
            size,
            color,
        }
    }

    /// True when the two spheres touch or overlap.
    pub fn intersects(a: &SnakeSegment, b: &SnakeSegment) -> bool {
        (a.position - b.position).magnitude_sqr() <= sqr(a.size + b.size)
    }
}

/// The player's snake: a chain of segments that advances one unit along its
/// heading every `move_interval` seconds.
///
/// Moving recycles the tail segment as the new head, so the body follows
/// the exact path of the head.
#[derive(Debug, Clone)]
pub struct Snake {
    basis: Basis,
    move_interval: f32,
    segment_size: f32,
    segments: VecDeque<SnakeSegment>,
    elapsed_since_move: f32,
}

impl Snake {
    /// Creates a straight snake with its head at `head` and the body
    /// trailing behind it, opposite to `heading`.
    pub fn new(
        head: Vector3f,
        heading: Vector3f,
        move_interval: f32,
        segment_count: usize,
        segment_size: f32,
    ) -> Result<Self, Error> {
        if segment_count == 0 {
            return Err(Error::no_segments());
        }
        if !(segment_size > 0.0) {
            return Err(Error::invalid_segment_size(segment_size));
        }
        if !(move_interval > 0.0) {
            return Err(Error::invalid_move_interval(move_interval));
        }
        let basis = Basis::from_forward(&heading).ok_or_else(Error::zero_heading)?;

        let segments = (0..segment_count)
            .map(|i| {
                let position = head - basis.forward * i as f32;
                SnakeSegment::new(position, segment_size, BAND_START_COLOR)
            })
            .collect();

        let mut snake = Self {
            basis,
            move_interval,
            segment_size,
            segments,
            elapsed_since_move: 0.0,
        };
        snake.recolor();
        Ok(snake)
    }

    pub fn from_config(
        head: Vector3f,
        heading: Vector3f,
        config: &SnakeConfig,
    ) -> Result<Self, Error> {
        Self::new(
            head,
            heading,
            config.move_interval,
            config.segment_count,
            config.segment_size,
        )
    }

    /// Position of the head segment.
    pub fn position(&self) -> Vector3f {
        self.head().position
    }

    /// Unit direction of travel.
    pub fn heading(&self) -> Vector3f {
        self.basis.forward
    }

    pub fn up(&self) -> Vector3f {
        self.basis.up
    }

    pub fn right(&self) -> Vector3f {
        self.basis.right
    }

    pub fn segment_size(&self) -> f32 {
        self.segment_size
    }

    pub fn move_interval(&self) -> f32 {
        self.move_interval
    }

    /// Segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &SnakeSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn head(&self) -> &SnakeSegment {
        // construction guarantees at least one segment and nothing removes any
        &self.segments[0]
    }

    /// Advances the clock by `elapsed` seconds, moving the snake if a move
    /// is due. Returns whether the snake moved.
    ///
    /// Colors and sizes are refreshed on every call.
    pub fn update(&mut self, elapsed: f32) -> bool {
        self.elapsed_since_move += elapsed;

        let moved = self.elapsed_since_move >= self.move_interval;
        if moved {
            let head = self.position();
            if let Some(mut tail) = self.segments.pop_back() {
                tail.position = head + self.basis.forward;
                self.segments.push_front(tail);
            }
            self.elapsed_since_move = 0.0;
        }

        self.recolor();
        moved
    }

    /// Steers the snake: pitch by `rotation.x`, then yaw by `rotation.y`
    /// radians.
    pub fn rotate_heading(&mut self, rotation: &Vector3f) {
        self.basis.rotate(rotation);
    }

    /// Appends a batch of zero-sized segments at the tail. They unfold into
    /// the body as the snake moves.
    pub fn increase_length(&mut self) {
        let tail = *self.segments.back().unwrap_or(self.head());
        let grown = SnakeSegment::new(tail.position, 0.0, tail.color);
        self.segments.extend(std::iter::repeat(grown).take(GROWTH_SEGMENTS));
        log::debug!("snake grew to {} segments", self.segments.len());
    }

    /// True when the head touches any segment past its neck.
    pub fn is_self_colliding(&self) -> bool {
        let head = self.head();
        let colliding = self
            .segments
            .iter()
            .skip(NECK_SEGMENTS)
            .any(|segment| SnakeSegment::intersects(head, segment));

        if colliding {
            log::debug!("snake head collided with its body at {:?}", head.position.to_array());
        }
        colliding
    }

    /// True when the head touches `other`, treating the head as a sphere of
    /// the base segment size.
    pub fn touches(&self, other: &SnakeSegment) -> bool {
        (self.position() - other.position).magnitude_sqr() <= sqr(self.segment_size + other.size)
    }

    /// True when the head has left the sphere of `radius` around the origin.
    pub fn is_outside_sphere(&self, radius: f32) -> bool {
        self.position().magnitude_sqr() > sqr(radius)
    }

    fn recolor(&mut self) {
        let start_size = self.segment_size * 1.25;
        let middle_size = start_size * 2.0;

        for (i, segment) in self.segments.iter_mut().enumerate() {
            let x = band_coefficient(i);
            segment.color = cosine_interpolate(x, BAND_START_COLOR, BAND_MIDDLE_COLOR);
            segment.size = cosine_interpolate(x, start_size, middle_size);
        }
    }
}

/// Triangle wave over the segment index: 0 at the start of each band,
/// rising to 1 in its middle.
fn band_coefficient(index: usize) -> f32 {
    let x = frac(index as f32 / BAND_LENGTH as f32);
    let x = if x > 0.5 { 1.0 - x } else { x };
    x * 2.0
}
