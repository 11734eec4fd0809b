//! Bounded per-body trail history for rendering consumption.
//!
//! Each body owns one `TrailBuffer`: a most-recent-first ring of past
//! positions, capacity-bounded at `max_len` samples. Every push rebuilds the
//! full `{positions, colors, sizes}` arrays from scratch; the renderer gets
//! a color gradient fading from the body's base color toward white and point
//! sizes shrinking linearly to zero along the trail. Nothing here touches a
//! rendering API, the output is plain attribute arrays.

use crate::simulation::states::{ColorTag, NVec3};

/// Per-body trail state: flattened position scalars, newest first.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    positions: Vec<f64>, // x y z triples, most recent first
    max_len: usize, // capacity in samples
    base_color: [f64; 3],
    start_size: f64,
}

/// Render-facing attribute arrays, positional-parallel with the buffer.
#[derive(Debug, Clone)]
pub struct TrailGeometry {
    pub positions: Vec<f64>, // 3 scalars per retained sample
    pub colors: Vec<f64>, // 3 scalars per retained sample
    pub sizes: Vec<f64>, // 1 scalar per retained sample
}

impl TrailBuffer {
    pub fn new(max_len: usize, color: ColorTag, start_size: f64) -> Self {
        Self {
            positions: Vec::with_capacity(max_len * 3),
            max_len,
            base_color: color.base_rgb(),
            start_size,
        }
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of the sample at `index` (0 = most recent).
    pub fn sample(&self, index: usize) -> NVec3 {
        let i = index * 3;
        NVec3::new(self.positions[i], self.positions[i + 1], self.positions[i + 2])
    }

    /// Prepend the new position, truncate past capacity, and regenerate the
    /// full attribute arrays.
    pub fn push(&mut self, p: &NVec3) -> TrailGeometry {
        // Newest sample goes to the front
        self.positions.splice(0..0, [p.x, p.y, p.z]);

        // Trim trail to capacity
        if self.positions.len() > self.max_len * 3 {
            self.positions.truncate(self.max_len * 3);
        }

        // Color gradient and size falloff, one entry per retained sample
        let mut colors = Vec::with_capacity(self.positions.len());
        let mut sizes = Vec::with_capacity(self.positions.len() / 3);

        let mut j = 0;
        while j < self.max_len && j * 3 < self.positions.len() {
            let ratio = j as f64 / self.max_len as f64;

            // Interpolate each channel from the base color toward white
            for channel in self.base_color {
                colors.push(channel * (1.0 - ratio) + ratio);
            }

            // Point size shrinks linearly toward the tail
            sizes.push(self.start_size * (1.0 - ratio));

            j += 1;
        }

        TrailGeometry {
            positions: self.positions.clone(),
            colors,
            sizes,
        }
    }
}
