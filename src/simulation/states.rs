//! Core state types for the three-body simulation.
//!
//! Defines the runtime body/system structs:
//! - `Body` using `NVec3` positions and velocities
//! - `System` holding the ordered body list and the current simulation time `t`
//!
//! Body order in a `System` matters only because trail buffers and renderers
//! are index-parallel with it; the physics does not depend on it.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Render color tag carried by each body.
///
/// The catalog assigns red/green/blue to bodies 0/1/2; trajectory files use
/// their own id convention (see the decoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Red,
    Green,
    Blue,
}

impl ColorTag {
    /// RGB triple in [0, 1] used as the trail gradient's ratio-zero endpoint.
    pub fn base_rgb(self) -> [f64; 3] {
        match self {
            ColorTag::Red => [1.0, 0.0, 0.0],
            ColorTag::Green => [0.0, 1.0, 0.0],
            ColorTag::Blue => [0.0, 0.0, 1.0],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: u32, // stable label
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass, must be > 0
    pub color: ColorTag, // render color tag
    pub size: f64, // render size, also trail start size
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub t: f64, // time
}

impl System {
    /// Mass-weighted mean velocity of the whole system.
    ///
    /// Subtracted from every body at initialization so a periodic orbit does
    /// not drift out of frame over long runs.
    pub fn com_velocity(&self) -> NVec3 {
        let mut momentum = NVec3::zeros();
        let mut total_mass = 0.0;
        for b in &self.bodies {
            momentum += b.m * b.v;
            total_mass += b.m;
        }
        momentum / total_mass
    }

    /// Remove the center-of-mass velocity from every body in place.
    pub fn remove_com_drift(&mut self) {
        let com_v = self.com_velocity();
        for b in self.bodies.iter_mut() {
            b.v -= com_v;
        }
    }
}
