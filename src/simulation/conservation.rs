//! Conserved-quantity snapshots for drift diagnostics.
//!
//! In the continuous system the total momentum and total energy are exact
//! constants; any change between steps is numerical error introduced by the
//! integrator. The tracker computes pure snapshots only, the caller keeps the
//! previous sample and threads it through the step loop to obtain deltas.
//! Deltas are diagnostic output, they never feed back into the integration.

use super::forces::G;
use super::states::{Body, NVec3};

/// Total momentum and total energy of a system at one instant.
#[derive(Debug, Clone, Copy)]
pub struct ConservationSample {
    pub momentum: NVec3,
    pub energy: f64,
}

/// Elementwise difference between two samples.
#[derive(Debug, Clone, Copy)]
pub struct ConservationDelta {
    pub momentum: NVec3,
    pub energy: f64,
}

impl ConservationSample {
    /// Snapshot the current totals.
    ///
    /// momentum = sum m v
    /// energy   = sum 1/2 m |v|^2  -  sum over pairs m_i m_j / r_ij
    pub fn capture(bodies: &[Body]) -> Self {
        let mut momentum = NVec3::zeros();
        let mut kinetic = 0.0;

        for b in bodies {
            momentum += b.m * b.v;
            kinetic += 0.5 * b.m * b.v.norm_squared();
        }

        let mut potential = 0.0;
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let r = (bodies[j].x - bodies[i].x).norm();
                potential -= G * bodies[i].m * bodies[j].m / r;
            }
        }

        Self {
            momentum,
            energy: kinetic + potential,
        }
    }

    /// Delta of `self` against a caller-supplied previous sample.
    pub fn delta(&self, previous: &ConservationSample) -> ConservationDelta {
        ConservationDelta {
            momentum: self.momentum - previous.momentum,
            energy: self.energy - previous.energy,
        }
    }
}
