//! Pairwise gravitational force accumulation.
//!
//! Direct O(n^2) summation over all unordered body pairs with the
//! gravitational constant fixed at 1 (dimensionless units). Newton's third
//! law is enforced structurally: each pair contributes equal and opposite
//! terms, so the net force over all bodies sums to exactly zero.

use super::states::{Body, NVec3};

/// Gravitational constant in simulation units.
pub const G: f64 = 1.0;

/// Accumulate net gravitational forces on every body into `out`.
///
/// `out` is index-parallel with `bodies` and is zeroed before accumulation.
///
/// Precondition: no two bodies occupy the same position. A zero separation is
/// a genuine numerical singularity of the problem; no softening or clamping
/// is applied here, the caller must never supply coincident positions.
pub fn accumulate_forces(bodies: &[Body], out: &mut [NVec3]) {
    // Zero buffer
    for f in out.iter_mut() {
        *f = NVec3::zeros();
    }

    let n = bodies.len();

    // Loop over each unordered pair (i, j) with i < j
    for i in 0..n {
        let bi = &bodies[i];

        for j in (i + 1)..n {
            let bj = &bodies[j];

            // Separation vector from i to j: i is pulled along +d, j along -d
            let d = bj.x - bi.x;
            let r = d.norm();

            // F = G m_i m_j / r^2, applied along the unit separation d / r
            let magnitude = G * bi.m * bj.m / (r * r);
            let force = (magnitude / r) * d;

            out[i] += force;
            out[j] -= force;
        }
    }
}
