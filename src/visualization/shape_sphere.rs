//! Shape-sphere projection of a three-body configuration.
//!
//! Reduces the instantaneous shape of the triangle formed by the three bodies
//! to a single point on the unit sphere: Jacobi coordinates separate the
//! relative motion from the center of mass, and the Hopf map collapses the
//! remaining pair of vectors to a sphere point. Plotting these points over a
//! full period gives a qualitative fingerprint of the orbit family.

use crate::simulation::states::NVec3;

/// Project three simultaneous body positions onto the shape sphere.
///
/// Jacobi coordinates:
///   z1 = (x3 - x2) / sqrt(2)
///   z2 = sqrt(2/3) (x1 - (x2 + x3) / 2)
/// Hopf map:
///   u1 = |z1|^2 - |z2|^2
///   u2 = 2 (z1 . z2)
///   u3 = 2 (z1.x z2.y - z1.y z2.x)
///
/// u3 uses only the planar component of the cross product; the catalog orbits
/// all live in the z = 0 plane and the projection is kept planar-only rather
/// than extended to genuinely 3D configurations.
///
/// Precondition: the configuration is non-degenerate. If the Jacobi vectors
/// make the Hopf image zero there is no meaningful shape point and the
/// normalization divides by zero; callers must not supply such input.
pub fn project(x1: &NVec3, x2: &NVec3, x3: &NVec3) -> NVec3 {
    // Jacobi coordinates
    let z1 = (x3 - x2) / 2.0_f64.sqrt();
    let z2 = (2.0_f64 / 3.0).sqrt() * (x1 - (x2 + x3) / 2.0);

    // Hopf map
    let u1 = z1.norm_squared() - z2.norm_squared();
    let u2 = 2.0 * z1.dot(&z2);
    let u3 = 2.0 * (z1.x * z2.y - z1.y * z2.x);

    let u = NVec3::new(u1, u2, u3);
    u / u.norm()
}
