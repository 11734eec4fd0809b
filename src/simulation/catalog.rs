//! Catalog of named periodic three-body initial conditions.
//!
//! Each entry is a pre-validated periodic solution of the equal-mass,
//! zero-total-momentum three-body problem: bodies 0 and 1 start at (-1, 0, 0)
//! and (1, 0, 0) with the same velocity (vx, vy, 0), body 2 starts at the
//! origin with (-2 vx, -2 vy, 0) so the total momentum vanishes exactly.
//! The catalog is data only; the simulation consumes it at (re)initialization.

use super::states::{Body, ColorTag, NVec3};

/// Default orbit substituted for unrecognized catalog keys.
pub const DEFAULT_ORBIT: &str = "Figure of 8";

/// Named keys and the (vx, vy) velocity seed of each periodic family.
const ENTRIES: [(&str, f64, f64); 5] = [
    ("Figure of 8", 0.3393928985595663, 0.536191205596924),
    ("Butterfly I", 0.306892758965492, 0.587188195800781),
    ("Butterfly II", 0.392955223941802, 0.0975792352080344),
    ("Bumblebee", 0.184278506469727, 0.125506782829762),
    ("Dragonfly", 0.080584285736084, 0.588836087036132),
];

/// Names of every catalog entry, in catalog order.
pub fn orbit_names() -> Vec<&'static str> {
    ENTRIES.iter().map(|(name, _, _)| *name).collect()
}

/// Initial bodies for the named orbit.
///
/// Lenient on unknown keys: falls back to the figure-of-eight family rather
/// than erroring, matching the integrator-name fallback.
pub fn orbit_bodies(name: &str) -> Vec<Body> {
    let (_, vx, vy) = ENTRIES
        .iter()
        .find(|(key, _, _)| *key == name)
        .copied()
        .unwrap_or_else(|| {
            if name != DEFAULT_ORBIT {
                log::warn!("unknown orbit {name:?}, defaulting to {DEFAULT_ORBIT:?}");
            }
            ENTRIES[0]
        });

    make_family(vx, vy)
}

/// Build the three equal-mass bodies of one symmetric periodic family.
fn make_family(vx: f64, vy: f64) -> Vec<Body> {
    let colors = [ColorTag::Red, ColorTag::Green, ColorTag::Blue];
    let positions = [
        NVec3::new(-1.0, 0.0, 0.0),
        NVec3::new(1.0, 0.0, 0.0),
        NVec3::zeros(),
    ];
    let velocities = [
        NVec3::new(vx, vy, 0.0),
        NVec3::new(vx, vy, 0.0),
        NVec3::new(-2.0 * vx, -2.0 * vy, 0.0),
    ];

    (0..3)
        .map(|i| Body {
            id: i as u32,
            x: positions[i],
            v: velocities[i],
            m: 1.0,
            color: colors[i],
            size: 0.1,
        })
        .collect()
}
