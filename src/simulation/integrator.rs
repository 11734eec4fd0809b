//! Fixed-step time integrators for the three-body system.
//!
//! Four interchangeable schemes of increasing order share one step contract:
//! - `Euler`       explicit first order, unbounded secular energy drift
//! - `SecondOrder` one-shot second-order position update (velocity untouched)
//! - `Ruth`        3-stage third-order symplectic kick-drift composition
//! - `Neri`        4-stage fourth-order symplectic kick-drift composition
//!
//! The symplectic schemes keep the energy error bounded over arbitrarily long
//! runs at fixed `dt`, instead of letting it grow without bound as Euler does.
//! Offering all four side by side exposes the accuracy/cost tradeoff directly.

use super::forces::accumulate_forces;
use super::states::{NVec3, System};

/// Ruth third-order kick (velocity) weights.
const RUTH_C: [f64; 3] = [7.0 / 24.0, 3.0 / 4.0, -1.0 / 24.0];
/// Ruth third-order drift (position) weights.
const RUTH_D: [f64; 3] = [2.0 / 3.0, -2.0 / 3.0, 1.0];

/// Neri/Yoshida fourth-order stage coefficients.
///
/// c = [a, b, b, a], d = [2a, 1 - 4a, 2a, 0] with a = 1 / (2 (2 - 2^(1/3)))
/// and b = (1 - 2^(1/3)) a. Computed at runtime since `cbrt` is not const.
fn neri_coefficients() -> ([f64; 4], [f64; 4]) {
    let cbrt2 = 2.0_f64.cbrt();
    let a = 1.0 / (2.0 * (2.0 - cbrt2));
    let b = (1.0 - cbrt2) * a;
    let c = [a, b, b, a];
    let d = [2.0 * a, 1.0 - 4.0 * a, 2.0 * a, 0.0];
    (c, d)
}

/// Stepping scheme, fixed once at configuration time.
///
/// Selection happens when a scenario is built, never per tick; `step` is the
/// single capability every variant exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integrator {
    Euler,
    SecondOrder,
    Ruth,
    Neri,
}

impl Integrator {
    /// Resolve a configuration name to an integrator.
    ///
    /// Lenient on purpose: an unrecognized name falls back to the
    /// fourth-order default rather than erroring.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "euler" | "euler (1st)" => Integrator::Euler,
            "verlet" | "verlet (2nd)" | "second" => Integrator::SecondOrder,
            "ruth" | "ruth (3rd)" => Integrator::Ruth,
            "neri" | "neri (4th)" => Integrator::Neri,
            _ => {
                log::warn!("unknown integrator {name:?}, defaulting to Neri (4th)");
                Integrator::Neri
            }
        }
    }

    /// Advance `sys` by one fixed step `dt`, in place.
    ///
    /// Deterministic given the state and `dt`; no state outside `sys` is read
    /// or written. Exactly one caller may hold the system during a step.
    pub fn step(self, sys: &mut System, dt: f64) {
        match self {
            Integrator::Euler => euler_step(sys, dt),
            Integrator::SecondOrder => second_order_step(sys, dt),
            Integrator::Ruth => {
                symplectic_step(sys, dt, &RUTH_C, &RUTH_D);
            }
            Integrator::Neri => {
                let (c, d) = neri_coefficients();
                symplectic_step(sys, dt, &c, &d);
            }
        }
        sys.t += dt;
    }
}

/// Explicit Euler: one force evaluation per step.
///
/// Positions move along the *current* velocities before any velocity change,
/// then velocities pick up the forces computed from the *old* positions.
fn euler_step(sys: &mut System, dt: f64) {
    let n = sys.bodies.len();

    // Forces from x_n, before anything moves
    let mut forces = vec![NVec3::zeros(); n];
    accumulate_forces(&sys.bodies, &mut forces);

    // x_n+1 = x_n + dt v_n
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // v_n+1 = v_n + dt F(x_n) / m
    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        b.v += dt * *f / b.m;
    }
}

/// Second-order Taylor position update: one force evaluation per step.
///
/// x_n+1 = x_n + dt v_n + dt^2 F(x_n) / (2 m). The velocity is deliberately
/// left unchanged; this scheme advances positions only.
fn second_order_step(sys: &mut System, dt: f64) {
    let n = sys.bodies.len();

    let mut forces = vec![NVec3::zeros(); n];
    accumulate_forces(&sys.bodies, &mut forces);

    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        b.x += dt * b.v + dt * dt * *f / (2.0 * b.m);
    }
}

/// Shared kick-drift composition for the Ruth and Neri schemes.
///
/// For each stage k: recompute forces from the current positions (they moved
/// in the previous stage), kick every velocity by `c[k] dt F / m`, then drift
/// every position by `d[k] dt v` using the just-kicked velocity.
fn symplectic_step(sys: &mut System, dt: f64, c: &[f64], d: &[f64]) {
    let n = sys.bodies.len();
    let mut forces = vec![NVec3::zeros(); n];

    for (ck, dk) in c.iter().zip(d.iter()) {
        // Forces at the positions produced by the previous stage
        accumulate_forces(&sys.bodies, &mut forces);

        // Kick: v += c_k dt F / m
        for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
            b.v += ck * dt * *f / b.m;
        }

        // Drift: x += d_k dt v
        for b in sys.bodies.iter_mut() {
            b.x += dk * dt * b.v;
        }
    }
}
