//! Numerical parameters for a simulation run.
//!
//! `Parameters` holds the runtime settings:
//! - fixed integration step size `dt` and step count,
//! - trail history capacity,
//! - diagnostic logging cadence for the headless driver.
//!
//! The symplectic schemes' bounded-energy guarantee is stated for a fixed
//! `dt`, so the step size never varies within a run.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed step size
    pub steps: u64, // number of steps to run
    pub trail_length: usize, // per-body trail capacity in samples
    pub log_every: u64, // driver logs conservation drift every this many steps
}
