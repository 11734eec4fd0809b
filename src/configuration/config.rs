//! Configuration types for loading a simulation scenario from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation run. A scenario consists of:
//!
//! - [`SelectionConfig`]  – which orbit family and which integrator to use
//! - [`ParametersConfig`] – step size, step count and trail/logging settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a run from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! selection:
//!   orbit: "Figure of 8"      # catalog key; unknown names fall back to this
//!   integrator: "Neri (4th)"  # or "Ruth (3rd)", "Verlet (2nd)", "Euler (1st)"
//!
//! parameters:
//!   dt: 0.01                  # fixed step size
//!   steps: 10000              # how many steps to run
//!   trail_length: 1200        # per-body trail capacity in samples
//!   log_every: 100            # log conservation drift every N steps
//! ```
//!
//! Both selection strings are resolved leniently at build time: unknown
//! orbit or integrator names substitute the documented defaults instead of
//! failing the load.

use serde::Deserialize;

/// Orbit family and integrator chosen for this run.
#[derive(Deserialize, Debug, Clone)]
pub struct SelectionConfig {
    pub orbit: String, // catalog key, e.g. "Figure of 8"
    pub integrator: String, // e.g. "Neri (4th)" or "euler"
}

/// Numerical parameters for a run.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // fixed step size
    pub steps: u64, // number of steps to run
    #[serde(default = "default_trail_length")]
    pub trail_length: usize, // per-body trail capacity in samples
    #[serde(default = "default_log_every")]
    pub log_every: u64, // drift logging cadence
}

fn default_trail_length() -> usize {
    1200
}

fn default_log_every() -> u64 {
    100
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub selection: SelectionConfig,
    pub parameters: ParametersConfig,
}
