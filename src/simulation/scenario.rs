//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - the selected integrator (fixed for the whole run)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, center-of-mass drift removed)
//! - one fresh trail buffer per body
//!
//! Switching orbit or integrator discards the old bundle entirely and builds
//! a new one; trail buffers and conservation baselines never carry over.

use crate::configuration::config::ScenarioConfig;
use crate::simulation::catalog::orbit_bodies;
use crate::simulation::integrator::Integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;
use crate::visualization::trail::TrailBuffer;

/// Fully-initialized runtime bundle for one simulation run.
pub struct Scenario {
    pub integrator: Integrator,
    pub parameters: Parameters,
    pub system: System,
    pub trails: Vec<TrailBuffer>,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Self {
        // Integrator and orbit resolve leniently: unknown names get defaults
        let integrator = Integrator::from_name(&cfg.selection.integrator);
        let bodies = orbit_bodies(&cfg.selection.orbit);

        // Initial system state: bodies at t = 0
        let mut system = System { bodies, t: 0.0 };

        // The catalog velocities already sum to zero momentum, but decoded or
        // hand-edited configurations may not; remove any residual drift
        system.remove_com_drift();

        let parameters = Parameters {
            dt: cfg.parameters.dt,
            steps: cfg.parameters.steps,
            trail_length: cfg.parameters.trail_length,
            log_every: cfg.parameters.log_every,
        };

        // One trail buffer per body, index-parallel with the system
        let trails = system
            .bodies
            .iter()
            .map(|b| TrailBuffer::new(parameters.trail_length, b.color, b.size))
            .collect();

        Self {
            integrator,
            parameters,
            system,
            trails,
        }
    }
}
