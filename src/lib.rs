pub mod configuration;
pub mod playback;
pub mod simulation;
pub mod visualization;

pub use simulation::catalog::{orbit_bodies, orbit_names, DEFAULT_ORBIT};
pub use simulation::conservation::{ConservationDelta, ConservationSample};
pub use simulation::forces::{accumulate_forces, G};
pub use simulation::integrator::Integrator;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::states::{Body, ColorTag, NVec3, System};

pub use configuration::config::{ParametersConfig, ScenarioConfig, SelectionConfig};

pub use playback::trajectory::{decode, decode_file, TrajectoryError, TrajectoryFrame};

pub use visualization::shape_sphere::project;
pub use visualization::trail::{TrailBuffer, TrailGeometry};
