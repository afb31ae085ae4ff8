pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, CentralGravity};
pub use simulation::integrator::verlet_step;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, BodyColor, ScenarioConfig};
pub use configuration::profiles::{builtin_scenario, Profile};

pub use visualization::viewer::{run_viewer, to_screen, apply_zoom};
