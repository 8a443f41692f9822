pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Universe, Sun, Planet, System, BodyId, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, CentralGravity};
pub use simulation::integrator::euler_symplectic;
pub use simulation::params::Parameters;
pub use simulation::engine::Simulation;
pub use simulation::scenario::build_simulation;

pub use configuration::config::{UniverseConfig, SunConfig, PlanetConfig, ParametersConfig, ScenarioConfig};

pub use error::{ConfigError, SimError};

pub use visualization::orbsim_replay2d::run_replay;

pub use benchmark::benchmark::{bench_gravity, bench_run};
