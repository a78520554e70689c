pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Particle, Swarm, NVec3};
pub use simulation::forces::{Acceleration, AccelSet, PlanetStarGravity};
pub use simulation::integrator::{verlet_integrator, leapfrog_integrator};
pub use simulation::scenario::Scenario;
pub use simulation::driver::{run, step, StopReason};

pub use configuration::config::{
    ConfigError, EngineConfig, IntegratorConfig, ParametersConfig, ParticleConfig,
    PlanetForceConfig, ScenarioConfig,
};

pub use benchmark::benchmark::{bench_force, bench_verlet};
