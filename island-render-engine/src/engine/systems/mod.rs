//! Runtime systems bridging the simulation into the ECS.
//!
//! The frame driver steps the simulation each frame and writes its output to
//! scene entities; the environment system turns the regenerated lighting into
//! clear colour, ambient and sun updates.

/// Applies the regenerated environment map to lights and clear colour.
pub mod environment;

/// `SceneHost` implementation over ECS queries and the per-frame driver system.
pub mod frame_driver;

/// Plugin wiring the simulation systems into `Update` and `Last`.
pub mod simulation_plugin;

/// Simulation shutdown on application exit.
pub mod teardown;

pub use simulation_plugin::IslandSimulationPlugin;
