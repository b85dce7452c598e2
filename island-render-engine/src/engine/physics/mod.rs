//! Rigid body world built on rapier.
//!
//! Exposes only what the simulation orchestration needs: body construction,
//! fixed sub-step stepping, and per-body pose and velocity access.

/// Body construction parameters and pose snapshots.
pub mod body;

/// Rapier pipeline wrapper with a fixed sub-step accumulator.
pub mod world;

pub use body::{BodyPose, BodyShape, BodySpec, SurfaceMaterial};
pub use world::{BodyHandle, PhysicsSettings, PhysicsWorld};
