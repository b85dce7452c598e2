//! Per-frame animation logic. Nothing here touches the ECS directly; the
//! renderer side is reached through [`host::SceneHost`].

pub mod context;
pub mod frame;
pub mod host;
pub mod oscillator;
pub mod rest;
pub mod slide;
pub mod spawner;
pub mod sun;
pub mod timer;

pub use frame::{FrameClock, FrameReport, IslandSimulation};
pub use host::SceneHost;
pub use spawner::ObjectId;
