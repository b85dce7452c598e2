pub mod assets;
pub mod core;
pub mod loading;
pub mod physics;
pub mod scene;
pub mod simulation;
pub mod systems;
