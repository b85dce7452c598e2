//! Default scene parameters shared by the island render engine.
//!
//! Every value here is the built-in fallback used when the scene
//! configuration asset is missing or fails validation.

/// Island dome geometry and the behaviour tuning of objects that land on it.
pub mod island;

/// Rigid body world and coconut body parameters.
pub mod physics;

/// Palm foliage layout and wind oscillation.
pub mod foliage;

/// Sun animation, sky and water model parameters.
pub mod lighting;

/// Camera, colours and mesh resolutions.
pub mod render_settings;
