//! Scene configuration asset.
//!
//! Deserialised from `island.scene.json`; every field falls back to the
//! defaults in the `constants` crate when omitted.

/// Island, physics, coconut, foliage and lighting parameters with validation.
pub mod scene_config;
