//! Island scene geometry and the entities that make up the visual scene.
//!
//! Provides the analytic island height field used by the simulation and the
//! startup systems that build the island, palm, coconuts, water and sky.

/// Analytic island surface: elevation and gradient queries.
pub mod height_field;

/// Scene graph tags and sky/water model state written by the frame driver.
pub mod nodes;

/// Island, palm, coconut, water, camera and sun entity construction.
pub mod spawn;
