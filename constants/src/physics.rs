pub const GRAVITY: f32 = -9.82;

/// Fixed solver sub-step (seconds).
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Upper bound on solver sub-steps taken in one frame.
pub const MAX_SUBSTEPS: u32 = 3;

pub const GROUND_HEIGHT: f32 = -2.0;

pub const CONTACT_FRICTION: f32 = 0.4;
pub const CONTACT_RESTITUTION: f32 = 0.6;

pub const COCONUT_RADIUS: f32 = 1.5;
pub const COCONUT_MASS: f32 = 1.0;
pub const COCONUT_LINEAR_DAMPING: f32 = 0.1;
pub const COCONUT_ANGULAR_DAMPING: f32 = 0.1;
pub const COCONUT_INITIAL_HEIGHT: f32 = 22.0;

/// Horizontal offset of each coconut from the trunk.
pub const COCONUT_OFFSET_X: f32 = 5.0;

/// Seconds after start before the sliding coconut joins the simulation.
pub const SLIDING_COCONUT_SPAWN_DELAY: f64 = 5.0;

/// Seconds after start before the resting coconut joins the simulation.
pub const RESTING_COCONUT_SPAWN_DELAY: f64 = 15.0;
