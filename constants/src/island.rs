/// Surface elevation at the dome's rim and everywhere outside it.
pub const ISLAND_CENTRE_HEIGHT: f32 = -2.0;

/// Dome radius before the vertical squash is applied.
pub const ISLAND_RADIUS: f32 = 30.0;

/// Vertical squash applied to the hemisphere.
pub const ISLAND_VERTICAL_SCALE: f32 = 0.3;

/// Island spin about the vertical axis (radians per second).
pub const ISLAND_SPIN_RATE: f32 = 0.5;

/// Height below which a sliding coconut starts following the surface.
pub const SLIDE_TRIGGER_HEIGHT: f32 = 8.0;

/// Horizontal speed of a sliding coconut.
pub const SLIDE_SPEED: f32 = 5.0;

/// Clearance above the surface at which a resting coconut is frozen.
pub const REST_MARGIN: f32 = 1.1;
