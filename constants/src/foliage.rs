/// Leaf sway amplitude.
pub const WIND_INTENSITY: f32 = 0.2;

/// Oscillator phase gained per second of frame time.
pub const WIND_SPEED: f32 = 2.5;

pub const TRUNK_POSITION: [f32; 3] = [0.0, 15.0, 0.0];
pub const TRUNK_RADIUS: f32 = 1.0;
pub const TRUNK_HEIGHT: f32 = 20.0;

/// Rest rotation of the trunk about X (radians). Tips the crown downwards so
/// the leaves hang from what reads as the top of the palm.
pub const TRUNK_BASE_ANGLE: f32 = 3.3;

/// Peak trunk bend (radians).
pub const TRUNK_BEND_AMOUNT: f32 = 0.05;

pub const LEAF_WIDTH: f32 = 5.0;
pub const LEAF_LENGTH: f32 = 15.0;

/// Leaf anchor offsets relative to the trunk.
pub const LEAF_BASE_OFFSETS: [[f32; 3]; 4] = [
    [-5.0, -8.0, 0.0],
    [5.0, -8.0, 0.0],
    [0.0, -10.0, 5.0],
    [0.0, -10.0, -5.0],
];

/// Per-leaf oscillator phase offsets (radians).
pub const LEAF_PHASE_OFFSETS: [f32; 4] = [0.0, 1.0, 2.0, 3.0];

/// Authored leaf rotations as XYZ euler angles in degrees.
pub const LEAF_ROTATIONS_DEGREES: [[f32; 3]; 4] = [
    [20.0, -4.0, 30.0],
    [-20.0, -4.0, -40.0],
    [20.0, 0.0, 0.0],
    [-20.0, 0.0, 0.0],
];
