// Propagation tuning constants shared by the core and the native host.

// Pool
pub const MAX_PROPAGATION_POINTS: usize = 10; // texture width, one column per slot

// Propagation defaults
pub const DEFAULT_PROPAGATION_DISTANCE: f32 = 600.0; // world units
pub const DEFAULT_PROPAGATION_SPEED: f32 = 150.0; // world units per second
pub const DEFAULT_INTENSITY_RATIO: f32 = 1.0;
pub const DEFAULT_EASE_EXPONENT: f32 = 3.0; // cubic ease-out

// Fade out defaults (seconds)
pub const DEFAULT_FADE_OUT_DELAY_SEC: f32 = 0.0;
pub const DEFAULT_FADE_OUT_DURATION_SEC: f32 = 1.0;

// Ignore further collisions for this long after one happened (seconds)
pub const DEFAULT_COLLISION_COOLDOWN_SEC: f32 = 0.1;

// Fraction of the total propagation time at which the ease-out tail is cut
pub const PROPAGATION_COMPLETION_RATIO: f32 = 0.99;

// Movement auto-trigger
pub const MOVEMENT_TRIGGER_INTERVAL_SEC: f32 = 0.5; // sustained movement needed per trigger
pub const MOVEMENT_TRIGGER_RANGE: f32 = 5000.0;
pub const MOVEMENT_MIN_ACCELERATION_SQ: f32 = 1.0;

// Texture encoding
pub const SENTINEL_PIXEL: [f32; 4] = [-1.0, -1.0, -1.0, -1.0];
pub const POINT_VALID_W: f32 = 1.0;
pub const TIME_UNUSED_W: f32 = 0.0;

// Scalar material parameter set once per registered material
pub const PROPAGATION_SPEED_PARAM: &str = "PropagationSpeed";
