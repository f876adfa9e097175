// Shared tuning constants used by both the core logic and the web frontend.

// Scroll tracking
pub const SCROLL_THRESHOLD_PX: f64 = 50.0; // navbar switches to its "scrolled" treatment past this
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0; // compensates the fixed navbar when resolving sections

// Particle field
pub const PARTICLE_COUNT: usize = 500;
pub const PARTICLE_HALF_SPAN: f32 = 5.0; // coordinates drawn uniformly from [-5, 5] per axis
pub const PARTICLE_SIZE: f32 = 0.03; // world-space sprite size
pub const PARTICLE_COLOR: [f32; 3] = [0.298, 0.788, 0.941]; // #4cc9f0

// Whole-field rotation, radians per elapsed second
pub const ROTATION_RATE_X: f64 = 0.005;
pub const ROTATION_RATE_Y: f64 = 0.002;

// Background camera
pub const CAMERA_EYE_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Hero role rotation
pub const HERO_ROLE_INTERVAL_SEC: f64 = 3.0;

// Reveal animation
pub const REVEAL_DURATION_SEC: f32 = 0.5;
pub const REVEAL_THRESHOLD_SECTION: f32 = 0.1; // whole-section fades
pub const REVEAL_THRESHOLD_BLOCK: f32 = 0.2; // large grids
pub const REVEAL_THRESHOLD_CARD: f32 = 0.3; // individual cards
pub const REVEAL_THRESHOLD_ROW: f32 = 0.5; // timeline rows

// Notifications
pub const TOAST_DISMISS_MS: i32 = 4000;
