//! Simulation constants and tuning parameters.
//!
//! Distances are screen pixels, speeds are pixels per simulation tick.

/// Length of one fixed simulation step in milliseconds (~60 Hz).
pub const TICK_MS: u64 = 16;

/// Duration of the headless smoke test in milliseconds of simulated time.
pub const SMOKE_TEST_DURATION_MS: u64 = 1000;

// --- Play field ---

/// Default logical screen size.
pub const SCREEN_WIDTH: i32 = 1366;
pub const SCREEN_HEIGHT: i32 = 768;

// --- Collision ---

/// Whether two rectangles that only share an edge count as colliding.
/// Touching is not overlapping: `{0,0,10,10}` and `{10,0,10,10}` miss.
pub const TOUCHING_EDGES_OVERLAP: bool = false;

// --- Tank ---

/// Tank collider size (w, h).
pub const TANK_SIZE: (i32, i32) = (40, 24);

/// Horizontal tank speed while a direction key is held.
pub const TANK_SPEED: f32 = 5.0;

/// Distance from the bottom of the screen to the tank's center.
pub const TANK_BOTTOM_OFFSET: f32 = 48.0;

// --- Bullets ---

/// Bullet collider size (w, h).
pub const BULLET_SIZE: (i32, i32) = (4, 10);

/// Upward bullet speed. Bullets travel toward y = 0.
pub const BULLET_SPEED: f32 = 10.0;

/// Number of pre-allocated bullet slots.
pub const BULLET_CAPACITY: usize = 8;

/// Minimum ticks between two shots.
pub const BULLET_COOLDOWN_TICKS: u32 = 12;

// --- Alien swarm ---

/// Alien collider size (w, h).
pub const ALIEN_SIZE: (i32, i32) = (24, 16);

/// Default grid dimensions.
pub const ALIEN_ROWS: usize = 5;
pub const ALIEN_COLUMNS: usize = 11;

/// Center of the top-left alien and the spacing between alien centers.
pub const ALIEN_GRID_ORIGIN: (f32, f32) = (120.0, 96.0);
pub const ALIEN_GRID_SPACING: (f32, f32) = (48.0, 40.0);

/// Horizontal swarm speed before any kill.
pub const ALIEN_BASE_SPEED: f32 = 2.0;

/// Vertical step taken by the whole swarm after an edge reversal.
pub const ALIEN_DROP_STEP: f32 = 16.0;

/// Delta-velocity added to every surviving alien on each kill.
pub const ALIEN_SPEED_UP: f32 = 0.5;
