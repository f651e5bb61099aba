pub const MOVE_SPEED: f32 = 5.0;
pub const HEAD_TURN_RATE: f32 = 10.0;
pub const BODY_SPACING: f32 = 0.5;
pub const SAMPLE_INTERVAL: f32 = BODY_SPACING / 2.0;
pub const MIN_SAMPLE_INTERVAL: f32 = 0.01;
pub const SEGMENT_LERP_MULT: f32 = 1.5;
pub const STARTING_SEGMENTS: usize = 3;

pub const COLLISION_FACTOR: f32 = 0.8;
pub const SELF_COLLISION_SKIP: usize = 2;
pub const GROUND_PROBE_DISTANCE: f32 = 1.5;
pub const SETTLE_PROBE_DISTANCE: f32 = 100.0;
pub const HEAD_HALF_HEIGHT: f32 = 0.1;

pub const HISTORY_MARGIN: usize = 5;
pub const HISTORY_MIN_CAPACITY: usize = 50;

pub const GRID_CELLS_X: i32 = 20;
pub const GRID_CELLS_Z: i32 = 20;
pub const CELL_SIZE: f32 = 1.0;
pub const FOOD_PROBE_HEIGHT: f32 = 10.0;
pub const FOOD_PROBE_DISTANCE: f32 = 20.0;
pub const FOOD_Y_OFFSET: f32 = 0.25;
pub const FOOD_TRIGGER_RADIUS: f32 = 0.5;
pub const MAX_SPAWN_ATTEMPTS: usize = 50;

pub const CAMERA_HEIGHT: f32 = 5.0;
pub const FIRST_PERSON_THRESHOLD: f32 = 0.5;
pub const FIRST_PERSON_OFFSET: [f32; 3] = [0.0, 0.2, 0.3];
pub const POSITION_SMOOTH_SPEED: f32 = 8.0;
pub const ROTATION_SMOOTH_SPEED: f32 = 8.0;

pub const MIN_LOOK_DISTANCE: f32 = 0.01;
