use std::f32::consts::PI;

pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 600;
pub const FPS: u32 = 30;
pub const CONFIG_PATH: &str = "raycaster.toml";

pub const TILE_SIZE: f32 = 32.0;
pub const FOV_DEGREES: f32 = 60.0;
pub const MINIMAP_SCALE_FACTOR: f32 = 0.6;

pub const PLAYER_START_ANGLE: f32 = PI / 2.0;
pub const PLAYER_MOVE_SPEED: f32 = 10.0;
pub const PLAYER_ROT_SPEED_DEGREES: f32 = 60.0;
pub const PLAYER_WIDTH: f32 = 10.0;
pub const PLAYER_HEIGHT: f32 = 10.0;

// Distance reported by a scan that left the world without touching a wall
pub const NO_HIT_DISTANCE: f32 = f32::MAX;

// Packed 0xAARRGGBB
pub const BACKGROUND_COLOR: u32 = 0xFF00_0000;
pub const FLOOR_COLOR: u32 = 0xFFFF_0000;
pub const WALL_COLOR_VERTICAL: u32 = 0xFFFF_FFFF;
pub const WALL_COLOR_HORIZONTAL: u32 = 0xFFCC_CCCC;
pub const MINIMAP_WALL_COLOR: u32 = 0xFFFF_4598;
pub const MINIMAP_OPEN_SPACE_COLOR: u32 = 0xFFFF_FFFF;
pub const MINIMAP_PLAYER_COLOR: u32 = 0xFF00_00FF;

pub const RANDOM_MAP_DEFAULT_SIDE: usize = 15;
pub const RANDOM_MAP_MIN_SIDE: usize = 4;
pub const RANDOM_MAP_MAX_SIDE: usize = 35;
pub const RANDOM_MAP_PATH_DEVIATION_CHANCE: u32 = 30;
pub const RANDOM_MAP_HOLE_CHANCE: u32 = 10;
