use crate::Input;
use crate::config::Config;
use crate::map::GridMap;
use crate::player::Player;
use crate::rayfan::RayFan;

/// Everything that lives across frames: the level, the player and the ray
/// fan buffer the renderer reads.
#[derive(Debug, Clone)]
pub struct GameState {
    pub world: GridMap,
    pub player: Player,
    pub rays: RayFan,
}

impl GameState {
    pub fn new(world: GridMap, config: &Config) -> Self {
        let (x, y) = Self::spawn_point(&world, config);
        let player = Player::new(x, y).with_speeds(config.move_speed, config.rotation_speed());
        let mut rays = RayFan::new(config.num_rays(), config.fov());
        rays.cast_all(&player, &world);

        tracing::debug!(x, y, rays = rays.len(), "game state ready");
        GameState {
            world,
            player,
            rays,
        }
    }

    /// Centre of the window if that lands on open floor, else the centre of
    /// the map, else the first open cell.
    pub fn spawn_point(world: &GridMap, config: &Config) -> (f32, f32) {
        let inside_and_open = |(x, y): (f32, f32)| {
            x < world.world_width() && y < world.world_height() && !world.is_wall(x, y)
        };

        let window_centre = (config.width as f32 / 2.0, config.height as f32 / 2.0);
        let map_centre = (world.world_width() / 2.0, world.world_height() / 2.0);

        if inside_and_open(window_centre) {
            window_centre
        } else if inside_and_open(map_centre) {
            map_centre
        } else {
            world.first_open_cell_center().unwrap_or(map_centre)
        }
    }

    /// One simulation tick: apply input, move, recast.
    pub fn update(&mut self, input: &Input, dt: f32) {
        self.player.take_input(input);
        self.player.update(dt, &self.world);
        self.rays.cast_all(&self.player, &self.world);
    }
}
