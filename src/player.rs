use crate::Input;
use crate::consts::{
    PLAYER_HEIGHT, PLAYER_MOVE_SPEED, PLAYER_ROT_SPEED_DEGREES, PLAYER_START_ANGLE, PLAYER_WIDTH,
};
use crate::map::GridMap;
use crate::utils::normalize_angle;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Footprint, only used to size the minimap marker
    pub width: f32,
    pub height: f32,
    pub angle: f32,
    /// -1 backwards, 0 still, 1 forwards
    pub walk_direction: i8,
    /// -1 left, 0 none, 1 right
    pub turn_direction: i8,
    /// World units per second
    pub move_speed: f32,
    /// Radians per second
    pub rot_speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            x,
            y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            angle: PLAYER_START_ANGLE,
            walk_direction: 0,
            turn_direction: 0,
            move_speed: PLAYER_MOVE_SPEED,
            rot_speed: PLAYER_ROT_SPEED_DEGREES.to_radians(),
        }
    }

    pub fn with_speeds(mut self, move_speed: f32, rot_speed: f32) -> Self {
        self.move_speed = move_speed;
        self.rot_speed = rot_speed;
        self
    }

    pub fn take_input(&mut self, input: &Input) {
        self.walk_direction = input.walk.signum();
        self.turn_direction = input.turn.signum();
    }

    /// Rotates unconditionally, then tries to walk along the new heading.
    pub fn update(&mut self, dt: f32, world: &GridMap) {
        if self.turn_direction != 0 {
            self.angle =
                normalize_angle(self.angle + self.turn_direction as f32 * self.rot_speed * dt);
        }

        if self.walk_direction == 0 {
            return;
        }

        let move_step = self.walk_direction as f32 * self.move_speed * dt;
        let new_x = self.x + self.angle.cos() * move_step;
        let new_y = self.y + self.angle.sin() * move_step;

        self.check_collision_and_move(new_x, new_y, world);
    }

    // Point test on the reference position only; a blocked move is dropped whole
    fn check_collision_and_move(&mut self, new_x: f32, new_y: f32, world: &GridMap) {
        if !world.is_wall(new_x, new_y) {
            self.x = new_x;
            self.y = new_y;
        }
    }
}
