use std::f32::consts::{FRAC_PI_2, PI};

use crate::consts::NO_HIT_DISTANCE;
use crate::map::GridMap;
use crate::utils::{distance, normalize_angle};

const THREE_HALVES_PI: f32 = 3.0 * FRAC_PI_2;

/// Result of casting one ray from the player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ray {
    /// Normalized into `[0, 2π)`
    pub angle: f32,
    pub wall_hit_x: f32,
    pub wall_hit_y: f32,
    /// Euclidean, not yet fisheye-corrected
    pub distance: f32,
    /// Hit a wall face lying along a vertical grid line
    pub was_hit_vertical: bool,
    pub facing_down: bool,
    pub facing_up: bool,
    pub facing_right: bool,
    pub facing_left: bool,
}

/// Walks a ray from grid line to grid line until an occupied cell is found or
/// the point leaves the world rectangle.
///
/// `nudge` is added to the probe point only, so a point sitting exactly on a
/// grid line is looked up in the cell on the far side of that line.
fn march(
    grid: &GridMap,
    start: (f32, f32),
    step: (f32, f32),
    nudge: (f32, f32),
) -> Option<(f32, f32)> {
    let (max_x, max_y) = (grid.world_width(), grid.world_height());
    let (mut x, mut y) = start;

    while x >= 0.0 && x <= max_x && y >= 0.0 && y <= max_y {
        if grid.is_wall(x + nudge.0, y + nudge.1) {
            return Some((x, y));
        }
        x += step.0;
        y += step.1;
    }
    None
}

/// Casts a single ray from `(origin_x, origin_y)` and returns the nearest wall
/// hit, testing horizontal and vertical grid lines separately.
///
/// The map must be enclosed by walls. Otherwise both scans can run off the
/// world and the ray comes back with `distance == NO_HIT_DISTANCE`.
pub fn cast(angle: f32, origin_x: f32, origin_y: f32, grid: &GridMap) -> Ray {
    let angle = normalize_angle(angle);
    let tile = grid.tile_size();
    let tan = angle.tan();

    let facing_down = angle > 0.0 && angle < PI;
    let facing_up = !facing_down;
    let facing_right = angle < FRAC_PI_2 || angle > THREE_HALVES_PI;
    let facing_left = !facing_right;

    // Horizontal grid lines
    let mut y_intercept = (origin_y / tile).floor() * tile;
    if facing_down {
        y_intercept += tile;
    }
    let x_intercept = origin_x + (y_intercept - origin_y) / tan;

    let y_step = if facing_up { -tile } else { tile };
    let mut x_step = tile / tan;
    if (facing_left && x_step > 0.0) || (facing_right && x_step < 0.0) {
        x_step = -x_step;
    }

    let horizontal = march(
        grid,
        (x_intercept, y_intercept),
        (x_step, y_step),
        (0.0, if facing_up { -1.0 } else { 0.0 }),
    );

    // Vertical grid lines
    let mut x_intercept = (origin_x / tile).floor() * tile;
    if facing_right {
        x_intercept += tile;
    }
    let y_intercept = origin_y + (x_intercept - origin_x) * tan;

    let x_step = if facing_left { -tile } else { tile };
    let mut y_step = tile * tan;
    if (facing_up && y_step > 0.0) || (facing_down && y_step < 0.0) {
        y_step = -y_step;
    }

    let vertical = march(
        grid,
        (x_intercept, y_intercept),
        (x_step, y_step),
        (if facing_left { -1.0 } else { 0.0 }, 0.0),
    );

    let horizontal_distance = horizontal.map_or(NO_HIT_DISTANCE, |(x, y)| {
        distance(origin_x, origin_y, x, y)
    });
    let vertical_distance = vertical.map_or(NO_HIT_DISTANCE, |(x, y)| {
        distance(origin_x, origin_y, x, y)
    });

    let was_hit_vertical = vertical_distance < horizontal_distance;
    let ((wall_hit_x, wall_hit_y), distance) = if was_hit_vertical {
        (vertical.unwrap_or_default(), vertical_distance)
    } else {
        (horizontal.unwrap_or_default(), horizontal_distance)
    };

    Ray {
        angle,
        wall_hit_x,
        wall_hit_y,
        distance,
        was_hit_vertical,
        facing_down,
        facing_up,
        facing_right,
        facing_left,
    }
}
