// Geometry helpers and level generation

use rand::Rng;
use rand::seq::SliceRandom;
use std::f32::consts::TAU;

use crate::consts::{RANDOM_MAP_HOLE_CHANCE, RANDOM_MAP_PATH_DEVIATION_CHANCE, TILE_SIZE};
use crate::map::GridMap;

/// Wraps any angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    ((x2 - x1) * (x2 - x1) + (y2 - y1) * (y2 - y1)).sqrt()
}

/// Returns true if all adjacent tiles are walls, also checks corners if include_corners is true
fn check_adjacent_tiles(
    grid: &GridMap,
    tile: (usize, usize),
    ignore_tile: (usize, usize),
    include_corners: bool,
) -> bool {
    for dx in -1..=1i32 {
        for dy in -1..=1i32 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if !include_corners && dx != 0 && dy != 0 {
                continue;
            }
            let nx = tile.0 as i32 + dx;
            let ny = tile.1 as i32 + dy;
            if nx == ignore_tile.0 as i32 && ny == ignore_tile.1 as i32 {
                continue;
            }
            if nx >= 0 && ny >= 0 && grid.get_tile(nx as usize, ny as usize) == 0 {
                return false;
            }
        }
    }
    true
}

fn carve_path<R: Rng>(
    grid: &mut GridMap,
    tile: (usize, usize),
    prev_direction: Option<(i32, i32)>,
    rng: &mut R,
) {
    grid.map[tile.1][tile.0] = 0;
    let mut directions = vec![(0, 1), (0, -1), (1, 0), (-1, 0)];

    // Keep heading the same way most of the time so corridors stay long
    match prev_direction {
        Some(prev_dir) if rng.random_range(0..100) >= RANDOM_MAP_PATH_DEVIATION_CHANCE => {
            directions.retain(|&d| d != prev_dir);
            directions.shuffle(rng);
            directions.insert(0, prev_dir);
        }
        _ => directions.shuffle(rng),
    }

    let rows = grid.rows();
    let cols = grid.cols();
    for (dx, dy) in directions {
        let nx = tile.0 as i32 + dx;
        let ny = tile.1 as i32 + dy;
        // Never touch the outer ring
        if nx < 1 || ny < 1 || nx as usize >= cols - 1 || ny as usize >= rows - 1 {
            continue;
        }
        let next = (nx as usize, ny as usize);
        if grid.get_tile(next.0, next.1) == 0 {
            continue;
        }
        if check_adjacent_tiles(grid, next, tile, false)
            || rng.random_range(0..100) < RANDOM_MAP_HOLE_CHANCE
        {
            carve_path(grid, next, Some((dx, dy)), rng);
        }
    }
}

/// Carves a `side` x `side` maze-like level with a solid border.
pub fn generate_random_map_with<R: Rng>(side: usize, rng: &mut R) -> GridMap {
    let side = side.max(3);
    let mut grid = GridMap {
        map: vec![vec![1; side]; side],
        tile_size: TILE_SIZE,
    };
    carve_path(&mut grid, (1, 1), None, rng);
    grid
}

pub fn generate_random_map(side: usize) -> GridMap {
    generate_random_map_with(side, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f32::consts::PI;

    #[test]
    fn normalize_angle_stays_in_range_and_is_idempotent() {
        for i in -400..400 {
            let theta = i as f32 * 0.173;
            let once = normalize_angle(theta);
            assert!((0.0..TAU).contains(&once), "{theta} -> {once}");
            assert_eq!(normalize_angle(once), once);
        }
        assert_eq!(normalize_angle(-1e-9), 0.0);
    }

    #[test]
    fn normalize_angle_wraps_by_full_turns() {
        assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(TAU + 0.25) - 0.25).abs() < 1e-5);
        assert!((normalize_angle(7.0 * TAU + 1.0) - 1.0).abs() < 1e-4);
        assert_eq!(normalize_angle(1.0), 1.0);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(10.0, 10.0, 10.0, 10.0), 0.0);
        assert_eq!(distance(1.0, 2.0, -2.0, -2.0), 5.0);
    }

    #[test]
    fn random_maps_are_valid_levels() {
        let mut rng = StdRng::seed_from_u64(7);
        for side in [4, 9, 15, 35] {
            let grid = generate_random_map_with(side, &mut rng);
            assert_eq!(grid.rows(), side);
            assert_eq!(grid.cols(), side);
            assert!(grid.validate().is_ok());
            assert_eq!(grid.get_tile(1, 1), 0);
        }
    }
}
