use rayon::prelude::*;

use crate::caster::{Ray, cast};
use crate::map::GridMap;
use crate::player::Player;

/// One ray per screen column, left to right. The backing storage is sized
/// once and overwritten every frame.
#[derive(Debug, Clone)]
pub struct RayFan {
    rays: Vec<Ray>,
    fov: f32,
}

impl RayFan {
    pub fn new(num_rays: usize, fov: f32) -> Self {
        RayFan {
            rays: vec![Ray::default(); num_rays],
            fov,
        }
    }

    pub fn len(&self) -> usize {
        self.rays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    pub fn rays_mut(&mut self) -> &mut [Ray] {
        &mut self.rays
    }

    /// Un-normalized angle of column `index` for a given heading.
    pub fn ray_angle(&self, heading: f32, index: usize) -> f32 {
        let increment = self.fov / self.rays.len() as f32;
        heading - self.fov / 2.0 + index as f32 * increment
    }

    /// Recasts every ray from the player's current pose.
    pub fn cast_all(&mut self, player: &Player, world: &GridMap) {
        let start = player.angle - self.fov / 2.0;
        let increment = self.fov / self.rays.len() as f32;
        let (x, y) = (player.x, player.y);

        self.rays.par_iter_mut().enumerate().for_each(|(i, ray)| {
            *ray = cast(start + i as f32 * increment, x, y, world);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const FOV: f32 = std::f32::consts::FRAC_PI_3;

    #[test]
    fn fan_spans_field_of_view_in_increasing_order() {
        let world = GridMap::default();
        let mut player = Player::new(240.0, 176.0);
        player.angle = FRAC_PI_2;

        let mut fan = RayFan::new(320, FOV);
        fan.cast_all(&player, &world);

        assert_eq!(fan.len(), 320);
        let rays = fan.rays();
        assert!((rays[0].angle - (FRAC_PI_2 - FOV / 2.0)).abs() < 1e-5);
        let last = FRAC_PI_2 + FOV / 2.0 - FOV / 320.0;
        assert!((rays[319].angle - last).abs() < 1e-5);
        assert!(rays[319].angle < FRAC_PI_2 + FOV / 2.0);
        for pair in rays.windows(2) {
            assert!(pair[1].angle > pair[0].angle);
        }
    }

    #[test]
    fn each_slot_matches_a_single_cast() {
        let world = GridMap::default();
        let mut player = Player::new(400.0, 300.0);
        player.angle = 0.3;

        let mut fan = RayFan::new(64, FOV);
        fan.cast_all(&player, &world);

        for (i, ray) in fan.rays().iter().enumerate() {
            let expected = cast(fan.ray_angle(player.angle, i), player.x, player.y, &world);
            assert_eq!(*ray, expected);
        }
    }

    #[test]
    fn recasting_overwrites_previous_frame() {
        let world = GridMap::default();
        let mut player = Player::new(240.0, 176.0);
        let mut fan = RayFan::new(16, FOV);

        fan.cast_all(&player, &world);
        let first = fan.rays().to_vec();
        player.angle += 1.0;
        fan.cast_all(&player, &world);

        assert_eq!(fan.len(), 16);
        assert_ne!(first[0].angle, fan.rays()[0].angle);
    }
}
