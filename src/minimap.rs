use crate::consts::{MINIMAP_OPEN_SPACE_COLOR, MINIMAP_PLAYER_COLOR, MINIMAP_WALL_COLOR};
use crate::map::GridMap;
use crate::player::Player;
use crate::renderer::Renderer;

impl Renderer {
    /// Top-down map in the top-left corner, one filled square per cell.
    pub fn render_minimap(&mut self, world: &GridMap) {
        let scale = self.minimap_scale;
        let tile = world.tile_size();
        // Edges are snapped per cell so neighbouring squares share a border
        let edge = |index: usize| (index as f32 * tile * scale) as usize;

        for tile_y in 0..world.rows() {
            let (py0, py1) = (edge(tile_y), edge(tile_y + 1));
            if py1 <= py0 {
                continue;
            }

            for tile_x in 0..world.cols() {
                let (px0, px1) = (edge(tile_x), edge(tile_x + 1));
                if px1 <= px0 {
                    continue;
                }

                let tile_color = if world.get_tile(tile_x, tile_y) > 0 {
                    MINIMAP_WALL_COLOR
                } else {
                    MINIMAP_OPEN_SPACE_COLOR
                };
                self.buffer
                    .fill_rect(px0, py0, px1 - px0, py1 - py0, tile_color);
            }
        }
    }

    /// Square marker with its top-left corner on the player's position.
    pub fn render_player_marker(&mut self, player: &Player) {
        let scale = self.minimap_scale;
        let x = (player.x * scale).max(0.0) as usize;
        let y = (player.y * scale).max(0.0) as usize;
        let width = (player.width * scale) as usize;
        let height = (player.height * scale) as usize;
        self.buffer
            .fill_rect(x, y, width, height, MINIMAP_PLAYER_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BACKGROUND_COLOR;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn minimap_cells_are_scaled_squares() {
        let world = GridMap::default();
        let mut renderer = Renderer::new(800, 600, FRAC_PI_3, 0.5).unwrap();
        renderer.buffer.clear(BACKGROUND_COLOR);
        renderer.render_minimap(&world);

        // Cell (0, 0) is a wall covering 0..16, cell (1, 1) is open
        assert_eq!(renderer.buffer.get(0, 0), Some(MINIMAP_WALL_COLOR));
        assert_eq!(renderer.buffer.get(15, 15), Some(MINIMAP_WALL_COLOR));
        assert_eq!(renderer.buffer.get(16, 16), Some(MINIMAP_OPEN_SPACE_COLOR));
        // Outside the 240x176 map area nothing is drawn
        assert_eq!(renderer.buffer.get(240, 10), Some(BACKGROUND_COLOR));
        assert_eq!(renderer.buffer.get(10, 176), Some(BACKGROUND_COLOR));
        assert_eq!(renderer.buffer.get(239, 175), Some(MINIMAP_WALL_COLOR));
    }

    #[test]
    fn player_marker_is_drawn_at_scaled_position() {
        let mut renderer = Renderer::new(800, 600, FRAC_PI_3, 0.5).unwrap();
        renderer.buffer.clear(BACKGROUND_COLOR);
        let player = Player::new(100.0, 60.0);
        renderer.render_player_marker(&player);

        assert_eq!(renderer.buffer.get(50, 30), Some(MINIMAP_PLAYER_COLOR));
        assert_eq!(renderer.buffer.get(54, 34), Some(MINIMAP_PLAYER_COLOR));
        assert_eq!(renderer.buffer.get(55, 30), Some(BACKGROUND_COLOR));
        assert_eq!(renderer.buffer.get(49, 30), Some(BACKGROUND_COLOR));
    }

    #[test]
    fn zero_scale_draws_nothing() {
        let mut renderer = Renderer::new(64, 64, FRAC_PI_3, 0.0).unwrap();
        renderer.buffer.clear(BACKGROUND_COLOR);
        renderer.render_minimap(&GridMap::default());
        renderer.render_player_marker(&Player::new(10.0, 10.0));
        assert!(renderer.buffer.pixels().iter().all(|&p| p == BACKGROUND_COLOR));
    }
}
