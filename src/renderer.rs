use crate::config::Config;
use crate::consts::{BACKGROUND_COLOR, FLOOR_COLOR, WALL_COLOR_HORIZONTAL, WALL_COLOR_VERTICAL};
use crate::error::RenderError;
use crate::framebuffer::FrameBuffer;
use crate::gamestate::GameState;
use crate::map::GridMap;
use crate::player::Player;
use crate::rayfan::RayFan;

/// Distance from the eye to the screen plane, in the same units as a pixel.
pub fn projection_plane_distance(screen_width: usize, fov: f32) -> f32 {
    (screen_width as f32 / 2.0) / (fov / 2.0).tan()
}

/// On-screen height of a wall tile seen at `corrected_distance`.
pub fn strip_height(tile_size: f32, corrected_distance: f32, plane_distance: f32) -> f32 {
    (tile_size / corrected_distance) * plane_distance
}

/// Vertical span `top..bottom` of a strip centred on the horizon, clamped to the screen.
pub fn strip_span(strip_height: f32, screen_height: usize) -> (usize, usize) {
    let half_screen = screen_height as f32 / 2.0;
    let clamp = |v: f32| v.max(0.0).min(screen_height as f32) as usize;
    (
        clamp(half_screen - strip_height / 2.0),
        clamp(half_screen + strip_height / 2.0),
    )
}

pub struct Renderer {
    pub buffer: FrameBuffer,
    pub minimap_scale: f32,
    projection_plane: f32,
}

impl Renderer {
    pub fn new(
        width: usize,
        height: usize,
        fov: f32,
        minimap_scale: f32,
    ) -> Result<Self, RenderError> {
        Ok(Renderer {
            buffer: FrameBuffer::new(width, height)?,
            minimap_scale,
            projection_plane: projection_plane_distance(width, fov),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, RenderError> {
        Self::new(config.width, config.height, config.fov(), config.minimap_scale)
    }

    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    pub fn projection_plane(&self) -> f32 {
        self.projection_plane
    }

    /// Clear, minimap, player marker, then the 3D view on top.
    pub fn render(&mut self, game_state: &GameState) {
        self.render_frame(&game_state.rays, &game_state.player, &game_state.world);
    }

    pub fn render_frame(&mut self, rays: &RayFan, player: &Player, world: &GridMap) {
        self.buffer.clear(BACKGROUND_COLOR);
        self.render_minimap(world);
        self.render_player_marker(player);
        self.render_projected_walls(rays, player, world.tile_size());
    }

    /// Draws one wall strip plus floor per column. Pixels above each strip
    /// keep whatever was already in the buffer.
    pub fn render_projected_walls(&mut self, rays: &RayFan, player: &Player, tile_size: f32) {
        let height = self.height();

        for (x, ray) in rays.rays().iter().enumerate().take(self.width()) {
            // Perpendicular distance, keeps straight walls straight
            let corrected = ray.distance * (ray.angle - player.angle).cos();
            let wall_height = strip_height(tile_size, corrected, self.projection_plane);
            let (top, bottom) = strip_span(wall_height, height);

            let wall_color = if ray.was_hit_vertical {
                WALL_COLOR_VERTICAL
            } else {
                WALL_COLOR_HORIZONTAL
            };

            self.buffer.fill_column(x, top, bottom, wall_color);
            self.buffer.fill_column(x, bottom, height, FLOOR_COLOR);
        }
    }

    pub fn draw_to_buffer(&self, frame: &mut [u8]) {
        self.buffer.draw_to_buffer(frame);
    }
}
