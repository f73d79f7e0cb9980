use std::f32::consts::FRAC_PI_2;

use raycaster::{
    Input,
    caster::cast,
    config::Config,
    consts::{FLOOR_COLOR, MINIMAP_WALL_COLOR, WALL_COLOR_HORIZONTAL},
    gamestate::GameState,
    map::GridMap,
    renderer::{Renderer, strip_height, strip_span},
};

fn session() -> (GameState, Renderer, Config) {
    let config = Config::default();
    let state = GameState::new(GridMap::default(), &config);
    let renderer = Renderer::from_config(&config).unwrap();
    (state, renderer, config)
}

#[test]
fn ray_at_heading_hits_bottom_boundary_row() {
    let (state, _, _) = session();
    let player = &state.player;
    assert_eq!(player.angle, FRAC_PI_2);

    let ray = cast(player.angle, player.x, player.y, &state.world);
    // Bottom ring starts at row 10, i.e. y = 320
    let expected = 10.0 * state.world.tile_size() - player.y;
    assert!((ray.distance - expected).abs() < 1e-3);
    assert!(!ray.was_hit_vertical);
    assert!((ray.wall_hit_x - player.x).abs() < 1e-3);
}

#[test]
fn centre_column_is_a_full_height_wall() {
    let (state, mut renderer, config) = session();
    renderer.render(&state);

    // 20 units from the wall the strip is taller than the screen
    let x = config.width / 2;
    for y in 0..config.height {
        assert_eq!(renderer.buffer.get(x, y), Some(WALL_COLOR_HORIZONTAL));
    }
}

#[test]
fn minimap_survives_above_wall_strips() {
    let (state, mut renderer, config) = session();
    renderer.render(&state);

    let ray = state.rays.rays()[0];
    let corrected = ray.distance * (ray.angle - state.player.angle).cos();
    let (top, bottom) = strip_span(
        strip_height(state.world.tile_size(), corrected, renderer.projection_plane()),
        config.height,
    );
    if top > 0 {
        assert_eq!(renderer.buffer.get(0, 0), Some(MINIMAP_WALL_COLOR));
    }
    if bottom < config.height {
        assert_eq!(renderer.buffer.get(0, config.height - 1), Some(FLOOR_COLOR));
    }
}

#[test]
fn idle_frames_leave_pose_unchanged() {
    let (mut state, mut renderer, _) = session();
    let before = state.player.clone();
    for dt in [0.033, 0.5, 3.0] {
        state.update(&Input::default(), dt);
        renderer.render(&state);
    }
    assert_eq!(state.player, before);
}

#[test]
fn walking_forward_stops_at_the_wall() {
    let (mut state, _, _) = session();
    let forward = Input {
        walk: 1,
        turn: 0,
        quit: false,
    };
    // 10 units/s towards a wall 20 units away
    for _ in 0..100 {
        state.update(&forward, 0.5);
    }
    let world = &state.world;
    assert!(!world.is_wall(state.player.x, state.player.y));
    assert!(state.player.y < 320.0);
    assert!(state.player.y > 300.0);
}
