use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use raycaster::{
    Input,
    config::{Config, load_config},
    flags::{MapSource, parse_flags},
    gamestate::GameState,
    map::GridMap,
    renderer::Renderer,
    utils::generate_random_map,
};

fn load_world(source: &MapSource, config: &Config) -> Result<GridMap> {
    let world = match source {
        MapSource::File(path) => GridMap::parse_from_file(path)
            .with_context(|| format!("loading map {}", path.display()))?,
        MapSource::Random(side) => {
            let world = generate_random_map(*side);
            tracing::info!(side, "generated random map");
            world
        }
        MapSource::Default => match &config.map {
            Some(path) => GridMap::parse_from_file(path)
                .with_context(|| format!("loading map {}", path.display()))?,
            None => GridMap::default(),
        },
    };
    Ok(world)
}

fn read_input(input: &WinitInputHelper) -> Input {
    Input::from_keys(
        input.key_held(KeyCode::ArrowUp) || input.key_held(KeyCode::KeyW),
        input.key_held(KeyCode::ArrowDown) || input.key_held(KeyCode::KeyS),
        input.key_held(KeyCode::ArrowLeft) || input.key_held(KeyCode::KeyA),
        input.key_held(KeyCode::ArrowRight) || input.key_held(KeyCode::KeyD),
        input.key_pressed(KeyCode::Escape) || input.close_requested(),
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let flags = parse_flags(std::env::args())?;
    let config = load_config(&flags.config)
        .with_context(|| format!("loading config {}", flags.config.display()))?;
    let world = load_world(&flags.map, &config)?;

    let mut game_state = GameState::new(world, &config);
    let mut renderer = Renderer::from_config(&config)?;

    let event_loop = EventLoop::new()?;
    let mut input = WinitInputHelper::new();
    let window = Arc::new({
        let size = LogicalSize::new(config.width as f64, config.height as f64);
        WindowBuilder::new()
            .with_title("raycaster")
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)?
    });

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &*window);
        Pixels::new(config.width as u32, config.height as u32, surface_texture)?
    };
    tracing::info!(
        width = config.width,
        height = config.height,
        fps = config.fps,
        "window ready"
    );

    let frame_duration = config.frame_duration();
    let mut next_tick = Instant::now();
    let mut last_frame_time = Instant::now();
    let mut frame_count = 0;
    let mut fps_timer = Instant::now();
    let window_clone = window.clone();

    Ok(event_loop.run(move |event, elwt| {
        if let Event::WindowEvent { event, .. } = &event {
            match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                    return;
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        tracing::error!(%err, "pixels.resize_surface() failed");
                        elwt.exit();
                        return;
                    }
                }
                WindowEvent::RedrawRequested => {
                    renderer.render(&game_state);
                    renderer.draw_to_buffer(pixels.frame_mut());

                    frame_count += 1;
                    if fps_timer.elapsed() >= Duration::from_secs(1) {
                        tracing::debug!(fps = frame_count, "frame rate");
                        window_clone.set_title(&format!("raycaster - {} FPS", frame_count));
                        frame_count = 0;
                        fps_timer = Instant::now();
                    }

                    if let Err(err) = pixels.render() {
                        tracing::error!(%err, "pixels.render() failed");
                        elwt.exit();
                        return;
                    }
                }
                _ => (),
            }
        }

        if input.update(&event) {
            let controls = read_input(&input);
            if controls.quit {
                elwt.exit();
                return;
            }

            let now = Instant::now();
            if now >= next_tick {
                let delta_time = now.duration_since(last_frame_time).as_secs_f32();
                last_frame_time = now;
                next_tick = now + frame_duration;

                game_state.update(&controls, delta_time);
                window_clone.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
        }
    })?)
}
