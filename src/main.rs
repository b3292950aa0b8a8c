//! An SDL2 viewer for the rphys2d simulation.
//!
//! Balls and boxes drop from the top of the window onto fixed ramps and a
//! cup. The physics runs at the world's fixed time step, as many steps per
//! frame as real time calls for.

mod render;
mod scene;

use log::warn;
use rphys2d::{Vec2, World, WorldConfig};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use std::error::Error;
use std::time::{Duration, Instant};

/// Window title displayed in the title bar
const TITLE: &str = "rphys2d";
/// Width of the window, and of the arena, in pixels
const WINDOW_WIDTH: u32 = 800;
/// Height of the window, and of the arena, in pixels
const WINDOW_HEIGHT: u32 = 600;
/// Background color for the canvas
const BACKGROUND: Color = Color::BLACK;
/// Downward acceleration in pixels per second squared
const GRAVITY: Vec2 = Vec2::new(0.0, -400.0);
/// Seconds between spawned bodies
const SPAWN_INTERVAL: f64 = 0.8;
/// Most simulated time one frame may catch up on, in seconds
const MAX_LAG: f64 = 0.1;
/// Path to the font file used for the body count
const FONT_PATH: &str = "/usr/share/fonts/truetype/futuristic-font/Futuristic-MRer.ttf";

/// Entry point: opens the window, builds the scene and runs the frame loop at 60 FPS.
fn main() -> Result<(), Box<dyn Error>> {
    use simplelog::LevelFilter::{Info, Off};
    simplelog::TermLogger::init(
        Info,
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init()?;

    let window = video_subsystem
        .window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()?;
    let font = match ttf_context.load_font(FONT_PATH, 18) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("no body count, could not load {FONT_PATH}: {e}");
            None
        }
    };

    let mut canvas = window.into_canvas().build()?;
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    canvas.present();

    let (width, height) = (f64::from(WINDOW_WIDTH), f64::from(WINDOW_HEIGHT));
    let mut world = World::new(WorldConfig::new(width, height).with_gravity(GRAVITY))?;
    scene::set_up(&mut world)?;

    let mut last_frame_time = Instant::now();
    let mut spawn_timer: f64 = 0.0;
    let mut lag: f64 = 0.0;
    let mut event_pump = sdl_context.event_pump()?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                    break 'running;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame_time).as_secs_f64();
        last_frame_time = now;

        spawn_timer += dt;
        if spawn_timer > SPAWN_INTERVAL {
            spawn_timer = 0.0;
            scene::spawn(&mut world, width, height)?;
        }

        // Run whole fixed steps; a long stall drops time instead of spiralling.
        let time_step = world.config().time_step;
        lag = (lag + dt).min(MAX_LAG);
        while lag >= time_step {
            world.tick();
            lag -= time_step;
        }
        scene::cleanup(&mut world);

        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        world.for_each_renderable(|renderable| render::draw(&mut canvas, &renderable, height));
        if let Some(font) = &font {
            render::hud(&mut canvas, font, &format!("bodies: {}", world.len()))?;
        }
        canvas.present();

        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }
    Ok(())
}
