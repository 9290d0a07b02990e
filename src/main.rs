use anyhow::{Context, Result};
use clap::Parser;
use immortal_life::{Automaton, Config, GameState, Settings, Viewport, input, rendering};
use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    let settings = Config::parse()
        .validate()
        .context("invalid simulation parameters")?;

    info!(
        width = settings.width,
        height = settings.height,
        cell_size = settings.cell_size,
        interval_ms = settings.interval_ms,
        color = settings.color.name(),
        "Starting Conway's Game of Life"
    );
    info!("Controls:");
    for line in input::CONTROLS {
        info!("  {line}");
    }

    macroquad::Window::from_config(window_conf(&settings), run(settings));
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn window_conf(settings: &Settings) -> Conf {
    let (window_width, window_height) = settings.window_size();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(settings: Settings) {
    let mut automaton = Automaton::new(settings.width, settings.height);
    let mut state = GameState::new(&settings);
    let viewport = Viewport::new(settings.cell_size);

    loop {
        if !input::process_keyboard_input(&mut state, &mut automaton) {
            info!(generation = automaton.generation_count(), "Exiting");
            break;
        }
        input::handle_mouse_clicks(&mut automaton, &viewport);

        state.tick(&mut automaton, get_frame_time() * 1000.0);

        clear_background(BLACK);
        rendering::draw_automaton(&automaton, &viewport, state.color);

        next_frame().await;
    }
}
