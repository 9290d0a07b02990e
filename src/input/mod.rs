use macroquad::prelude::*;
use tracing::{debug, info};

use crate::application::{CellColor, GameState, Viewport};
use crate::domain::Automaton;

/// Discrete actions the control loop can take in response to input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleRunning,
    Randomize,
    Clear,
    ShowStatistics,
    SpeedUp,
    SlowDown,
    SetColor(CellColor),
    Step,
    Quit,
}

const KEY_BINDINGS: [(KeyCode, Command); 13] = [
    (KeyCode::Space, Command::ToggleRunning),
    (KeyCode::R, Command::Randomize),
    (KeyCode::C, Command::Clear),
    (KeyCode::S, Command::ShowStatistics),
    (KeyCode::Up, Command::SpeedUp),
    (KeyCode::Down, Command::SlowDown),
    (KeyCode::Key1, Command::SetColor(CellColor::Green)),
    (KeyCode::Key2, Command::SetColor(CellColor::Red)),
    (KeyCode::Key3, Command::SetColor(CellColor::Blue)),
    (KeyCode::Key4, Command::SetColor(CellColor::Yellow)),
    (KeyCode::Key5, Command::SetColor(CellColor::Cyan)),
    (KeyCode::Enter, Command::Step),
    (KeyCode::Escape, Command::Quit),
];

/// Help text shown once at startup
pub const CONTROLS: &[&str] = &[
    "Space: Start/Pause simulation",
    "R: Randomize grid",
    "C: Clear grid",
    "S: Show statistics",
    "Left Mouse Click: Toggle cell state",
    "Right Mouse Click: Toggle immortality for a live cell",
    "Up/Down arrows: Increase/Decrease simulation speed (interval ms)",
    "1-5: Cell color (Green, Red, Blue, Yellow, Cyan)",
    "Enter: Step forward (when paused)",
    "Escape or Close window: Exit",
];

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, command)| command)
}

/// Apply a command. Returns false when the loop should stop.
pub fn apply(command: Command, state: &mut GameState, automaton: &mut Automaton) -> bool {
    match command {
        Command::ToggleRunning => state.toggle_running(),
        Command::Randomize => {
            automaton.randomize();
            debug!(live = automaton.live_cell_count(), "Grid randomized");
        }
        Command::Clear => {
            automaton.clear();
            debug!("Grid cleared");
        }
        Command::ShowStatistics => {
            for line in automaton.statistics().to_string().lines() {
                info!("{line}");
            }
        }
        Command::SpeedUp => state.speed_up(),
        Command::SlowDown => state.slow_down(),
        Command::SetColor(color) => state.set_color(color),
        Command::Step => state.request_step(),
        Command::Quit => return false,
    }
    true
}

/// Poll this frame's key presses. Returns false when the loop should stop.
pub fn process_keyboard_input(state: &mut GameState, automaton: &mut Automaton) -> bool {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .fold(true, |keep_running, &(_, command)| {
            apply(command, state, automaton) && keep_running
        })
}

/// Left click toggles a cell, right click toggles its immortality
pub fn handle_mouse_clicks(automaton: &mut Automaton, viewport: &Viewport) {
    let (mouse_x, mouse_y) = mouse_position();
    let (x, y) = viewport.screen_to_grid(mouse_x, mouse_y);

    if is_mouse_button_pressed(MouseButton::Left) {
        automaton.toggle_cell(x, y);
        debug!(x, y, alive = automaton.is_cell_alive(x, y), "Cell toggled");
    } else if is_mouse_button_pressed(MouseButton::Right) {
        automaton.toggle_immortal(x, y);
        debug!(x, y, immortal = automaton.is_immortal(x, y), "Immortality toggled");
    }
}
