use tracing::{debug, info};

use super::{CellColor, Settings};
use crate::domain::Automaton;

/// Interval change per speed key press, in milliseconds
pub const SPEED_STEP_MS: u32 = 10;

/// GameState is the loop state that sits around the automaton:
/// play/pause, single stepping, pacing and the chosen cell color.
pub struct GameState {
    pub is_running: bool,
    pub step_requested: bool,
    pub interval_ms: u32,
    pub elapsed_ms: f32,
    pub color: CellColor,
}

impl GameState {
    /// Start paused with the configured pacing and color
    pub fn new(settings: &Settings) -> Self {
        Self {
            is_running: false,
            step_requested: false,
            interval_ms: settings.interval_ms.max(1),
            elapsed_ms: 0.0,
            color: settings.color,
        }
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        info!(running = self.is_running, "Simulation toggled");
    }

    /// Queue one generation; honored only while paused
    pub fn request_step(&mut self) {
        self.step_requested = true;
    }

    /// Shorter interval, never below 1 ms
    pub fn speed_up(&mut self) {
        self.interval_ms = self.interval_ms.saturating_sub(SPEED_STEP_MS).max(1);
        info!(interval_ms = self.interval_ms, "Interval changed");
    }

    pub fn slow_down(&mut self) {
        self.interval_ms = self.interval_ms.saturating_add(SPEED_STEP_MS);
        info!(interval_ms = self.interval_ms, "Interval changed");
    }

    pub fn set_color(&mut self, color: CellColor) {
        self.color = color;
        debug!(color = color.name(), "Cell color changed");
    }

    /// Advance the loop clock by one frame and run the automaton if due.
    /// Returns whether a generation was computed.
    pub fn tick(&mut self, automaton: &mut Automaton, delta_ms: f32) -> bool {
        if self.is_running {
            self.elapsed_ms += delta_ms;
            if self.elapsed_ms >= self.interval_ms as f32 {
                automaton.update();
                self.elapsed_ms = 0.0;
                return true;
            }
            return false;
        }

        self.elapsed_ms = 0.0;
        if self.step_requested {
            self.step_requested = false;
            automaton.update();
            debug!(generation = automaton.generation_count(), "Stepped one generation");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Config;

    fn state() -> GameState {
        let settings = Config::default().validate().unwrap();
        GameState::new(&settings)
    }

    #[test]
    fn test_starts_paused() {
        let mut state = state();
        let mut life = Automaton::new(3, 3);
        assert!(!state.is_running);
        assert!(!state.tick(&mut life, 1_000.0));
        assert_eq!(life.generation_count(), 0);
    }

    #[test]
    fn test_running_waits_for_interval() {
        let mut state = state();
        let mut life = Automaton::new(3, 3);
        state.toggle_running();

        assert!(!state.tick(&mut life, 60.0));
        assert!(state.tick(&mut life, 40.0));
        assert_eq!(life.generation_count(), 1);
        assert_eq!(state.elapsed_ms, 0.0);

        assert!(!state.tick(&mut life, 99.0));
        assert_eq!(life.generation_count(), 1);
    }

    #[test]
    fn test_step_only_when_paused() {
        let mut state = state();
        let mut life = Automaton::new(3, 3);

        state.request_step();
        assert!(state.tick(&mut life, 0.0));
        assert!(!state.tick(&mut life, 0.0));
        assert_eq!(life.generation_count(), 1);

        state.toggle_running();
        state.request_step();
        assert!(!state.tick(&mut life, 0.0));
        assert_eq!(life.generation_count(), 1);
    }

    #[test]
    fn test_paused_discards_elapsed_time() {
        let mut state = state();
        let mut life = Automaton::new(3, 3);
        state.toggle_running();
        state.tick(&mut life, 90.0);
        state.toggle_running();
        state.tick(&mut life, 5.0);
        state.toggle_running();

        assert!(!state.tick(&mut life, 20.0));
        assert_eq!(life.generation_count(), 0);
    }

    #[test]
    fn test_speed_limits() {
        let mut state = state();
        state.interval_ms = 15;
        state.speed_up();
        assert_eq!(state.interval_ms, 5);
        state.speed_up();
        assert_eq!(state.interval_ms, 1);
        state.speed_up();
        assert_eq!(state.interval_ms, 1);

        state.slow_down();
        assert_eq!(state.interval_ms, 11);
    }
}
