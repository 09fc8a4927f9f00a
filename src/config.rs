//! Runtime configuration shared by the presentation layers

use std::time::Duration;

/// Pause before the engine's reply is shown
pub const DEFAULT_AI_DELAY_MS: u64 = 500;

/// Default GUI window size
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [420.0, 560.0];

/// Settings for one session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Minimum time between the human move and the engine's reply
    pub ai_delay: Duration,
    /// Initial window size, GUI only
    pub window_size: [f32; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_delay: Duration::from_millis(DEFAULT_AI_DELAY_MS),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_ai_delay_ms(mut self, ms: u64) -> Self {
        self.ai_delay = Duration::from_millis(ms);
        self
    }

    #[must_use]
    pub fn with_window_size(mut self, width: f32, height: f32) -> Self {
        self.window_size = [width, height];
        self
    }

    /// Native window options for eframe
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_min_inner_size([320.0, 420.0])
                .with_title("Tic Tac Toe"),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.ai_delay, Duration::from_millis(500));
        assert_eq!(config.window_size, DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::default()
            .with_ai_delay_ms(0)
            .with_window_size(600.0, 700.0);
        assert_eq!(config.ai_delay, Duration::ZERO);
        assert_eq!(config.window_size, [600.0, 700.0]);
    }
}
