//! Animationen des Melders als Folge von Anzeige-Kommandos

use heapless::Vec;
use rgb::RGB8;

use crate::alert::AlertConfig;
use crate::types::{IndicatorCommand, palette};

/// Maximale Anzahl Kommandos pro Animation
pub const MAX_ANIMATION_STEPS: usize = 3;

/// Kommando-Folge einer Animation
pub type AnimationSteps = Vec<IndicatorCommand, MAX_ANIMATION_STEPS>;

/// Visuelle Rückmeldungen des Zustandsautomaten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    /// Quittung eines Tasterdrucks, danach aus
    Acknowledge(RGB8),
    /// Einmaliges Blau/Rot-Blinken bei neuem Alarm, danach aus
    TriggerFlash,
    /// Blau/Rot-Blinken in jeder Iteration während `Alert`
    Heartbeat,
    /// Sofort schwarz
    Clear,
}

impl Animation {
    /// Expandiert die Animation in Anzeige-Kommandos
    pub fn steps(self, config: &AlertConfig) -> AnimationSteps {
        let mut steps = AnimationSteps::new();
        let mut push = |color: RGB8, duration_ms: u64, clear_after: bool| {
            // Kapazität reicht für jede Animation
            let _ = steps.push(IndicatorCommand {
                color,
                duration_ms,
                clear_after,
            });
        };

        match self {
            Animation::Acknowledge(color) => push(color, config.acknowledge_ms, true),
            Animation::TriggerFlash => {
                push(palette::BLUE, config.flash_phase_ms, false);
                push(palette::RED, config.flash_phase_ms, false);
                push(palette::BLACK, 0, false);
            }
            Animation::Heartbeat => {
                push(palette::BLUE, config.flash_phase_ms, false);
                push(palette::RED, config.flash_phase_ms, false);
            }
            Animation::Clear => push(palette::BLACK, 0, false),
        }

        steps
    }

    /// Gesamtdauer der Animation (ohne Treiber-Overhead)
    pub fn duration_ms(self, config: &AlertConfig) -> u64 {
        self.steps(config).iter().map(|step| step.duration_ms).sum()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Animation {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Animation::Acknowledge(color) => {
                defmt::write!(fmt, "Acknowledge({}, {}, {})", color.r, color.g, color.b)
            }
            Animation::TriggerFlash => defmt::write!(fmt, "TriggerFlash"),
            Animation::Heartbeat => defmt::write!(fmt, "Heartbeat"),
            Animation::Clear => defmt::write!(fmt, "Clear"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledge_clears_afterwards() {
        let config = AlertConfig::default();
        let steps = Animation::Acknowledge(palette::GREEN).steps(&config);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].color, palette::GREEN);
        assert_eq!(steps[0].duration_ms, 1000);
        assert!(steps[0].clear_after);
    }

    #[test]
    fn test_trigger_flash_ends_black() {
        let config = AlertConfig::default();
        let steps = Animation::TriggerFlash.steps(&config);
        let colors: [RGB8; 3] = [steps[0].color, steps[1].color, steps[2].color];
        assert_eq!(colors, [palette::BLUE, palette::RED, palette::BLACK]);
        assert_eq!(steps[2].duration_ms, 0);
    }

    #[test]
    fn test_heartbeat_does_not_clear() {
        let config = AlertConfig::default();
        let steps = Animation::Heartbeat.steps(&config);
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|step| !step.clear_after));
        assert_eq!(Animation::Heartbeat.duration_ms(&config), 1000);
    }

    #[test]
    fn test_flash_speed_follows_config() {
        let config = AlertConfig {
            flash_phase_ms: 120,
            ..AlertConfig::default()
        };
        assert_eq!(Animation::TriggerFlash.duration_ms(&config), 240);
    }
}
