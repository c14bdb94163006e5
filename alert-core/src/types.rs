//! Core Types für den Alarm-Melder
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Alarm-Stufe des Melders
///
/// Startet immer mit `Off`. Es gibt keinen Endzustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertStatus {
    /// Komplett aus: eingehende Alarme werden ignoriert
    #[default]
    Off,
    /// Bereit: ein eingehender Alarm eskaliert zu `Alert`
    Standby,
    /// Alarm aktiv: Heartbeat blinkt bis Timeout oder Taster
    Alert,
}

impl AlertStatus {
    /// Antwort-Text für `GET /status`
    pub fn status_text(self) -> &'static str {
        match self {
            AlertStatus::Off => "Status: OFF",
            AlertStatus::Standby => "Status: STANDBY",
            AlertStatus::Alert => "Status: ALERT",
        }
    }

    /// Kurzname für Logs
    pub fn name(self) -> &'static str {
        match self {
            AlertStatus::Off => "OFF",
            AlertStatus::Standby => "STANDBY",
            AlertStatus::Alert => "ALERT",
        }
    }
}

/// Ergebnis einer eingehenden Alarm-Meldung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    /// Status war nicht `Off` → jetzt `Alert`
    Escalated,
    /// Status war `Off` → Meldung angenommen, aber ohne Statuswechsel
    Ignored,
}

impl AlertOutcome {
    /// Präfix der HTTP-Antwort (ohne Payload-Echo)
    pub fn response_prefix(self) -> &'static str {
        match self {
            AlertOutcome::Escalated => "Alert received!",
            AlertOutcome::Ignored => "Alert ignored.",
        }
    }
}

/// Ein einzelnes Anzeige-Kommando für den Indicator
///
/// `color` wird für `duration_ms` angezeigt, danach optional schwarz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorCommand {
    pub color: RGB8,
    pub duration_ms: u64,
    pub clear_after: bool,
}

/// Feste Farben des Melders (volle Intensität, Helligkeit skaliert der Treiber)
pub mod palette {
    use rgb::RGB8;

    pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
    pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
    pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
    pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
    pub const ORANGE: RGB8 = RGB8 { r: 255, g: 165, b: 0 };

    /// Quittung Off → Standby
    pub const ACK_STANDBY: RGB8 = GREEN;
    /// Quittung Standby → Off
    pub const ACK_OFF: RGB8 = RED;
    /// Quittung Alert → Standby (Stummschalten)
    pub const ACK_SILENCE: RGB8 = ORANGE;
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for AlertStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlertOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AlertOutcome::Escalated => defmt::write!(fmt, "Escalated"),
            AlertOutcome::Ignored => defmt::write!(fmt, "Ignored"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for IndicatorCommand {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "IndicatorCommand {{ rgb: ({}, {}, {}), duration_ms: {}, clear_after: {} }}",
            self.color.r,
            self.color.g,
            self.color.b,
            self.duration_ms,
            self.clear_after
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(AlertStatus::Off.status_text(), "Status: OFF");
        assert_eq!(AlertStatus::Standby.status_text(), "Status: STANDBY");
        assert_eq!(AlertStatus::Alert.status_text(), "Status: ALERT");
    }

    #[test]
    fn test_default_status_is_off() {
        assert_eq!(AlertStatus::default(), AlertStatus::Off);
    }

    #[test]
    fn test_response_prefix() {
        assert_eq!(AlertOutcome::Escalated.response_prefix(), "Alert received!");
        assert_eq!(AlertOutcome::Ignored.response_prefix(), "Alert ignored.");
    }
}
