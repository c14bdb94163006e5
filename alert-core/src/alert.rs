//! Alarm-Zustandsautomat
//!
//! ```text
//!            Taster                    Alarm-Meldung
//!   Off ─────────────► Standby ─────────────────────► Alert
//!    ▲                  │  ▲                            │
//!    └──── Taster ──────┘  └── Taster / Timeout ────────┘
//! ```
//!
//! - Eine Alarm-Meldung setzt immer den Latch (einmaliges Blinken).
//!   Nur außerhalb von `Off` eskaliert sie zu `Alert`.
//! - `Alert` zerfällt nach `alert_timeout_ms` ohne neue Meldung zu `Standby`.
//! - Der Taster ist der einzige manuelle Weg aus `Alert` heraus.
//!
//! Alle Zeiten sind monotone Millisekunden, die der Aufrufer liefert.

use crate::animation::Animation;
use crate::types::{AlertOutcome, AlertStatus, palette};

/// Feste Konfiguration des Zustandsautomaten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertConfig {
    /// Wie lange `Alert` ohne neue Meldung bestehen bleibt
    pub alert_timeout_ms: u64,
    /// Dauer einer Blink-Phase (Blau bzw. Rot)
    pub flash_phase_ms: u64,
    /// Dauer der Quittungsfarbe nach einem Tasterdruck
    pub acknowledge_ms: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            alert_timeout_ms: 300_000,
            flash_phase_ms: 500,
            acknowledge_ms: 1_000,
        }
    }
}

/// Zustandswechsel durch einen Tasterdruck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTransition {
    pub from: AlertStatus,
    pub to: AlertStatus,
    pub animation: Animation,
}

/// Ergebnis eines Ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Kein Alarm aktiv
    Idle,
    /// Alarm aktiv, seit `elapsed_ms` ohne neue Meldung
    Heartbeat { elapsed_ms: u64 },
    /// Timeout abgelaufen, zurück auf `Standby`
    Decayed { elapsed_ms: u64 },
}

impl TickOutcome {
    pub fn animation(self) -> Option<Animation> {
        match self {
            TickOutcome::Idle => None,
            TickOutcome::Heartbeat { .. } => Some(Animation::Heartbeat),
            TickOutcome::Decayed { .. } => Some(Animation::Clear),
        }
    }
}

/// Der komplette Alarm-Zustand
///
/// Wird einmal beim Start erzeugt und nur über die Übergangsfunktionen verändert.
#[derive(Debug, Clone)]
pub struct AlertState {
    config: AlertConfig,
    status: AlertStatus,
    triggered_latch: bool,
    last_alert_at_ms: u64,
}

impl AlertState {
    pub fn new(config: AlertConfig, now_ms: u64) -> Self {
        Self {
            config,
            status: AlertStatus::Off,
            triggered_latch: false,
            last_alert_at_ms: now_ms,
        }
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    pub fn status(&self) -> AlertStatus {
        self.status
    }

    /// Wurde seit dem letzten `take_trigger()` eine Meldung empfangen?
    pub fn is_triggered(&self) -> bool {
        self.triggered_latch
    }

    /// Zeitpunkt des letzten Übergangs nach `Alert`
    ///
    /// Nur aussagekräftig solange `status() == Alert`.
    pub fn last_alert_at_ms(&self) -> u64 {
        self.last_alert_at_ms
    }

    /// Verarbeitet eine Taster-Flanke
    ///
    /// Off → Standby, Standby → Off, Alert → Standby (Stummschalten).
    pub fn press_button(&mut self) -> ButtonTransition {
        let from = self.status;
        let (to, color) = match from {
            AlertStatus::Off => (AlertStatus::Standby, palette::ACK_STANDBY),
            AlertStatus::Standby => (AlertStatus::Off, palette::ACK_OFF),
            AlertStatus::Alert => (AlertStatus::Standby, palette::ACK_SILENCE),
        };
        self.status = to;

        ButtonTransition {
            from,
            to,
            animation: Animation::Acknowledge(color),
        }
    }

    /// Verarbeitet eine eingehende Alarm-Meldung
    ///
    /// Der Latch wird immer gesetzt. Im Zustand `Off` bleibt der Status unverändert.
    pub fn notify(&mut self, now_ms: u64) -> AlertOutcome {
        self.triggered_latch = true;

        if self.status == AlertStatus::Off {
            return AlertOutcome::Ignored;
        }

        self.status = AlertStatus::Alert;
        self.last_alert_at_ms = now_ms;
        AlertOutcome::Escalated
    }

    /// Konsumiert den Latch (höchstens einmal pro Meldung)
    pub fn take_trigger(&mut self) -> Option<Animation> {
        if !self.triggered_latch {
            return None;
        }
        self.triggered_latch = false;
        Some(Animation::TriggerFlash)
    }

    /// Prüft Heartbeat und Timeout im Zustand `Alert`
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        if self.status != AlertStatus::Alert {
            return TickOutcome::Idle;
        }

        let elapsed_ms = now_ms.saturating_sub(self.last_alert_at_ms);
        if elapsed_ms > self.config.alert_timeout_ms {
            self.status = AlertStatus::Standby;
            TickOutcome::Decayed { elapsed_ms }
        } else {
            TickOutcome::Heartbeat { elapsed_ms }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TickOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TickOutcome::Idle => defmt::write!(fmt, "Idle"),
            TickOutcome::Heartbeat { elapsed_ms } => {
                defmt::write!(fmt, "Heartbeat {{ elapsed_ms: {} }}", elapsed_ms)
            }
            TickOutcome::Decayed { elapsed_ms } => {
                defmt::write!(fmt, "Decayed {{ elapsed_ms: {} }}", elapsed_ms)
            }
        }
    }
}
