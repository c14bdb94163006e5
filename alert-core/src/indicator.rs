//! Anzeige-Treiber für einen LED-Strip
//!
//! Setzt `IndicatorCommand`s in Schreibzugriffe auf einen `SmartLedWriter` um.

use rgb::RGB8;

use crate::logic::scale_brightness;
use crate::traits::{Delay, Indicator, LedError, SmartLedWriter};
use crate::types::{IndicatorCommand, palette};

/// Indicator über einen SmartLedWriter
///
/// `show()` hält den aufrufenden Task für die komplette Anzeigedauer fest.
/// Schreibfehler werden gezählt (und mit `defmt` geloggt), aber nicht
/// weitergereicht: der Zustandsautomat läuft ohne LED weiter.
pub struct LedIndicator<L: SmartLedWriter, D: Delay> {
    led: L,
    delay: D,
    brightness: f32,
    failed_writes: usize,
}

impl<L: SmartLedWriter, D: Delay> LedIndicator<L, D> {
    pub fn new(led: L, delay: D, brightness: f32) -> Self {
        Self {
            led,
            delay,
            brightness,
            failed_writes: 0,
        }
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn led_mut(&mut self) -> &mut L {
        &mut self.led
    }

    /// Anzahl fehlgeschlagener Schreibzugriffe seit dem Start
    pub fn failed_writes(&self) -> usize {
        self.failed_writes
    }

    fn fill(&mut self, color: RGB8) {
        let scaled = scale_brightness(color, self.brightness);
        if let Err(e) = self.led.write(scaled) {
            self.failed_writes += 1;
            report_write_error(color, e);
        }
    }
}

impl<L: SmartLedWriter, D: Delay> Indicator for LedIndicator<L, D> {
    async fn show(&mut self, command: IndicatorCommand) {
        self.fill(command.color);

        if command.duration_ms > 0 {
            self.delay.delay_ms(command.duration_ms).await;
        }

        if command.clear_after {
            self.fill(palette::BLACK);
        }
    }
}

#[cfg(feature = "defmt")]
fn report_write_error(color: RGB8, e: LedError) {
    defmt::error!(
        "Indicator: Failed to write ({}, {}, {}): {}",
        color.r,
        color.g,
        color.b,
        e
    );
}

#[cfg(not(feature = "defmt"))]
fn report_write_error(_color: RGB8, _e: LedError) {}
