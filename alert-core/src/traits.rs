//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware- und Netzwerk-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::endpoint::{EndpointReply, EndpointRequest};
use crate::types::IndicatorCommand;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf einen RGB LED-Strip (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock in alert-tests)
pub trait SmartLedWriter: Send {
    /// Füllt den kompletten Strip mit einer RGB-Farbe
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Anzeige-Treiber für den Zustandsautomaten
///
/// `show()` belegt den aufrufenden Task für die komplette Dauer des Kommandos.
/// Hardware-Fehler bleiben im Treiber (loggen, weitermachen) und werden
/// nicht an den Core gemeldet.
#[allow(async_fn_in_trait)]
pub trait Indicator {
    async fn show(&mut self, command: IndicatorCommand);
}

/// Asynchrone Wartezeit für Anzeige-Treiber
///
/// Auf dem Target über `embassy_time::Timer`, in Tests über eine simulierte Uhr.
#[allow(async_fn_in_trait)]
pub trait Delay {
    async fn delay_ms(&mut self, ms: u64);
}

/// Taster-Eingang, bereits auf logisch "gedrückt" umgerechnet
pub trait ButtonInput {
    fn is_pressed(&mut self) -> bool;
}

/// Monotone Zeitquelle in Millisekunden
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Netzwerk-Grenze zwischen HTTP-Server und Poll-Loop
///
/// Anfragen warten hier, bis die Poll-Loop sie in Schritt (a) abholt.
pub trait Boundary {
    type Error;

    /// Holt die nächste wartende Anfrage (non-blocking)
    fn poll(&mut self) -> Result<Option<EndpointRequest>, Self::Error>;

    /// Liefert die Antwort zur zuletzt abgeholten Anfrage aus
    fn reply(&mut self, reply: EndpointReply) -> Result<(), Self::Error>;
}
