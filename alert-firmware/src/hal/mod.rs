// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus alert-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod button;
pub mod indicator;
pub mod led_writer;

pub use button::GpioButton;
pub use indicator::EmbassyDelay;
pub use led_writer::{LED_BUFFER_SIZE, LedError, RmtLedWriter, SmartLedWriter};
