//! Alert Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert den Alarm-Zustandsautomaten, Traits und Pure Functions.

#![no_std]

pub mod alert;
pub mod animation;
pub mod button;
pub mod endpoint;
pub mod indicator;
pub mod logic;
pub mod poll;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use alert::{AlertConfig, AlertState, ButtonTransition, TickOutcome};
pub use animation::Animation;
pub use button::ButtonEdge;
pub use endpoint::{Acknowledgment, EndpointReply, EndpointRequest, Payload};
pub use indicator::LedIndicator;
pub use logic::scale_brightness;
pub use poll::{Annunciator, IterationReport};
pub use traits::{Boundary, ButtonInput, Clock, Delay, Indicator, LedError, SmartLedWriter};
pub use types::{AlertOutcome, AlertStatus, IndicatorCommand};
