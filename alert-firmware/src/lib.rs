// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Heap für HTTP-Bodies (picoserve alloc Feature)
extern crate alloc;

// Module
pub mod boundary;
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von alert-core
pub use alert_core::{
    AlertConfig, AlertStatus, Annunciator, ButtonEdge, Clock, EndpointReply, EndpointRequest,
    IterationReport,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;
use embassy_time::Instant;

use crate::config::{
    ACKNOWLEDGE_DURATION_MS, ALERT_TIMEOUT_SECS, ANIMATION_SPEED_MS, ENDPOINT_QUEUE_DEPTH,
};

/// Alarm-Konfiguration aus den Compile-Zeit-Konstanten
pub fn alert_config() -> AlertConfig {
    AlertConfig {
        alert_timeout_ms: ALERT_TIMEOUT_SECS * 1000,
        flash_phase_ms: ANIMATION_SPEED_MS,
        acknowledge_ms: ACKNOWLEDGE_DURATION_MS,
    }
}

/// Monotone Zeitquelle über embassy-time
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Sender<'static, NoopRawMutex, EndpointRequest, 2>
// Nutze:  EndpointRequestSender

/// Channel für Endpoint-Anfragen (HTTP Task → Poll-Loop)
/// - ENDPOINT_QUEUE_DEPTH: Anfragen warten hier während einer Animation
pub type EndpointRequestChannel = Channel<NoopRawMutex, EndpointRequest, ENDPOINT_QUEUE_DEPTH>;

/// Sender für Endpoint-Anfragen (HTTP Task)
pub type EndpointRequestSender =
    Sender<'static, NoopRawMutex, EndpointRequest, ENDPOINT_QUEUE_DEPTH>;

/// Receiver für Endpoint-Anfragen (Poll-Loop)
pub type EndpointRequestReceiver =
    Receiver<'static, NoopRawMutex, EndpointRequest, ENDPOINT_QUEUE_DEPTH>;

/// Signal für die Antwort der Poll-Loop (Poll-Loop → HTTP Task)
pub type EndpointReplySignal = Signal<NoopRawMutex, EndpointReply>;
