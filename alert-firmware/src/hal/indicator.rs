// Wartezeit für den LedIndicator aus alert-core
use alert_core::Delay;
use embassy_time::Timer;

/// Delay über den embassy-time Timer
///
/// Gibt die CPU während einer Animation an Netzwerk- und HTTP-Task ab.
#[derive(Clone, Copy, Default)]
pub struct EmbassyDelay;

impl Delay for EmbassyDelay {
    async fn delay_ms(&mut self, ms: u64) {
        Timer::after_millis(ms).await;
    }
}
