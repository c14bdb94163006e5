// Alarm Task - Poll-Loop mit Zustandsautomat, Taster und LED-Strip
use alert_core::{AlertStatus, Boundary, ButtonInput, Indicator, LedIndicator, TickOutcome};
use defmt::{Format, debug, info, warn};
use embassy_net::Stack;
use embassy_time::Timer;
use esp_hal_smartled::smart_led_buffer;

use crate::boundary::ChannelBoundary;
use crate::config::{BUTTON_DEBOUNCE_MS, LED_BRIGHTNESS, POLL_INTERVAL_MS, RMT_CLOCK_MHZ};
use crate::hal::{EmbassyDelay, GpioButton, RmtLedWriter};
use crate::tasks::wifi::wait_for_address;
use crate::{
    Annunciator, ButtonEdge, Clock, EmbassyClock, EndpointReplySignal, EndpointRequestReceiver,
    IterationReport, alert_config,
};

/// Poll-Loop - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Löscht einmal die Anzeige und iteriert dann endlos:
/// - Anfragen an der Netzwerk-Grenze beantworten
/// - Taster lesen, Übergang quittieren
/// - Latch konsumieren, Heartbeat bzw. Timeout
///
/// Fehler einer Iteration werden geloggt, die nächste Iteration läuft normal.
///
/// # Parameter
/// - `indicator`: Anzeige (LED-Strip oder Mock)
/// - `button`: Taster-Eingang
/// - `boundary`: Netzwerk-Grenze zum HTTP-Task
pub async fn alert_loop_logic<I, B, N>(mut indicator: I, mut button: B, mut boundary: N) -> !
where
    I: Indicator,
    B: ButtonInput,
    N: Boundary,
    N::Error: Format,
{
    let clock = EmbassyClock;
    let mut annunciator = Annunciator::new(
        alert_config(),
        ButtonEdge::new(BUTTON_DEBOUNCE_MS),
        clock.now_ms(),
    );

    annunciator.start(&mut indicator).await;
    info!("Alert: Poll loop running, status {}", annunciator.status());

    loop {
        match annunciator
            .run_iteration(&mut indicator, &mut button, &clock, &mut boundary)
            .await
        {
            Ok(report) => log_report(&report),
            Err(e) => warn!("Alert: Iteration aborted: {}", e),
        }

        // Async Delay: gibt CPU an Netzwerk- und HTTP-Task zurück
        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

fn log_report(report: &IterationReport) {
    if report.requests_served > 0 {
        debug!("Alert: Served {} request(s)", report.requests_served);
    }

    if let Some(transition) = report.button {
        match (transition.from, transition.to) {
            (AlertStatus::Alert, _) => info!("Alert: Reset by button"),
            (_, to) => info!("Alert: Set to {}", to),
        }
    }

    if report.flashed {
        info!("Alert: Triggered");
    }

    match report.tick {
        TickOutcome::Idle => {}
        TickOutcome::Heartbeat { elapsed_ms } => debug!("Alert: ALERT!!! {} ms", elapsed_ms),
        TickOutcome::Decayed { elapsed_ms } => {
            info!("Alert: Timeout after {} ms, back to STANDBY", elapsed_ms)
        }
    }
}

/// Alarm Task - Embassy Task für die Poll-Loop
///
/// Übernimmt die Hardware-Initialisierung und wartet auf die
/// Netzwerk-Adresse. Erst danach läuft die testbare
/// `alert_loop_logic()` Funktion.
///
/// # Parameter
/// - `led_pin`: GPIO8 Peripheral für die LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `button_pin`: GPIO9 Peripheral für den Taster
/// - `stack`: embassy-net Stack (nur zum Warten auf die Adresse)
/// - `requests`: Anfragen vom HTTP-Task
/// - `replies`: Antworten an den HTTP-Task
#[embassy_executor::task]
pub async fn alert_task(
    led_pin: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    button_pin: esp_hal::peripherals::GPIO9<'static>,
    stack: &'static Stack<'static>,
    requests: EndpointRequestReceiver,
    replies: &'static EndpointReplySignal,
) {
    // Buffer für SmartLED Daten erstellen (ganzer Strip)
    let mut rmt_buffer = smart_led_buffer!(crate::config::LED_COUNT);

    // Ohne LED-Strip kein Melder: Start abbrechen (Panic-Handler übernimmt)
    let led = RmtLedWriter::new(led_pin, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)
        .expect("Failed to initialize RMT for LED strip");

    let indicator = LedIndicator::new(led, EmbassyDelay, LED_BRIGHTNESS);
    let button = GpioButton::new(button_pin);
    let boundary = ChannelBoundary::new(requests, replies);

    info!("Alert: Waiting for network before starting poll loop");
    wait_for_address(stack).await;

    alert_loop_logic(indicator, button, boundary).await
}
