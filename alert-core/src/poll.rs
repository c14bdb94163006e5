//! Eine Iteration der Poll-Loop
//!
//! Reihenfolge pro Iteration:
//! 1. Netzwerk-Grenze bedienen (wartende Anfragen beantworten)
//! 2. Taster lesen, bei Flanke Übergang + Quittung
//! 3. Latch konsumieren (einmaliges Blinken)
//! 4. Im Zustand `Alert`: Heartbeat bzw. Timeout
//!
//! Animationen blockieren die Iteration für ihre volle Dauer. Die Uhr wird
//! deshalb vor jedem Schritt neu gelesen.

use crate::alert::{AlertConfig, AlertState, ButtonTransition, TickOutcome};
use crate::animation::Animation;
use crate::button::ButtonEdge;
use crate::endpoint;
use crate::traits::{Boundary, ButtonInput, Clock, Indicator};
use crate::types::AlertStatus;

/// Was in einer Iteration passiert ist (für Logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationReport {
    pub requests_served: usize,
    pub button: Option<ButtonTransition>,
    pub flashed: bool,
    pub tick: TickOutcome,
}

/// Besitzt den Alarm-Zustand und die Taster-Flankenerkennung
///
/// Einziger Mutator des `AlertState`.
pub struct Annunciator {
    state: AlertState,
    button: ButtonEdge,
}

impl Annunciator {
    pub fn new(config: AlertConfig, button: ButtonEdge, now_ms: u64) -> Self {
        Self {
            state: AlertState::new(config, now_ms),
            button,
        }
    }

    pub fn state(&self) -> &AlertState {
        &self.state
    }

    pub fn status(&self) -> AlertStatus {
        self.state.status()
    }

    /// Einmalig beim Boot: Anzeige löschen
    pub async fn start<I: Indicator>(&self, indicator: &mut I) {
        self.play(indicator, Animation::Clear).await;
    }

    /// Führt genau eine Iteration aus
    ///
    /// Ein Fehler der Netzwerk-Grenze bricht die Iteration ab, bevor die
    /// betroffene Anfrage den Zustand verändert.
    pub async fn run_iteration<I, B, C, N>(
        &mut self,
        indicator: &mut I,
        button: &mut B,
        clock: &C,
        boundary: &mut N,
    ) -> Result<IterationReport, N::Error>
    where
        I: Indicator,
        B: ButtonInput,
        C: Clock,
        N: Boundary,
    {
        let requests_served = self.service_boundary(clock, boundary)?;

        let mut transition = None;
        if self.button.update(button.is_pressed(), clock.now_ms()) {
            let pressed = self.state.press_button();
            self.play(indicator, pressed.animation).await;
            transition = Some(pressed);
        }

        let mut flashed = false;
        if let Some(animation) = self.state.take_trigger() {
            self.play(indicator, animation).await;
            flashed = true;
        }

        let tick = self.state.tick(clock.now_ms());
        if let Some(animation) = tick.animation() {
            self.play(indicator, animation).await;
        }

        Ok(IterationReport {
            requests_served,
            button: transition,
            flashed,
            tick,
        })
    }

    fn service_boundary<C: Clock, N: Boundary>(
        &mut self,
        clock: &C,
        boundary: &mut N,
    ) -> Result<usize, N::Error> {
        let mut served = 0;
        while let Some(request) = boundary.poll()? {
            let reply = endpoint::handle(&mut self.state, request, clock.now_ms());
            boundary.reply(reply)?;
            served += 1;
        }
        Ok(served)
    }

    async fn play<I: Indicator>(&self, indicator: &mut I, animation: Animation) {
        for step in animation.steps(self.state.config()) {
            indicator.show(step).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{EndpointReply, EndpointRequest};
    use crate::types::IndicatorCommand;
    use core::cell::Cell;
    use embassy_futures::block_on;

    struct FixedClock(Cell<u64>);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }
    }

    struct CountingIndicator(usize);

    impl Indicator for CountingIndicator {
        async fn show(&mut self, _command: IndicatorCommand) {
            self.0 += 1;
        }
    }

    struct Released;

    impl ButtonInput for Released {
        fn is_pressed(&mut self) -> bool {
            false
        }
    }

    /// Eine einzelne Status-Anfrage, danach leer
    struct OneStatusQuery {
        pending: bool,
        answered: Option<EndpointReply>,
    }

    impl Boundary for OneStatusQuery {
        type Error = ();

        fn poll(&mut self) -> Result<Option<EndpointRequest>, ()> {
            if self.pending {
                self.pending = false;
                return Ok(Some(EndpointRequest::QueryStatus));
            }
            Ok(None)
        }

        fn reply(&mut self, reply: EndpointReply) -> Result<(), ()> {
            self.answered = Some(reply);
            Ok(())
        }
    }

    #[test]
    fn test_idle_iteration_serves_request_without_animation() {
        let clock = FixedClock(Cell::new(0));
        let mut indicator = CountingIndicator(0);
        let mut boundary = OneStatusQuery {
            pending: true,
            answered: None,
        };
        let mut annunciator = Annunciator::new(AlertConfig::default(), ButtonEdge::default(), 0);

        let report = block_on(annunciator.run_iteration(
            &mut indicator,
            &mut Released,
            &clock,
            &mut boundary,
        ))
        .unwrap();

        assert_eq!(report.requests_served, 1);
        assert_eq!(report.tick, TickOutcome::Idle);
        assert_eq!(indicator.0, 0);
        assert_eq!(
            boundary.answered,
            Some(EndpointReply::Status(AlertStatus::Off))
        );
    }
}
