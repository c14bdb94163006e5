// Netzwerk-Grenze: HTTP-Server ↔ Poll-Loop
//
// Der HTTP-Task legt Anfragen in einen Channel und wartet auf das Reply-Signal.
// Nur die Poll-Loop verändert den Alarm-Zustand.
use alert_core::{Boundary, EndpointReply, EndpointRequest};
use defmt::warn;
use embassy_sync::channel::TryReceiveError;

use crate::{EndpointReplySignal, EndpointRequestReceiver};

/// Fehler an der Netzwerk-Grenze
///
/// Channel und Signal können nicht fehlschlagen, deshalb ohne Varianten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {}

impl defmt::Format for BoundaryError {
    fn format(&self, _fmt: defmt::Formatter) {
        match *self {}
    }
}

/// Boundary über embassy-sync Channel + Signal
pub struct ChannelBoundary {
    requests: EndpointRequestReceiver,
    replies: &'static EndpointReplySignal,
}

impl ChannelBoundary {
    pub fn new(requests: EndpointRequestReceiver, replies: &'static EndpointReplySignal) -> Self {
        Self { requests, replies }
    }
}

impl Boundary for ChannelBoundary {
    type Error = BoundaryError;

    fn poll(&mut self) -> Result<Option<EndpointRequest>, BoundaryError> {
        match self.requests.try_receive() {
            Ok(request) => {
                // Antwort für einen HTTP-Handler, der schon mit 503 aufgegeben hat
                if self.replies.signaled() {
                    warn!("Boundary: Dropping stale reply");
                    self.replies.reset();
                }
                Ok(Some(request))
            }
            Err(TryReceiveError::Empty) => Ok(None),
        }
    }

    fn reply(&mut self, reply: EndpointReply) -> Result<(), BoundaryError> {
        self.replies.signal(reply);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlertStatus, EndpointRequestChannel};
    use alloc::boxed::Box;
    use embassy_sync::signal::Signal;

    #[test]
    fn test_stale_reply_does_not_drop_request() {
        let channel: &'static EndpointRequestChannel =
            Box::leak(Box::new(EndpointRequestChannel::new()));
        let replies: &'static EndpointReplySignal = Box::leak(Box::new(Signal::new()));
        let mut boundary = ChannelBoundary::new(channel.receiver(), replies);

        // Antwort, die niemand mehr abholt
        replies.signal(EndpointReply::Status(AlertStatus::Off));
        channel.try_send(EndpointRequest::QueryStatus).unwrap();

        assert_eq!(boundary.poll(), Ok(Some(EndpointRequest::QueryStatus)));
        assert!(!replies.signaled());
        assert_eq!(boundary.poll(), Ok(None));
    }
}
