//! Alarm-Endpoint: `notify` und `query_status`
//!
//! Übersetzt die beiden HTTP-Routen in Aufrufe des Zustandsautomaten und
//! erzeugt die Text-Antworten.

use heapless::Vec;

use crate::alert::AlertState;
use crate::types::{AlertOutcome, AlertStatus};

/// Maximale Länge einer Alarm-Payload in Bytes
///
/// Längere Bodies werden abgeschnitten; das Echo in der Antwort endet dann
/// nach `MAX_PAYLOAD_LEN` Bytes.
pub const MAX_PAYLOAD_LEN: usize = 512;

/// Maximale Länge eines Antwort-Bodys in Bytes
pub const MAX_BODY_LEN: usize = MAX_PAYLOAD_LEN + 32;

/// Opaque Payload einer Alarm-Meldung
pub type Payload = Vec<u8, MAX_PAYLOAD_LEN>;

/// Antwort-Body als Bytes (Payload wird unverändert zurückgegeben)
pub type Body = Vec<u8, MAX_BODY_LEN>;

/// Anfrage vom HTTP-Server an die Poll-Loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointRequest {
    /// `POST /alert`
    Notify(Payload),
    /// `GET /status`
    QueryStatus,
}

/// Quittung für eine Alarm-Meldung inklusive Payload-Echo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub outcome: AlertOutcome,
    pub payload: Payload,
}

impl Acknowledgment {
    /// `"Alert received! (<payload>)"` bzw. `"Alert ignored. (<payload>)"`
    ///
    /// Die Payload steht byte-genau im Body, ohne UTF-8-Prüfung.
    pub fn body(&self) -> Body {
        let mut body = Body::new();
        // MAX_BODY_LEN deckt Präfix + Klammern + maximale Payload ab
        let _ = body.extend_from_slice(self.outcome.response_prefix().as_bytes());
        let _ = body.extend_from_slice(b" (");
        let _ = body.extend_from_slice(&self.payload);
        let _ = body.extend_from_slice(b")");
        body
    }
}

/// Antwort der Poll-Loop an den HTTP-Server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointReply {
    Acknowledged(Acknowledgment),
    Status(AlertStatus),
}

impl EndpointReply {
    pub fn body(&self) -> Body {
        match self {
            EndpointReply::Acknowledged(ack) => ack.body(),
            EndpointReply::Status(status) => {
                let mut body = Body::new();
                let _ = body.extend_from_slice(status.status_text().as_bytes());
                body
            }
        }
    }
}

/// Wendet eine Alarm-Meldung an (siehe `AlertState::notify`)
pub fn notify(state: &mut AlertState, payload: Payload, now_ms: u64) -> Acknowledgment {
    Acknowledgment {
        outcome: state.notify(now_ms),
        payload,
    }
}

/// Aktueller Status als Text, ohne Seiteneffekte
pub fn query_status(state: &AlertState) -> &'static str {
    state.status().status_text()
}

/// Verarbeitet eine Anfrage vollständig
pub fn handle(state: &mut AlertState, request: EndpointRequest, now_ms: u64) -> EndpointReply {
    match request {
        EndpointRequest::Notify(payload) => {
            EndpointReply::Acknowledged(notify(state, payload, now_ms))
        }
        EndpointRequest::QueryStatus => EndpointReply::Status(state.status()),
    }
}

/// Erstellt eine Payload aus rohen Bytes
///
/// Die Bytes bleiben unverändert (auch ungültiges UTF-8). Nur was über
/// `MAX_PAYLOAD_LEN` hinausgeht, fällt weg; der zweite Wert meldet das.
pub fn payload_from_bytes(bytes: &[u8]) -> (Payload, bool) {
    let len = bytes.len().min(MAX_PAYLOAD_LEN);
    let mut payload = Payload::new();
    let _ = payload.extend_from_slice(&bytes[..len]);
    (payload, len < bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertConfig;

    fn payload(text: &str) -> Payload {
        payload_from_bytes(text.as_bytes()).0
    }

    #[test]
    fn test_ignored_body_echoes_payload() {
        let mut state = AlertState::new(AlertConfig::default(), 0);
        let ack = notify(&mut state, payload("fire"), 0);
        assert_eq!(ack.outcome, AlertOutcome::Ignored);
        assert_eq!(ack.body().as_slice(), b"Alert ignored. (fire)");
    }

    #[test]
    fn test_received_body_echoes_payload() {
        let mut state = AlertState::new(AlertConfig::default(), 0);
        state.press_button();
        let ack = notify(&mut state, payload("fire"), 0);
        assert_eq!(ack.body().as_slice(), b"Alert received! (fire)");
    }

    #[test]
    fn test_binary_payload_is_echoed_verbatim() {
        let mut state = AlertState::new(AlertConfig::default(), 0);
        let (raw, _) = payload_from_bytes(&[0xff, 0x00, b')']);
        let ack = notify(&mut state, raw, 0);
        assert_eq!(ack.body().as_slice(), b"Alert ignored. (\xff\x00))");
    }

    #[test]
    fn test_query_status_has_no_side_effects() {
        let state = AlertState::new(AlertConfig::default(), 0);
        assert_eq!(query_status(&state), "Status: OFF");
        assert_eq!(query_status(&state), "Status: OFF");
        assert!(!state.is_triggered());
    }

    #[test]
    fn test_payload_truncation() {
        let bytes = [b'x'; MAX_PAYLOAD_LEN + 10];
        let (payload, truncated) = payload_from_bytes(&bytes);
        assert!(truncated);
        assert_eq!(payload.len(), MAX_PAYLOAD_LEN);

        let (payload, truncated) = payload_from_bytes(b"smoke");
        assert!(!truncated);
        assert_eq!(payload.as_slice(), b"smoke");
    }

    #[test]
    fn test_maximal_payload_fits_body() {
        let mut state = AlertState::new(AlertConfig::default(), 0);
        state.press_button();
        let (raw, _) = payload_from_bytes(&[b'y'; MAX_PAYLOAD_LEN]);
        let body = notify(&mut state, raw, 0).body();
        assert!(body.ends_with(b"y)"));
        assert_eq!(body.len(), "Alert received! (".len() + MAX_PAYLOAD_LEN + 1);
    }
}
