// HTTP Server Task - POST /alert und GET /status
use alert_core::endpoint::{Body, payload_from_bytes};
use alloc::vec::Vec;
use defmt::{Debug2Format, debug, error, info, warn};
use embassy_net::Stack;
use embassy_net::tcp::{AcceptError, TcpSocket};
use embassy_time::{Duration, Timer, with_timeout};
use picoserve::io::Write;
use picoserve::response::{Content, IntoResponse, Response, StatusCode};
use picoserve::routing::{get, post};

use crate::config::*;
use crate::tasks::wifi::wait_for_address;
use crate::{EndpointReplySignal, EndpointRequest, EndpointRequestSender};

/// HTTP Server Task
///
/// Dieser Task stellt die Alarm-Schnittstelle bereit:
/// - `POST /alert`: Alarm-Meldung, Body wird als Payload zurückgegeben
/// - `GET /status`: aktueller Status als Text
///
/// Der Task verändert den Alarm-Zustand nie selbst. Jede Anfrage geht über
/// den Channel an die Poll-Loop und wartet dort, bis eine laufende Animation
/// beendet ist.
///
/// Der Accept-Loop läuft hier statt in picoserve, damit ein Listener-Fehler
/// (z.B. Port nicht bindbar) nach `RESTART_DELAY_SECS` das komplette Gerät
/// neu startet.
///
/// # Parameter
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `requests`: Channel Sender für Anfragen an die Poll-Loop
/// - `replies`: Signal mit der Antwort der Poll-Loop
#[embassy_executor::task]
pub async fn http_server_task(
    stack: &'static Stack<'static>,
    requests: EndpointRequestSender,
    replies: &'static EndpointReplySignal,
) {
    info!("HTTP: Server task started, waiting for network...");
    let address = wait_for_address(stack).await;

    // Router-Konfiguration
    let app = picoserve::Router::new()
        .route(
            "/alert",
            post(move |body: Vec<u8>| async move {
                let (payload, truncated) = payload_from_bytes(&body);
                if truncated {
                    warn!(
                        "HTTP: Alert payload truncated from {} to {} bytes",
                        body.len(),
                        payload.len()
                    );
                }
                info!("HTTP: Received alert message: {=[u8]:a}", &payload[..]);
                forward(requests, replies, EndpointRequest::Notify(payload)).await
            }),
        )
        .route(
            "/status",
            get(move || async move {
                info!("HTTP: Received status request");
                forward(requests, replies, EndpointRequest::QueryStatus).await
            }),
        );

    // Server-Konfiguration
    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(5)),
        read_request: Some(Duration::from_secs(1)),
        write: Some(Duration::from_secs(1)),
        persistent_start_read_request: Some(Duration::from_secs(5)),
    });

    // HTTP-Buffer für Requests/Responses
    let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];

    // TCP-Buffers für Socket
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    info!(
        "HTTP: Listening on http://{}:{}",
        Debug2Format(&address),
        HTTP_PORT
    );

    loop {
        let mut socket = TcpSocket::new(*stack, &mut rx_buffer, &mut tx_buffer);

        if let Err(e) = socket.accept(HTTP_PORT).await {
            if accept_is_fatal(&e) {
                error!("HTTP: Listener failed: {}", Debug2Format(&e));
                break;
            }
            warn!("HTTP: Accept aborted: {}", Debug2Format(&e));
            continue;
        }

        debug!(
            "HTTP: Connection from {}",
            Debug2Format(&socket.remote_endpoint())
        );

        match picoserve::Server::new(&app, &config, &mut http_buffer)
            .serve(socket)
            .await
        {
            Ok(_) => debug!("HTTP: Connection closed"),
            Err(e) => warn!("HTTP: Connection error: {}", Debug2Format(&e)),
        }
    }

    // Kein Teilbetrieb: ohne Listener wird das Gerät neu gestartet
    error!(
        "HTTP: Listener stopped, restarting in {}s...",
        RESTART_DELAY_SECS
    );
    Timer::after(Duration::from_secs(RESTART_DELAY_SECS)).await;
    esp_hal::system::software_reset()
}

/// Listener-Fehler (Port/Socket-Zustand) beenden den Server, ein Reset der
/// Gegenstelle nur den einen Verbindungsversuch
fn accept_is_fatal(error: &AcceptError) -> bool {
    match error {
        AcceptError::InvalidPort | AcceptError::InvalidState => true,
        AcceptError::ConnectionReset => false,
    }
}

/// Text-Antwort aus rohen Bytes
///
/// Die Payload wird byte-genau zurückgegeben, auch wenn sie kein UTF-8 ist.
struct PlainText(Body);

impl Content for PlainText {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn content_length(&self) -> usize {
        self.0.len()
    }

    async fn write_content<W: Write>(self, mut writer: W) -> Result<(), W::Error> {
        writer.write_all(&self.0).await
    }
}

/// Reicht eine Anfrage an die Poll-Loop weiter und wartet auf die Antwort
///
/// Antwortet mit 503, wenn die Poll-Loop nicht rechtzeitig antwortet.
async fn forward(
    requests: EndpointRequestSender,
    replies: &'static EndpointReplySignal,
    request: EndpointRequest,
) -> impl IntoResponse {
    // Verspätete Antwort einer abgebrochenen Anfrage verwerfen
    replies.reset();
    requests.send(request).await;

    match with_timeout(
        Duration::from_millis(ENDPOINT_REPLY_TIMEOUT_MS),
        replies.wait(),
    )
    .await
    {
        Ok(reply) => Response::new(StatusCode::OK, PlainText(reply.body())),
        Err(_) => {
            warn!("HTTP: No reply from alert loop, sending HTTP 503");
            let mut body = Body::new();
            let _ = body.extend_from_slice(b"Service Unavailable: alert loop busy");
            Response::new(StatusCode::new(503), PlainText(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_errors_are_fatal() {
        assert!(accept_is_fatal(&AcceptError::InvalidPort));
        assert!(accept_is_fatal(&AcceptError::InvalidState));
    }

    #[test]
    fn test_connection_reset_keeps_listening() {
        assert!(!accept_is_fatal(&AcceptError::ConnectionReset));
    }
}
