// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Alles wird zur Compile-Zeit festgelegt, nichts ist zur Laufzeit änderbar.

// ============================================================================
// LED Konfiguration
// ============================================================================

// Datenleitung des LED-Strips (WS2812/Neopixel): GPIO8, Onboard-LED des DevKits.
// Die Pins sind als Peripheral-Typen in `alert_task` festgelegt.

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 16;

/// Helligkeit als Faktor (0.0 = aus, 1.0 = maximal)
pub const LED_BRIGHTNESS: f32 = 0.75;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Taster Konfiguration
// ============================================================================

// Taster: GPIO9 (BOOT-Taster des DevKits, active-low, interner Pull-Up)

/// Entprellzeit für den Taster in Millisekunden
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

// ============================================================================
// Alarm Konfiguration
// ============================================================================

/// Nach dieser Zeit ohne neue Meldung fällt `Alert` auf `Standby` zurück
pub const ALERT_TIMEOUT_SECS: u64 = 300;

/// Dauer einer Blink-Phase (Blau bzw. Rot) in Millisekunden
/// Größer = langsameres Blinken
pub const ANIMATION_SPEED_MS: u64 = 500;

/// Dauer der Quittungsfarbe nach einem Tasterdruck in Millisekunden
pub const ACKNOWLEDGE_DURATION_MS: u64 = 1000;

/// Pause zwischen zwei Iterationen der Poll-Loop in Millisekunden
pub const POLL_INTERVAL_MS: u64 = 10;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Wartezeit nach fehlgeschlagenem WiFi-Verbindungsversuch
pub const WIFI_RETRY_DELAY_SECS: u64 = 5;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
/// Auch für HTTP-Bodies (picoserve alloc Feature)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// HTTP Port (unverschlüsselt)
pub const HTTP_PORT: u16 = 80;

/// HTTP Buffer-Größe in Bytes
/// Für HTTP Request Headers und Body (Alarm-Payload max. `MAX_PAYLOAD_LEN`)
pub const HTTP_BUFFER_SIZE: usize = 1024;

// Eine volle Payload plus Header muss in den HTTP-Buffer passen
const _: () = assert!(alert_core::endpoint::MAX_PAYLOAD_LEN * 2 <= HTTP_BUFFER_SIZE);

/// TCP RX Buffer-Größe in Bytes
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// Maximale Wartezeit des HTTP-Handlers auf die Poll-Loop in Millisekunden
/// Muss länger sein als die längste Animationsfolge einer Iteration
pub const ENDPOINT_REPLY_TIMEOUT_MS: u64 = 5000;

/// Anzahl wartender Anfragen zwischen HTTP-Server und Poll-Loop
pub const ENDPOINT_QUEUE_DEPTH: usize = 2;

/// Wartezeit vor dem Neustart, wenn der Listener nicht läuft
pub const RESTART_DELAY_SECS: u64 = 5;
