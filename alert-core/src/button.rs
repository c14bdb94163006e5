//! Flankenerkennung mit Entprellung für den Taster
//!
//! Die Poll-Loop liest den Pegel in jeder Iteration. Ein gehaltener Taster
//! darf trotzdem nur genau einen Übergang auslösen.

/// Standard-Entprellzeit in Millisekunden
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// Erkennt die Drück-Flanke (losgelassen → gedrückt)
#[derive(Debug, Clone, Copy)]
pub struct ButtonEdge {
    debounce_ms: u64,
    was_pressed: bool,
    last_change_ms: Option<u64>,
}

impl ButtonEdge {
    pub const fn new(debounce_ms: u64) -> Self {
        Self {
            debounce_ms,
            was_pressed: false,
            last_change_ms: None,
        }
    }

    /// Übernimmt einen neuen Messwert
    ///
    /// Gibt `true` nur in der Iteration zurück, in der ein Drücken erkannt wird.
    /// Pegelwechsel innerhalb der Entprellzeit nach dem letzten akzeptierten
    /// Wechsel werden verworfen.
    pub fn update(&mut self, pressed: bool, now_ms: u64) -> bool {
        if pressed == self.was_pressed {
            return false;
        }

        if let Some(last) = self.last_change_ms {
            if now_ms.saturating_sub(last) < self.debounce_ms {
                return false;
            }
        }

        self.was_pressed = pressed;
        self.last_change_ms = Some(now_ms);
        pressed
    }

    pub fn is_pressed(&self) -> bool {
        self.was_pressed
    }
}

impl Default for ButtonEdge {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once() {
        let mut edge = ButtonEdge::default();
        assert!(edge.update(true, 0));
        assert!(!edge.update(true, 10));
        assert!(!edge.update(true, 5_000));
    }

    #[test]
    fn test_release_does_not_fire() {
        let mut edge = ButtonEdge::default();
        assert!(edge.update(true, 0));
        assert!(!edge.update(false, 100));
        assert!(!edge.is_pressed());
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut edge = ButtonEdge::default();
        assert!(edge.update(true, 0));
        // Prellen: kurz offen, wieder zu
        assert!(!edge.update(false, 5));
        assert!(!edge.update(true, 10));
        assert!(!edge.update(false, 20));
        assert!(edge.is_pressed());
    }

    #[test]
    fn test_second_press_after_release() {
        let mut edge = ButtonEdge::default();
        assert!(edge.update(true, 0));
        assert!(!edge.update(false, 200));
        assert!(edge.update(true, 400));
    }
}
