//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

/// Skaliert eine Farbe mit einem Helligkeitsfaktor (0.0 - 1.0)
///
/// Werte außerhalb des Bereichs werden begrenzt.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use alert_core::scale_brightness;
/// let orange = RGB8 { r: 255, g: 165, b: 0 };
/// assert_eq!(scale_brightness(orange, 0.5), RGB8 { r: 128, g: 83, b: 0 });
/// ```
pub fn scale_brightness(color: RGB8, brightness: f32) -> RGB8 {
    let factor = brightness.clamp(0.0, 1.0);
    let scale = |channel: u8| (channel as f32 * factor + 0.5) as u8;

    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_brightness_full() {
        let red = RGB8 { r: 255, g: 0, b: 0 };
        assert_eq!(scale_brightness(red, 1.0), red);
    }

    #[test]
    fn test_scale_brightness_zero() {
        let blue = RGB8 { r: 0, g: 0, b: 255 };
        assert_eq!(scale_brightness(blue, 0.0), RGB8 { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_scale_brightness_three_quarters() {
        let green = RGB8 { r: 0, g: 255, b: 0 };
        assert_eq!(scale_brightness(green, 0.75), RGB8 { r: 0, g: 191, b: 0 });
    }

    #[test]
    fn test_scale_brightness_clamped() {
        let white = RGB8 {
            r: 255,
            g: 255,
            b: 255,
        };
        assert_eq!(scale_brightness(white, 2.0), white);
        assert_eq!(scale_brightness(white, -1.0), RGB8 { r: 0, g: 0, b: 0 });
    }
}
