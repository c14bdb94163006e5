// Taster-Eingang über GPIO (active-low mit internem Pull-Up)
use alert_core::ButtonInput;
use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};

/// GPIO-Taster
///
/// Der Pull-Up hält den Pegel auf HIGH, gedrückt zieht der Taster auf GND.
pub struct GpioButton<'a> {
    input: Input<'a>,
}

impl<'a> GpioButton<'a> {
    pub fn new(pin: impl InputPin + 'a) -> Self {
        let input = Input::new(pin, InputConfig::default().with_pull(Pull::Up));
        Self { input }
    }
}

impl ButtonInput for GpioButton<'_> {
    fn is_pressed(&mut self) -> bool {
        self.input.is_low()
    }
}
