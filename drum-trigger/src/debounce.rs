/// Integrating debouncer: the output only flips after the raw input has
/// held its new level for `threshold` consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    integrator: u8,
    threshold: u8,
    pressed: bool,
}

impl Debouncer {
    pub const fn new(threshold: u8) -> Self {
        Self {
            integrator: 0,
            threshold,
            pressed: false,
        }
    }

    pub fn update(&mut self, raw_pressed: bool) -> bool {
        if raw_pressed {
            self.integrator = self.integrator.saturating_add(1).min(self.threshold);
        } else {
            self.integrator = self.integrator.saturating_sub(1);
        }

        if self.integrator == self.threshold {
            self.pressed = true;
        } else if self.integrator == 0 {
            self.pressed = false;
        }

        self.pressed
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}
