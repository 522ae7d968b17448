use defmt::info;
use drum_trigger::{DisplayGateway, display::CharacterLcd};

/// Character LCD image whose changed lines go out over defmt.
pub struct LoggedLcd {
    lcd: CharacterLcd,
}

impl LoggedLcd {
    pub const fn new() -> Self {
        Self {
            lcd: CharacterLcd::new(),
        }
    }

    pub fn flush(&mut self) {
        while let Some(line) = self.lcd.take_dirty() {
            info!("LCD {}: {=[u8]:a}", line + 1, self.lcd.line(line).as_slice());
        }
    }
}

impl DisplayGateway for LoggedLcd {
    fn clear_region(&mut self, start: u8, len: u8) {
        self.lcd.clear_region(start, len);
    }

    fn write_text(&mut self, start: u8, text: &[u8]) {
        self.lcd.write_text(start, text);
    }
}
