use crate::{DisplayGateway, LCD_LINE_LEN, LINE1_START_ADDR, LINE2_START_ADDR};

const LINE_LEN: usize = LCD_LINE_LEN as usize;
const BLANK: u8 = b' ';

/// In-memory image of a two line character LCD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterLcd {
    lines: [[u8; LINE_LEN]; 2],
    dirty: [bool; 2],
}

impl CharacterLcd {
    pub const fn new() -> Self {
        Self {
            lines: [[BLANK; LINE_LEN]; 2],
            dirty: [false; 2],
        }
    }

    pub fn line(&self, line: usize) -> &[u8; LINE_LEN] {
        &self.lines[line]
    }

    /// Returns the index of a line changed since the last call, if any.
    pub fn take_dirty(&mut self) -> Option<usize> {
        let line = self.dirty.iter().position(|dirty| *dirty)?;
        self.dirty[line] = false;
        Some(line)
    }

    fn locate(address: u8) -> Option<(usize, usize)> {
        [LINE1_START_ADDR, LINE2_START_ADDR]
            .iter()
            .enumerate()
            .find_map(|(line, start)| {
                let column = address.checked_sub(*start)? as usize;
                (column < LINE_LEN).then_some((line, column))
            })
    }

    fn fill(&mut self, start: u8, bytes: impl Iterator<Item = u8>) {
        let Some((line, column)) = Self::locate(start) else {
            return;
        };

        for (cell, byte) in self.lines[line][column..].iter_mut().zip(bytes) {
            *cell = byte;
        }
        self.dirty[line] = true;
    }
}

impl Default for CharacterLcd {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayGateway for CharacterLcd {
    fn clear_region(&mut self, start: u8, len: u8) {
        self.fill(start, core::iter::repeat_n(BLANK, len as usize));
    }

    fn write_text(&mut self, start: u8, text: &[u8]) {
        self.fill(start, text.iter().copied());
    }
}
