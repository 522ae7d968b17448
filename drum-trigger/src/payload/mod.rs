use crate::{ANT_DATA_BYTES, ButtonGateway, ButtonId, LinkMessageClass};

pub const PAYLOAD_LEN: usize = 8;
pub const PRESSED: u8 = 0x01;
pub const RELEASED: u8 = 0x00;

/// Only bytes 5..8 take part in the tick counter; byte 4 never changes.
const COUNTER_BYTES: core::ops::Range<usize> = 5..PAYLOAD_LEN;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSnapshot {
    pub bass: bool,
    pub hi_hat: bool,
    pub crash: bool,
    pub snare: bool,
}

impl ButtonSnapshot {
    /// Queries each pad once, in payload order.
    pub fn sample<B: ButtonGateway>(buttons: &mut B, pads: &[ButtonId; 4]) -> Self {
        let [bass, hi_hat, crash, snare] = pads.map(|pad| buttons.is_pressed(pad));

        Self {
            bass,
            hi_hat,
            crash,
            snare,
        }
    }

    pub fn as_array(&self) -> [bool; 4] {
        [self.bass, self.hi_hat, self.crash, self.snare]
    }

    pub fn any_pressed(&self) -> bool {
        self.as_array().contains(&true)
    }
}

/// The 8 bytes queued to the link every sampled tick.
///
/// Bytes 0..4 are pad flags, bytes 4..8 are reserved / tick counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BroadcastPayload([u8; PAYLOAD_LEN]);

impl BroadcastPayload {
    pub const fn new() -> Self {
        Self([0; PAYLOAD_LEN])
    }

    pub const fn from_bytes(bytes: [u8; PAYLOAD_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PAYLOAD_LEN] {
        &self.0
    }

    fn advance_counter(&mut self) {
        for byte in self.0[COUNTER_BYTES].iter_mut().rev() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }

    fn set_pads(&mut self, buttons: ButtonSnapshot) {
        for (byte, pressed) in self.0.iter_mut().zip(buttons.as_array()) {
            *byte = if pressed { PRESSED } else { RELEASED };
        }
    }
}

pub fn encode(
    buttons: ButtonSnapshot,
    prior: BroadcastPayload,
    message: Option<LinkMessageClass>,
) -> BroadcastPayload {
    let mut payload = prior;

    if message == Some(LinkMessageClass::Tick) {
        payload.advance_counter();
    }
    payload.set_pads(buttons);

    payload
}

/// Text for the second LCD line mirroring an inbound data message.
pub fn render_data_line(data: &[u8]) -> [u8; ANT_DATA_BYTES] {
    let mut line = [b'x'; ANT_DATA_BYTES];

    for (dst, src) in line.iter_mut().zip(data) {
        *dst = *src;
    }

    line
}
