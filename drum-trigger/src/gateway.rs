//! Narrow contracts for the services the trigger task polls each tick.
//!
//! All calls are non-blocking: a gateway reports "nothing available" rather
//! than waiting.

use heapless::Vec;

use crate::{BroadcastPayload, ButtonId, LinkConfig};

/// Bytes carried by one inbound data message.
pub const ANT_DATA_BYTES: usize = 8;

pub const LCD_LINE_LEN: u8 = 20;
pub const LINE1_START_ADDR: u8 = 0x00;
pub const LINE2_START_ADDR: u8 = 0x40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkMessageClass {
    Data,
    Tick,
}

/// One message read from the link.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkMessage {
    Data(Vec<u8, ANT_DATA_BYTES>),
    /// The link finished a channel period.
    Tick,
}

impl LinkMessage {
    /// Builds a data message, keeping at most [`ANT_DATA_BYTES`] bytes.
    pub fn data(bytes: &[u8]) -> Self {
        LinkMessage::Data(bytes.iter().take(ANT_DATA_BYTES).copied().collect())
    }

    pub fn class(&self) -> LinkMessageClass {
        match self {
            LinkMessage::Data(_) => LinkMessageClass::Data,
            LinkMessage::Tick => LinkMessageClass::Tick,
        }
    }
}

pub trait LinkGateway {
    type Error: core::fmt::Debug;

    /// Sets the channel up as a master broadcaster. Attempted once per
    /// initialization, never retried.
    fn configure(&mut self, setup: &LinkConfig) -> Result<(), Self::Error>;

    /// Only called after a successful `configure`.
    fn open(&mut self);

    fn try_read(&mut self) -> Option<LinkMessage>;

    /// Fire-and-forget.
    fn queue_broadcast(&mut self, payload: &BroadcastPayload);
}

pub trait ButtonGateway {
    fn is_pressed(&mut self, button: ButtonId) -> bool;
}

pub trait DisplayGateway {
    fn clear_region(&mut self, start: u8, len: u8);
    fn write_text(&mut self, start: u8, text: &[u8]);
}
