#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod debounce;
pub mod display;
pub mod gateway;
pub mod link;
mod payload;
mod task;

pub use config::{ButtonId, LinkConfig, LinkConfigError, Prompts, TriggerConfig, TxPower};
pub use gateway::{
    ANT_DATA_BYTES, ButtonGateway, DisplayGateway, LCD_LINE_LEN, LINE1_START_ADDR,
    LINE2_START_ADDR, LinkGateway, LinkMessage, LinkMessageClass,
};
pub use payload::{
    BroadcastPayload, ButtonSnapshot, PAYLOAD_LEN, PRESSED, RELEASED, encode, render_data_line,
};
pub use task::{DrumState, DrumTriggerTask};

#[cfg(test)]
mod test;
