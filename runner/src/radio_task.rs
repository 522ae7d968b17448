//! Stand-in for the radio's link layer: paces broadcasts at the channel
//! period and reports each elapsed period as a `Tick` message.

use defmt::trace;
use drum_trigger::{BroadcastPayload, LinkMessage};
use embassy_executor::SpawnToken;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use embassy_time::{Duration, Ticker};

use crate::superloop_task::TRIGGER_CONFIG;

pub const LINK_INBOX_SIZE: usize = 4;
pub const BROADCAST_QUEUE_SIZE: usize = 8;

pub static LINK_INBOX: Channel<CriticalSectionRawMutex, LinkMessage, LINK_INBOX_SIZE> =
    Channel::new();

pub static BROADCAST_QUEUE: Channel<
    CriticalSectionRawMutex,
    BroadcastPayload,
    BROADCAST_QUEUE_SIZE,
> = Channel::new();

pub fn create_task() -> SpawnToken<impl Sized> {
    radio_task(Duration::from_micros(TRIGGER_CONFIG.link.period_micros()))
}

#[embassy_executor::task]
pub async fn radio_task(channel_period: Duration) {
    trace!("Radio: channel period {} us", channel_period.as_micros());

    let receiver = BROADCAST_QUEUE.receiver();
    let sender = LINK_INBOX.sender();
    let mut ticker = Ticker::every(channel_period);

    loop {
        ticker.next().await;

        let mut latest = None;
        while let Ok(payload) = receiver.try_receive() {
            latest = Some(payload);
        }

        if let Some(payload) = latest {
            trace!("Radio: broadcast {=[u8]:x}", payload.as_bytes().as_slice());
        }

        // only fails if full, a missed tick is dropped like on the air
        sender.try_send(LinkMessage::Tick).ok();
    }
}
