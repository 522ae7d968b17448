use embassy_sync::{
    blocking_mutex::raw::RawMutex,
    channel::{Receiver, Sender},
};

use crate::{BroadcastPayload, LinkConfig, LinkConfigError, LinkGateway, LinkMessage};

/// A [`LinkGateway`] backed by a pair of channels: inbound messages from the
/// radio and outbound payloads to it.
pub struct ChannelLink<'ch, M: RawMutex, const INBOX: usize, const OUTBOX: usize> {
    inbox: Receiver<'ch, M, LinkMessage, INBOX>,
    outbox: Sender<'ch, M, BroadcastPayload, OUTBOX>,
    setup: Option<LinkConfig>,
    open: bool,
}

impl<'ch, M: RawMutex, const INBOX: usize, const OUTBOX: usize>
    ChannelLink<'ch, M, INBOX, OUTBOX>
{
    pub fn new(
        inbox: Receiver<'ch, M, LinkMessage, INBOX>,
        outbox: Sender<'ch, M, BroadcastPayload, OUTBOX>,
    ) -> Self {
        Self {
            inbox,
            outbox,
            setup: None,
            open: false,
        }
    }

    pub fn setup(&self) -> Option<&LinkConfig> {
        self.setup.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl<'ch, M: RawMutex, const INBOX: usize, const OUTBOX: usize> LinkGateway
    for ChannelLink<'ch, M, INBOX, OUTBOX>
{
    type Error = LinkConfigError;

    fn configure(&mut self, setup: &LinkConfig) -> Result<(), Self::Error> {
        setup.validate()?;
        self.setup = Some(*setup);
        Ok(())
    }

    fn open(&mut self) {
        self.open = self.setup.is_some();
    }

    fn try_read(&mut self) -> Option<LinkMessage> {
        if !self.open {
            return None;
        }
        self.inbox.try_receive().ok()
    }

    fn queue_broadcast(&mut self, payload: &BroadcastPayload) {
        if self.open {
            // only fails if full, the radio sends the newest payload anyway
            self.outbox.try_send(*payload).ok();
        }
    }
}
