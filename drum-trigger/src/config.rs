use thiserror::Error;

/// Radio output power presets offered by the link layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxPower {
    Minus20Dbm,
    Minus10Dbm,
    Minus5Dbm,
    ZeroDbm,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkConfigError {
    #[error("channel {0} is outside 0..=7")]
    Channel(u8),
    #[error("device type must be non-zero")]
    DeviceType,
    #[error("transmission type {0} is outside 1..=127")]
    TransmissionType(u8),
    #[error("channel period {0:#06x} is outside 0x0001..=0x7fff")]
    ChannelPeriod(u16),
    #[error("rf frequency offset {0} is outside 0..=99")]
    Frequency(u8),
}

/// Identity and timing of the broadcast channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    pub channel: u8,
    pub serial: u16,
    pub device_type: u8,
    /// The MSB is the pairing bit and must stay clear.
    pub transmission_type: u8,
    /// In units of 1/32768 s.
    pub channel_period: u16,
    /// Offset in MHz above 2400 MHz.
    pub rf_frequency: u8,
    pub tx_power: TxPower,
}

impl LinkConfig {
    const PERIOD_TICKS_PER_SECOND: u64 = 32_768;

    pub const fn serial_lo(&self) -> u8 {
        self.serial.to_le_bytes()[0]
    }

    pub const fn serial_hi(&self) -> u8 {
        self.serial.to_le_bytes()[1]
    }

    pub const fn period_lo(&self) -> u8 {
        self.channel_period.to_le_bytes()[0]
    }

    pub const fn period_hi(&self) -> u8 {
        self.channel_period.to_le_bytes()[1]
    }

    pub const fn period_micros(&self) -> u64 {
        self.channel_period as u64 * 1_000_000 / Self::PERIOD_TICKS_PER_SECOND
    }

    pub fn validate(&self) -> Result<(), LinkConfigError> {
        if self.channel > 7 {
            return Err(LinkConfigError::Channel(self.channel));
        }
        if self.device_type == 0 {
            return Err(LinkConfigError::DeviceType);
        }
        if !(1..=127).contains(&self.transmission_type) {
            return Err(LinkConfigError::TransmissionType(self.transmission_type));
        }
        if !(0x0001..=0x7fff).contains(&self.channel_period) {
            return Err(LinkConfigError::ChannelPeriod(self.channel_period));
        }
        if self.rf_frequency > 99 {
            return Err(LinkConfigError::Frequency(self.rf_frequency));
        }
        Ok(())
    }
}

/// One of the four debounced buttons on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Button0,
    Button1,
    Button2,
    Button3,
}

impl ButtonId {
    pub const ALL: [ButtonId; 4] = [
        ButtonId::Button0,
        ButtonId::Button1,
        ButtonId::Button2,
        ButtonId::Button3,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Prompts {
    pub start: &'static str,
    pub legend: &'static str,
    pub stop: &'static str,
}

/// Everything that distinguishes one trigger broadcaster from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerConfig {
    pub link: LinkConfig,
    /// Buttons feeding payload bytes 0..4, in the order bass, hi-hat, crash, snare.
    pub pads: [ButtonId; 4],
    pub prompts: Prompts,
    /// Hold in `AwaitBegin` until a pad is pressed instead of sampling right away.
    pub await_first_press: bool,
}

impl TriggerConfig {
    pub const DRUMSET: TriggerConfig = TriggerConfig {
        link: LinkConfig {
            channel: 0,
            serial: 0x09ad,
            device_type: 1,
            transmission_type: 1,
            channel_period: 0x0666,
            rf_frequency: 50,
            tx_power: TxPower::ZeroDbm,
        },
        pads: ButtonId::ALL,
        prompts: Prompts {
            start: "Push Button to Start",
            legend: "Bass HiHat Tom Snare",
            stop: "To stop press all",
        },
        await_first_press: false,
    };

    pub const TEMPLATE: TriggerConfig = TriggerConfig {
        prompts: Prompts {
            legend: "BassHiHatCrashSnare",
            ..Self::DRUMSET.prompts
        },
        ..Self::DRUMSET
    };
}
