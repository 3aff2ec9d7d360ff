#![doc = r#"
Contains all Channel Event types

# Layout
```text
|-----------------|-------------|-------------|
| status 0xSC     | data byte 1 | data byte 2 |
|-----------------|-------------|-------------|
  S: event kind     first        second (absent for
  C: channel 0-15   parameter    program change and
                                 channel after-touch)
```

| S | event               | data                         |
|---|---------------------|------------------------------|
| 8 | Note off            | note, velocity               |
| 9 | Note on             | note, velocity               |
| A | Note after-touch    | note, pressure               |
| B | Controller          | controller number, value     |
| C | Program change      | program                      |
| D | Channel after-touch | pressure                     |
| E | Pitch bend          | low 7 bits, high 7 bits      |

Data bytes are kept as they were read; only pitch bend folds its two
bytes into one 14-bit value.
"#]

use alloc::vec::Vec;
use core::fmt;

#[doc = r#"
A channel event. The channel is the low nibble of the status byte, 0-15.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelEvent {
    /// `0x8C`
    NoteOff {
        /// 0-15
        channel: u8,
        /// Note number
        note: u8,
        /// Release velocity
        velocity: u8,
    },
    /// `0x9C`
    NoteOn {
        /// 0-15
        channel: u8,
        /// Note number
        note: u8,
        /// Attack velocity
        velocity: u8,
    },
    /// `0xAC`
    NoteAfterTouch {
        /// 0-15
        channel: u8,
        /// Note number
        note: u8,
        /// Pressure amount
        pressure: u8,
    },
    /// `0xBC`
    Controller {
        /// 0-15
        channel: u8,
        /// Controller number
        control: u8,
        /// New value
        value: u8,
    },
    /// `0xCC`
    ProgramChange {
        /// 0-15
        channel: u8,
        /// Program number
        program: u8,
    },
    /// `0xDC`
    ChannelAfterTouch {
        /// 0-15
        channel: u8,
        /// Pressure amount
        pressure: u8,
    },
    /// `0xEC`
    PitchBend {
        /// 0-15
        channel: u8,
        /// 14-bit bend, 0x2000 is centred
        value: u16,
    },
}

impl ChannelEvent {
    /// Number of data bytes following `status`, or `None` if `status` is not
    /// a channel status (`0x80`-`0xEF`).
    pub const fn data_len(status: u8) -> Option<usize> {
        match status >> 4 {
            0x8 | 0x9 | 0xA | 0xB | 0xE => Some(2),
            0xC | 0xD => Some(1),
            _ => None,
        }
    }

    /// Build an event from its status byte and data bytes.
    ///
    /// `data` must hold at least [`ChannelEvent::data_len`] bytes; extra bytes
    /// are ignored. Returns `None` for a non-channel status or short data.
    pub fn from_parts(status: u8, data: &[u8]) -> Option<Self> {
        let len = Self::data_len(status)?;
        if data.len() < len {
            return None;
        }
        let channel = status & 0x0F;
        Some(match status >> 4 {
            0x8 => Self::NoteOff {
                channel,
                note: data[0],
                velocity: data[1],
            },
            0x9 => Self::NoteOn {
                channel,
                note: data[0],
                velocity: data[1],
            },
            0xA => Self::NoteAfterTouch {
                channel,
                note: data[0],
                pressure: data[1],
            },
            0xB => Self::Controller {
                channel,
                control: data[0],
                value: data[1],
            },
            0xC => Self::ProgramChange {
                channel,
                program: data[0],
            },
            0xD => Self::ChannelAfterTouch {
                channel,
                pressure: data[0],
            },
            _ => Self::PitchBend {
                channel,
                value: u16::from(data[0] & 0x7F) | (u16::from(data[1] & 0x7F) << 7),
            },
        })
    }

    /// The channel, 0-15.
    pub const fn channel(&self) -> u8 {
        match self {
            Self::NoteOff { channel, .. }
            | Self::NoteOn { channel, .. }
            | Self::NoteAfterTouch { channel, .. }
            | Self::Controller { channel, .. }
            | Self::ProgramChange { channel, .. }
            | Self::ChannelAfterTouch { channel, .. }
            | Self::PitchBend { channel, .. } => *channel & 0x0F,
        }
    }

    /// The status byte: kind in the high nibble, channel in the low.
    pub const fn status(&self) -> u8 {
        let kind = match self {
            Self::NoteOff { .. } => 0x80,
            Self::NoteOn { .. } => 0x90,
            Self::NoteAfterTouch { .. } => 0xA0,
            Self::Controller { .. } => 0xB0,
            Self::ProgramChange { .. } => 0xC0,
            Self::ChannelAfterTouch { .. } => 0xD0,
            Self::PitchBend { .. } => 0xE0,
        };
        kind | self.channel()
    }

    /// Status byte plus data bytes.
    pub const fn encoded_len(&self) -> usize {
        match self {
            Self::ProgramChange { .. } | Self::ChannelAfterTouch { .. } => 2,
            _ => 3,
        }
    }

    /// Append the status byte and data bytes.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.push(self.status());
        match *self {
            Self::NoteOff { note, velocity, .. } | Self::NoteOn { note, velocity, .. } => {
                out.extend_from_slice(&[note, velocity])
            }
            Self::NoteAfterTouch { note, pressure, .. } => out.extend_from_slice(&[note, pressure]),
            Self::Controller { control, value, .. } => out.extend_from_slice(&[control, value]),
            Self::ProgramChange { program, .. } => out.push(program),
            Self::ChannelAfterTouch { pressure, .. } => out.push(pressure),
            Self::PitchBend { value, .. } => {
                out.extend_from_slice(&[(value & 0x7F) as u8, ((value >> 7) & 0x7F) as u8])
            }
        }
    }
}

impl fmt::Display for ChannelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = self.channel();
        match *self {
            Self::NoteOff { note, velocity, .. } => {
                write!(f, "NoteOff channel={channel} note={note} velocity={velocity}")
            }
            Self::NoteOn { note, velocity, .. } => {
                write!(f, "NoteOn channel={channel} note={note} velocity={velocity}")
            }
            Self::NoteAfterTouch { note, pressure, .. } => {
                write!(f, "NoteAfterTouch channel={channel} note={note} pressure={pressure}")
            }
            Self::Controller { control, value, .. } => {
                write!(f, "Controller channel={channel} control={control} value={value}")
            }
            Self::ProgramChange { program, .. } => {
                write!(f, "ProgramChange channel={channel} program={program}")
            }
            Self::ChannelAfterTouch { pressure, .. } => {
                write!(f, "ChannelAfterTouch channel={channel} pressure={pressure}")
            }
            Self::PitchBend { value, .. } => write!(f, "PitchBend channel={channel} value={value}"),
        }
    }
}
