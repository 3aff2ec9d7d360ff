#![doc = r#"
Messages shared with the MIDI wire protocol
"#]

pub mod channel;
pub use channel::ChannelEvent;
