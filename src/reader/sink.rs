#![doc = r#"
Diagnostic output for the [`Reader`](super::Reader)

The reader narrates what it is doing (chunk boundaries, every decoded event,
tolerated irregularities) to a [`DiagnosticSink`]. Nothing is printed unless a
sink is supplied; [`NoopSink`] is the default.

With the `tracing` feature, [`TracingSink`] forwards the messages as
`tracing` events at `TRACE` level.
"#]

use core::fmt;

/// Receives trace messages from a reader.
pub trait DiagnosticSink {
    /// Called with the byte offset the reader was at and a formatted message.
    fn trace(&mut self, position: usize, message: fmt::Arguments<'_>);
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    #[inline]
    fn trace(&mut self, _position: usize, _message: fmt::Arguments<'_>) {}
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    #[inline]
    fn trace(&mut self, position: usize, message: fmt::Arguments<'_>) {
        (**self).trace(position, message)
    }
}

/// Emits messages through `tracing`.
#[cfg(feature = "tracing")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl DiagnosticSink for TracingSink {
    fn trace(&mut self, position: usize, message: fmt::Arguments<'_>) {
        tracing::trace!(target: "smfcodec", position, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{
        string::{String, ToString},
        vec::Vec,
    };

    #[derive(Default)]
    struct Collect(Vec<(usize, String)>);

    impl DiagnosticSink for Collect {
        fn trace(&mut self, position: usize, message: fmt::Arguments<'_>) {
            self.0.push((position, message.to_string()));
        }
    }

    fn narrate<S: DiagnosticSink>(mut sink: S) {
        sink.trace(4, format_args!("tag {}", "MThd"));
    }

    #[test]
    fn borrowed_sinks_forward() {
        let mut collect = Collect::default();
        narrate(&mut collect);
        narrate(&mut collect);
        assert_eq!(collect.0.len(), 2);
        assert_eq!(collect.0[0], (4, String::from("tag MThd")));
    }

    #[test]
    fn noop_accepts_anything() {
        narrate(NoopSink);
    }
}
