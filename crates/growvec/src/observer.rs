//! Injectable diagnostics for container activity.
//!
//! A [`GrowVec`](crate::GrowVec) reports reallocations, rejected
//! insertions and element dumps to an [`Observer`] it owns. The default,
//! [`LogObserver`], forwards to the `log` facade under the `growvec`
//! target; [`NullObserver`] discards everything. Tests substitute a
//! recording observer to assert on the event stream.

use std::fmt;

/// Log target used by [`LogObserver`].
pub const LOG_TARGET: &str = "growvec";

/// A buffer reallocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowEvent {
    /// Capacity before the reallocation (0 if there was no buffer).
    pub old_capacity: usize,
    /// Capacity of the freshly allocated buffer.
    pub new_capacity: usize,
    /// Live elements moved into the new buffer.
    pub len: usize,
    /// Additional slots requested by the operation that triggered growth.
    pub additional: usize,
}

/// A mutation that was refused because its index was out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RejectEvent {
    /// Name of the refused operation.
    pub operation: &'static str,
    /// The offending index.
    pub index: usize,
    /// Live element count at the time of the call.
    pub len: usize,
}

/// Receiver for container diagnostics.
///
/// Every method has a no-op default, so implementors override only the
/// events they care about. Methods take `&self`; observers that record
/// state use interior mutability.
pub trait Observer {
    /// Called after the buffer has been replaced by a larger one.
    fn grown(&self, event: GrowEvent) {
        let _ = event;
    }

    /// Called when an insertion is refused.
    fn rejected(&self, event: RejectEvent) {
        let _ = event;
    }

    /// Called once per live element by [`GrowVec::dump`](crate::GrowVec::dump).
    fn element(&self, index: usize, value: &dyn fmt::Debug) {
        let _ = (index, value);
    }
}

impl<O: Observer + ?Sized> Observer for &O {
    fn grown(&self, event: GrowEvent) {
        (**self).grown(event);
    }

    fn rejected(&self, event: RejectEvent) {
        (**self).rejected(event);
    }

    fn element(&self, index: usize, value: &dyn fmt::Debug) {
        (**self).element(index, value);
    }
}

/// Forwards diagnostics to the `log` facade.
///
/// Growth and dumps are emitted at `debug`, rejections at `warn`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn grown(&self, event: GrowEvent) {
        log::debug!(
            target: LOG_TARGET,
            "grew buffer {} -> {} slots ({} live, {} requested)",
            event.old_capacity,
            event.new_capacity,
            event.len,
            event.additional,
        );
    }

    fn rejected(&self, event: RejectEvent) {
        log::warn!(
            target: LOG_TARGET,
            "{} rejected: index {} out of bounds for length {}",
            event.operation,
            event.index,
            event.len,
        );
    }

    fn element(&self, index: usize, value: &dyn fmt::Debug) {
        log::debug!(target: LOG_TARGET, "element at {index} is {value:?}");
    }
}

/// Discards all diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullObserver;

impl Observer for NullObserver {}
