//! Test utilities for growvec development.
//!
//! Provides [`RecordingObserver`], an [`Observer`] that captures every
//! diagnostic event for later assertions, and a few fixtures for building
//! containers in known states.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::fmt;

use growvec::{GrowEvent, GrowVec, NullObserver, Observer, RejectEvent};

/// A single captured diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Grown(GrowEvent),
    Rejected(RejectEvent),
    /// Dumped element, rendered with `{:?}`.
    Element { index: usize, rendered: String },
}

/// Observer that records every event in arrival order.
///
/// Pass by reference (`GrowVec::with_observer(&recorder)`) to keep
/// access to the recorder while the container is alive, or by value and
/// read it back through [`GrowVec::observer`].
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<Event>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Only the growth events.
    pub fn grow_events(&self) -> Vec<GrowEvent> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Grown(g) => Some(*g),
                _ => None,
            })
            .collect()
    }

    /// Only the rejection events.
    pub fn reject_events(&self) -> Vec<RejectEvent> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Rejected(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    /// Dumped elements as `(index, rendered)` pairs.
    pub fn dumped(&self) -> Vec<(usize, String)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Element { index, rendered } => Some((*index, rendered.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Observer for RecordingObserver {
    fn grown(&self, event: GrowEvent) {
        self.events.borrow_mut().push(Event::Grown(event));
    }

    fn rejected(&self, event: RejectEvent) {
        self.events.borrow_mut().push(Event::Rejected(event));
    }

    fn element(&self, index: usize, value: &dyn fmt::Debug) {
        self.events.borrow_mut().push(Event::Element {
            index,
            rendered: format!("{value:?}"),
        });
    }
}

/// Read every live element back by index.
pub fn contents<T: Clone, O: Observer>(vec: &GrowVec<T, O>) -> Vec<T> {
    (0..vec.len()).filter_map(|i| vec.get(i)).collect()
}

/// A container holding `0..n`, built by repeated appends.
pub fn appended_range(n: u32) -> GrowVec<u32, NullObserver> {
    let mut vec = GrowVec::with_observer(NullObserver);
    for i in 0..n {
        vec.append(i);
    }
    vec
}

/// A container holding `values` with no spare capacity.
pub fn full<T: Default + Clone>(values: &[T]) -> GrowVec<T, NullObserver> {
    let config = growvec::GrowthConfig::new().with_initial_capacity(values.len());
    let mut vec = match GrowVec::with_config_and_observer(config, NullObserver) {
        Ok(vec) => vec,
        Err(e) => panic!("default growth config rejected: {e}"),
    };
    for value in values {
        vec.append(value.clone());
    }
    vec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_starts_empty() {
        let recorder = RecordingObserver::new();
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn recorder_captures_growth_through_reference() {
        let recorder = RecordingObserver::new();
        let mut vec = GrowVec::with_observer(&recorder);
        vec.append(1u8);
        assert_eq!(recorder.grow_events().len(), 1);
        recorder.clear();
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn full_fixture_has_no_headroom() {
        let vec = full(&[1, 2, 3]);
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.space_until_resize(), 0);
    }

    #[test]
    fn appended_range_fixture() {
        let vec = appended_range(5);
        assert_eq!(contents(&vec), vec![0, 1, 2, 3, 4]);
    }
}
