//! The growable sequence container.
//!
//! [`GrowVec`] keeps its elements in one boxed slice. Slots past the live
//! length hold `T::default()` placeholders, so growing is a matter of
//! allocating a larger slice of placeholders and swapping the live prefix
//! across. The old slice is dropped only after the swap.

use std::fmt;
use std::iter;
use std::mem;

use crate::config::GrowthConfig;
use crate::error::GrowVecError;
use crate::observer::{GrowEvent, LogObserver, Observer, RejectEvent};

/// A contiguous, indexable sequence that grows on demand.
///
/// When an append or insertion needs more room than is available, the
/// buffer is replaced by one of `growth_factor * (len + additional)` slots.
/// Headroom is therefore proportional to the largest single request, and
/// N appends cost O(N) in total.
///
/// `Clone` is a deep copy with the same capacity. Use [`take`](Self::take)
/// to move the buffer out and leave the source empty.
#[derive(Clone)]
pub struct GrowVec<T, O = LogObserver> {
    /// Backing storage. `None` iff capacity is zero.
    buffer: Option<Box<[T]>>,
    /// Number of live elements at the front of `buffer`.
    len: usize,
    growth_factor: usize,
    observer: O,
}

impl<T> GrowVec<T, LogObserver> {
    /// Create an empty container without allocating.
    pub fn new() -> Self {
        Self::with_observer(LogObserver)
    }
}

impl<T: Default> GrowVec<T, LogObserver> {
    /// Create an empty container with `capacity` placeholder slots.
    ///
    /// A capacity of zero allocates nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vec = Self::new();
        vec.buffer = placeholders(capacity);
        vec
    }

    /// Create an empty container from a validated [`GrowthConfig`].
    pub fn with_config(config: GrowthConfig) -> Result<Self, GrowVecError> {
        Self::with_config_and_observer(config, LogObserver)
    }

    /// Create a container holding a copy of `items`, in order.
    ///
    /// Capacity is twice the number of items. An empty slice allocates
    /// nothing.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(items.to_vec())
    }
}

impl<T, O: Observer> GrowVec<T, O> {
    /// Create an empty container that reports to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            buffer: None,
            len: 0,
            growth_factor: GrowthConfig::DEFAULT_GROWTH_FACTOR,
            observer,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Total allocated slots, live or not.
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().map_or(0, |buffer| buffer.len())
    }

    /// Returns `true` if there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends that fit before the next reallocation.
    pub fn space_until_resize(&self) -> usize {
        self.capacity() - self.len
    }

    /// Whether a backing buffer is currently allocated.
    pub fn has_storage(&self) -> bool {
        self.buffer.is_some()
    }

    /// Multiplier applied to demand when the buffer overflows.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Memory usage of the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity() * mem::size_of::<T>()
    }

    /// Borrow the element at `index`, or `None` if it is not live.
    pub fn get_ref(&self, index: usize) -> Option<&T> {
        self.live().get(index)
    }

    /// The observer receiving this container's diagnostics.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Move the contents out, leaving `self` empty with no storage.
    ///
    /// The returned container keeps the growth factor and a clone of the
    /// observer.
    pub fn take(&mut self) -> Self
    where
        O: Clone,
    {
        Self {
            buffer: self.buffer.take(),
            len: mem::take(&mut self.len),
            growth_factor: self.growth_factor,
            observer: self.observer.clone(),
        }
    }

    fn slots(&self) -> &[T] {
        self.buffer.as_deref().unwrap_or_default()
    }

    fn slots_mut(&mut self) -> &mut [T] {
        self.buffer.as_deref_mut().unwrap_or_default()
    }

    fn live(&self) -> &[T] {
        &self.slots()[..self.len]
    }
}

impl<T: Default, O: Observer> GrowVec<T, O> {
    /// Create an empty container from a validated config, reporting to
    /// `observer`.
    pub fn with_config_and_observer(
        config: GrowthConfig,
        observer: O,
    ) -> Result<Self, GrowVecError> {
        config.validate()?;
        let mut vec = Self::with_observer(observer);
        vec.growth_factor = config.growth_factor;
        vec.buffer = placeholders(config.initial_capacity);
        Ok(vec)
    }

    /// Ensure room for `additional` more elements.
    ///
    /// No-op if `len + additional <= capacity`. Otherwise the buffer is
    /// replaced by one of `growth_factor * (len + additional)` slots, with
    /// the live elements at the same indices. `len` is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        let required = self
            .len
            .checked_add(additional)
            .unwrap_or_else(|| capacity_overflow());
        let old_capacity = self.capacity();
        if required <= old_capacity {
            return;
        }

        let new_capacity = required
            .checked_mul(self.growth_factor)
            .unwrap_or_else(|| capacity_overflow());
        let mut fresh: Box<[T]> = iter::repeat_with(T::default)
            .take(new_capacity)
            .collect();
        let len = self.len;
        fresh[..len].swap_with_slice(&mut self.slots_mut()[..len]);
        self.buffer = Some(fresh);

        self.observer.grown(GrowEvent {
            old_capacity,
            new_capacity,
            len,
            additional,
        });
    }

    /// Append `value` after the last live element, growing if full.
    pub fn append(&mut self, value: T) {
        self.reserve(1);
        let len = self.len;
        self.slots_mut()[len] = value;
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index` must address a live element; appending at `len` is not
    /// accepted here (use [`append`](Self::append)). On rejection the
    /// container is unchanged and the observer is notified.
    pub fn append_at(&mut self, value: T, index: usize) -> Result<(), GrowVecError> {
        let len = self.len;
        if index >= len {
            self.observer.rejected(RejectEvent {
                operation: "append_at",
                index,
                len,
            });
            return Err(GrowVecError::IndexOutOfBounds { index, len });
        }

        self.reserve(1);
        let slots = self.slots_mut();
        // The placeholder at `len` walks down to `index`.
        for i in (index..len).rev() {
            slots.swap(i, i + 1);
        }
        slots[index] = value;
        self.len += 1;
        Ok(())
    }

    fn from_vec_with(items: Vec<T>, growth_factor: usize, observer: O) -> Self {
        let len = items.len();
        let capacity = len
            .checked_mul(growth_factor)
            .unwrap_or_else(|| capacity_overflow());
        let buffer = (capacity > 0).then(|| {
            let mut slots = items;
            slots.resize_with(capacity, T::default);
            slots.into_boxed_slice()
        });
        Self {
            buffer,
            len,
            growth_factor,
            observer,
        }
    }
}

impl<T: Clone, O: Observer> GrowVec<T, O> {
    /// A copy of the element at `index`, or `None` if it is not live.
    pub fn get(&self, index: usize) -> Option<T> {
        self.get_ref(index).cloned()
    }
}

impl<T: fmt::Debug, O: Observer> GrowVec<T, O> {
    /// Report every live element to the observer, in index order.
    pub fn dump(&self) {
        for (index, value) in self.live().iter().enumerate() {
            self.observer.element(index, value);
        }
    }
}

impl<T, O: Observer + Default> Default for GrowVec<T, O> {
    fn default() -> Self {
        Self::with_observer(O::default())
    }
}

impl<T: Default> From<Vec<T>> for GrowVec<T, LogObserver> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec_with(items, GrowthConfig::DEFAULT_GROWTH_FACTOR, LogObserver)
    }
}

impl<T: Default, const N: usize> From<[T; N]> for GrowVec<T, LogObserver> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T: Default + Clone> From<&[T]> for GrowVec<T, LogObserver> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T: fmt::Debug, O: Observer> fmt::Debug for GrowVec<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("elements", &self.live())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Equality compares live elements only.
impl<T: PartialEq, O: Observer, P: Observer> PartialEq<GrowVec<T, P>> for GrowVec<T, O> {
    fn eq(&self, other: &GrowVec<T, P>) -> bool {
        self.live() == other.live()
    }
}

impl<T: Eq, O: Observer> Eq for GrowVec<T, O> {}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

fn placeholders<T: Default>(capacity: usize) -> Option<Box<[T]>> {
    (capacity > 0).then(|| iter::repeat_with(T::default).take(capacity).collect())
}
