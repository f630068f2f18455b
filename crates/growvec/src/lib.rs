//! Contiguous growable sequence container.
//!
//! [`GrowVec`] owns a single fixed-size buffer that is reallocated
//! wholesale when an append or insertion would overflow it. The new
//! buffer is sized relative to demand (`growth_factor × (len + additional)`),
//! which keeps the total cost of N appends at O(N).
//!
//! # Architecture
//!
//! ```text
//! GrowVec<T, O>
//! ├── Option<Box<[T]>>   (None iff capacity == 0)
//! │   ├── [0, len)        live elements
//! │   └── [len, capacity) T::default() placeholders
//! ├── growth_factor      (from GrowthConfig, default 2)
//! └── O: Observer        (growth / rejection / dump diagnostics)
//! ```
//!
//! # Failure model
//!
//! Bad indices never panic. Out-of-range reads return `None`; out-of-range
//! insertions return [`GrowVecError::IndexOutOfBounds`] and leave the
//! container untouched. Allocation failure is fatal, as it is for `Vec`.
//!
//! # Safety
//!
//! Placeholder slots are always initialised with `T::default()`, so the
//! crate needs no `MaybeUninit` and no `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
mod macros;
pub mod observer;
pub mod vec;

// Public re-exports for the primary API surface.
pub use config::GrowthConfig;
pub use error::GrowVecError;
pub use observer::{GrowEvent, LogObserver, NullObserver, Observer, RejectEvent};
pub use vec::GrowVec;
