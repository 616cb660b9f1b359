//! Backend crate: kernel selection and dispatch caching for flathash.
//!
//! - **Dispatch**: pick the best kernel from a best-first candidate list
//! - **Caching**: [`OnceCache`] keeps the selection for the life of the process
//!
//! # Usage
//!
//! Algorithm crates register kernels as an ordered list of `Candidate`s.
//! Use the [`candidates!`] macro for concise syntax:
//!
//! ```
//! use backend::{OnceCache, candidates, dispatch::{Selected, select}};
//! use platform::caps::{Caps, x86};
//!
//! fn wide(data: &[u8]) -> u64 { data.len() as u64 }
//! fn portable(data: &[u8]) -> u64 { data.len() as u64 }
//!
//! static ACTIVE: OnceCache<Selected<fn(&[u8]) -> u64>> = OnceCache::new();
//!
//! let selected = ACTIVE.get_or_init(|| {
//!   select(platform::caps(), candidates![
//!     "x86_64/avx2" => x86::AVX2_READY => wide as fn(&[u8]) -> u64,
//!     "portable"    => Caps::NONE      => portable,
//!   ])
//!   .unwrap_or(Selected::new("portable", portable))
//! });
//! assert_eq!((selected.func)(b"abc"), 3);
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod cache;
pub mod dispatch;

pub use cache::OnceCache;
pub use dispatch::{Candidate, Selected, select};
// Re-export platform types for convenience.
pub use platform;
