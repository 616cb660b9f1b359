//! Keyed fingerprints of plain-old-data values.
//!
//! `flathash` hashes, compares and serialises values through their raw
//! memory bytes. A value qualifies when its bytes fully determine it, which
//! the compiler checks through [`bytemuck::Pod`]: types with padding or
//! pointers are rejected at the derive.
//!
//! The hash is HighwayHash-64 under a secret 256-bit key drawn from an
//! OS-seeded ChaCha20 generator, dispatched at runtime to the fastest kernel
//! the CPU supports. It is **not** a cryptographic hash.
//!
//! ```
//! use bytemuck::{Pod, Zeroable};
//! use flathash::{ValueHasher, flat};
//!
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! #[repr(C)]
//! struct Sample {
//!   value: f64,
//!   id: i32,
//!   tag: [u8; 4],
//! }
//!
//! let a = Sample { value: 1.0, id: 7, tag: *b"abc\0" };
//! let b = a;
//!
//! let hasher = ValueHasher::<Sample>::new();
//! assert!(flat::equals(&a, &b));
//! assert_eq!(hasher.hash(&a), hasher.hash(&b));
//!
//! let back: Sample = flat::from_bytes(&flat::to_bytes(&a)).unwrap();
//! assert!(flat::equals(&a, &back));
//! ```
//!
//! # Modules
//!
//! - [`flat`] - byte views, byte equality and the [`Flat`](flat::Flat) bound
//! - [`keyed`] - keyed HighwayHash-64 over byte buffers
//! - [`hasher`] - per-type value hasher
//!
//! # Configuration
//!
//! `FLATHASH_HIGHWAY_FORCE=portable|avx2|auto` pins the kernel; see
//! [`hashes::fast::highway::config`].
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod build_hasher;
mod error;
pub mod flat;
pub mod hasher;
mod key;
pub mod keyed;
mod narrow;

pub use build_hasher::HighwayBuildHasher;
pub use error::ByteViewError;
pub use hasher::ValueHasher;
pub use key::HashKey;
pub use keyed::KeyedHasher;
pub use narrow::{narrow, narrow_bits};

/// Name of the HighwayHash kernel serving this process (e.g. `"x86_64/avx2"`).
#[inline]
#[must_use]
pub fn kernel_name() -> &'static str {
  hashes::fast::highway::kernel_name()
}

/// Detected architecture and CPU capabilities, for diagnostics.
#[inline]
#[must_use]
pub fn describe_platform() -> platform::Description {
  platform::describe()
}
