//! Process-wide memo for kernel selections.
//!
//! With `std` the value lives in a `OnceLock`. Without it the initializer
//! runs on every call: selection is a few bit tests against
//! [`platform::caps()`], which is itself cached.

/// A write-once cache for a `Copy` value.
pub struct OnceCache<T: Copy> {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<T>,
  #[cfg(not(feature = "std"))]
  _value: core::marker::PhantomData<fn() -> T>,
}

impl<T: Copy> OnceCache<T> {
  #[must_use]
  pub const fn new() -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),
      #[cfg(not(feature = "std"))]
      _value: core::marker::PhantomData,
    }
  }

  /// Cached value, computing it with `init` on first use.
  #[inline]
  pub fn get_or_init(&self, init: impl FnOnce() -> T) -> T {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(init)
    }
    #[cfg(not(feature = "std"))]
    {
      init()
    }
  }
}

impl<T: Copy> Default for OnceCache<T> {
  fn default() -> Self {
    Self::new()
  }
}
