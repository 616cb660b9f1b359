//! Kernel dispatch: selection from a best-first candidate list.
//!
//! Selection runs once per algorithm; callers keep the result in an
//! [`OnceCache`](crate::OnceCache) so every later call is a single indirect
//! call through a function pointer.

use platform::Caps;

/// A candidate kernel with capability requirements.
///
/// Candidates are ordered from best to worst. The first candidate whose
/// requirements are satisfied by the detected capabilities wins.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<F> {
  /// Human-readable name for diagnostics (e.g., "x86_64/avx2").
  pub name: &'static str,
  /// Required CPU capabilities. Must be a subset of detected caps.
  pub requires: Caps,
  /// The kernel function pointer.
  pub func: F,
}

impl<F> Candidate<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, requires: Caps, func: F) -> Self {
    Self { name, requires, func }
  }
}

/// The result of kernel selection.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Human-readable name of the selected kernel.
  pub name: &'static str,
  /// The selected kernel function.
  pub func: F,
}

impl<F> Selected<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

/// Select the best kernel from a candidate list.
///
/// Returns the first candidate whose `requires` is satisfied by `caps`, or
/// `None` when nothing matches. Lists that end with a `Caps::NONE` portable
/// entry always return `Some`.
#[inline]
#[must_use]
pub fn select<F: Copy>(caps: Caps, candidates: &[Candidate<F>]) -> Option<Selected<F>> {
  candidates
    .iter()
    .find(|candidate| caps.has(candidate.requires))
    .map(|candidate| Selected::new(candidate.name, candidate.func))
}

/// Build a `&[Candidate<_>]` slice from `name => caps => func` rows.
#[macro_export]
macro_rules! candidates {
  ($($name:expr => $caps:expr => $func:expr),+ $(,)?) => {
    &[$($crate::dispatch::Candidate::new($name, $caps, $func)),+]
  };
}

#[cfg(test)]
mod tests {
  use platform::caps::x86;

  use super::*;

  fn best(_: &[u8]) -> u64 {
    2
  }

  fn fallback(_: &[u8]) -> u64 {
    1
  }

  type KernelFn = fn(&[u8]) -> u64;

  #[test]
  fn picks_first_satisfied_candidate() {
    let list: &[Candidate<KernelFn>] = candidates![
      "x86_64/avx2" => x86::AVX2_READY => best,
      "portable" => Caps::NONE => fallback,
    ];

    let selected = select(x86::AVX2_READY | x86::SSE2, list).unwrap();
    assert_eq!(selected.name, "x86_64/avx2");
    assert_eq!((selected.func)(&[]), 2);

    let selected = select(x86::SSE2, list).unwrap();
    assert_eq!(selected.name, "portable");
    assert_eq!((selected.func)(&[]), 1);
  }

  #[test]
  fn no_match_without_fallback() {
    let list: &[Candidate<KernelFn>] = candidates!["x86_64/avx2" => x86::AVX2_READY => best];
    assert!(select(Caps::NONE, list).is_none());
  }
}
