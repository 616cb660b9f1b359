//! HighwayHash runtime configuration (kernel overrides).
//!
//! `FLATHASH_HIGHWAY_FORCE` selects a kernel by name:
//! - `auto` (default): best kernel the CPU supports
//! - `portable` (aliases `scalar`, `generic`): the scalar reference kernel
//! - `x86_64/avx2` (alias `avx2`): the 256-bit x86_64 kernel
//!
//! Kernel names are the ones reported by `kernel_name()`.
//!
//! Forced modes are always clamped to detected CPU capabilities, and the
//! variable is read once per process. Unknown values fall back to `auto`.

use platform::Caps;

use super::kernels::{HighwayKernelId, id_from_name, required_caps};

/// Environment variable holding the kernel override.
pub const FORCE_ENV: &str = "FLATHASH_HIGHWAY_FORCE";

/// Forced kernel selection for HighwayHash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HighwayForce {
  /// Use the default auto selector.
  #[default]
  Auto,
  /// Force the portable scalar kernel.
  Portable,
  /// Force the x86_64 AVX2 kernel (if available).
  Avx2,
}

impl HighwayForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
      Self::Avx2 => "avx2",
    }
  }

  /// Parse a force name; surrounding whitespace and case are ignored.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("scalar") || value.eq_ignore_ascii_case("generic") {
      return Some(Self::Portable);
    }
    if value.eq_ignore_ascii_case("avx2") {
      return Some(Self::Avx2);
    }
    id_from_name(value).map(Self::from)
  }
}

impl From<HighwayKernelId> for HighwayForce {
  #[inline]
  fn from(id: HighwayKernelId) -> Self {
    match id {
      HighwayKernelId::Portable => Self::Portable,
      HighwayKernelId::X86Avx2 => Self::Avx2,
    }
  }
}

/// Effective HighwayHash configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighwayConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: HighwayForce,
  /// Force mode clamped to detected CPU capabilities.
  pub effective_force: HighwayForce,
}

/// Reads the force mode through `lookup`; a missing or unknown value is `Auto`.
#[cfg(feature = "std")]
fn force_from_lookup(lookup: impl FnOnce(&str) -> Option<std::string::String>) -> HighwayForce {
  lookup(FORCE_ENV)
    .and_then(|value| HighwayForce::parse(&value))
    .unwrap_or_default()
}

#[cfg(feature = "std")]
fn read_env_force() -> HighwayForce {
  force_from_lookup(|name| std::env::var(name).ok())
}

#[cfg(feature = "std")]
fn requested_force() -> HighwayForce {
  use std::sync::OnceLock;
  static FORCE: OnceLock<HighwayForce> = OnceLock::new();
  *FORCE.get_or_init(read_env_force)
}

#[cfg(not(feature = "std"))]
fn requested_force() -> HighwayForce {
  HighwayForce::Auto
}

#[inline]
#[must_use]
pub(crate) fn clamp_force_to_caps(requested: HighwayForce, caps: Caps) -> HighwayForce {
  match requested {
    HighwayForce::Auto | HighwayForce::Portable => requested,
    HighwayForce::Avx2 if caps.has(required_caps(HighwayKernelId::X86Avx2)) => requested,
    HighwayForce::Avx2 => HighwayForce::Auto,
  }
}

/// Resolve a configuration against `caps`.
#[inline]
#[must_use]
pub fn resolve(requested_force: HighwayForce, caps: Caps) -> HighwayConfig {
  HighwayConfig {
    requested_force,
    effective_force: clamp_force_to_caps(requested_force, caps),
  }
}

/// Get the effective HighwayHash configuration for the current platform.
#[inline]
#[must_use]
pub fn get() -> HighwayConfig {
  resolve(requested_force(), platform::caps())
}

#[cfg(test)]
mod tests {
  use platform::caps::x86;

  use super::*;

  #[test]
  fn parse_accepts_aliases() {
    assert_eq!(HighwayForce::parse(" AUTO "), Some(HighwayForce::Auto));
    assert_eq!(HighwayForce::parse("scalar"), Some(HighwayForce::Portable));
    assert_eq!(HighwayForce::parse("x86_64/avx2"), Some(HighwayForce::Avx2));
    assert_eq!(HighwayForce::parse("avx512"), None);
    assert_eq!(HighwayForce::parse(""), None);
  }

  #[test]
  fn avx2_force_is_clamped_without_caps() {
    let cfg = resolve(HighwayForce::Avx2, x86::SSE2);
    assert_eq!(cfg.requested_force, HighwayForce::Avx2);
    assert_eq!(cfg.effective_force, HighwayForce::Auto);

    let cfg = resolve(HighwayForce::Avx2, x86::AVX2_READY);
    assert_eq!(cfg.effective_force, HighwayForce::Avx2);
  }

  #[test]
  fn portable_force_always_honoured() {
    assert_eq!(
      resolve(HighwayForce::Portable, Caps::NONE).effective_force,
      HighwayForce::Portable
    );
  }

  #[test]
  fn kernel_names_parse() {
    assert_eq!(HighwayForce::parse("portable"), Some(HighwayForce::Portable));
    assert_eq!(HighwayForce::parse("X86_64/AVX2"), Some(HighwayForce::Avx2));
  }

  #[cfg(feature = "std")]
  #[test]
  fn env_lookup_reads_the_force_variable() {
    let mut seen = None;
    let force = force_from_lookup(|name| {
      seen = Some(std::string::String::from(name));
      Some("portable".into())
    });
    assert_eq!(force, HighwayForce::Portable);
    assert_eq!(seen.as_deref(), Some(FORCE_ENV));
  }

  #[cfg(feature = "std")]
  #[test]
  fn env_lookup_falls_back_to_auto() {
    assert_eq!(force_from_lookup(|_| Some("avx512".into())), HighwayForce::Auto);
    assert_eq!(force_from_lookup(|_| Some(std::string::String::new())), HighwayForce::Auto);
    assert_eq!(force_from_lookup(|_| None), HighwayForce::Auto);
  }

  #[test]
  fn as_str_parses_back() {
    for force in [HighwayForce::Auto, HighwayForce::Portable, HighwayForce::Avx2] {
      assert_eq!(HighwayForce::parse(force.as_str()), Some(force));
    }
  }
}
