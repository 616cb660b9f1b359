use backend::{Candidate, OnceCache, Selected, candidates, select};
use platform::Caps;

use super::{
  Key,
  config::{self, HighwayForce},
  kernels::{HashFn, HighwayKernelId, hash64_fn, required_caps},
};

static ACTIVE: OnceCache<Selected<HashFn>> = OnceCache::new();

#[inline]
#[must_use]
fn entry(id: HighwayKernelId) -> Selected<HashFn> {
  Selected::new(id.as_str(), hash64_fn(id))
}

#[must_use]
fn auto(caps: Caps) -> Selected<HashFn> {
  use HighwayKernelId::{Portable, X86Avx2};

  let candidates: &[Candidate<HashFn>] = candidates![
    X86Avx2.as_str() => required_caps(X86Avx2) => hash64_fn(X86Avx2),
    Portable.as_str() => required_caps(Portable) => hash64_fn(Portable),
  ];
  select(caps, candidates).unwrap_or_else(|| entry(Portable))
}

#[must_use]
fn resolve(force: HighwayForce, caps: Caps) -> Selected<HashFn> {
  match force {
    HighwayForce::Auto => auto(caps),
    HighwayForce::Portable => entry(HighwayKernelId::Portable),
    HighwayForce::Avx2 => entry(HighwayKernelId::X86Avx2),
  }
}

#[inline]
#[must_use]
fn active() -> Selected<HashFn> {
  ACTIVE.get_or_init(|| {
    let cfg = config::get();
    resolve(cfg.effective_force, platform::caps())
  })
}

/// Name of the kernel serving this process (e.g. `"x86_64/avx2"`).
#[inline]
#[must_use]
pub fn kernel_name() -> &'static str {
  active().name
}

/// One-shot HighwayHash-64 of `data` under `key`, on the kernel selected for
/// this process.
#[inline]
#[must_use]
pub fn hash64_with_key(key: Key, data: &[u8]) -> u64 {
  (active().func)(key, data)
}

/// Hashes with `force` applied instead of the process-wide selection.
///
/// The force is clamped to the detected capabilities the same way
/// `FLATHASH_HIGHWAY_FORCE` is.
#[doc(hidden)]
#[must_use]
pub fn hash64_with_force(force: HighwayForce, key: Key, data: &[u8]) -> u64 {
  let caps = platform::caps();
  (resolve(config::resolve(force, caps).effective_force, caps).func)(key, data)
}
