use platform::{Caps, caps::x86};

use super::Key;

pub(crate) type HashFn = fn(Key, &[u8]) -> u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum HighwayKernelId {
  Portable = 0,
  X86Avx2 = 1,
}

/// Every kernel, best first.
pub const ALL: &[HighwayKernelId] = &[HighwayKernelId::X86Avx2, HighwayKernelId::Portable];

impl HighwayKernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Portable => "portable",
      Self::X86Avx2 => "x86_64/avx2",
    }
  }
}

/// Looks a kernel up by its [`HighwayKernelId::as_str`] name, ignoring ASCII case.
#[must_use]
pub fn id_from_name(name: &str) -> Option<HighwayKernelId> {
  ALL.iter().copied().find(|id| id.as_str().eq_ignore_ascii_case(name))
}

/// Kernel entry point. Callers must check [`required_caps`] first.
#[must_use]
pub(crate) fn hash64_fn(id: HighwayKernelId) -> HashFn {
  match id {
    HighwayKernelId::Portable => super::hash64_portable,
    #[cfg(target_arch = "x86_64")]
    HighwayKernelId::X86Avx2 => super::x86_64::hash64_avx2,
    #[cfg(not(target_arch = "x86_64"))]
    HighwayKernelId::X86Avx2 => super::hash64_portable,
  }
}

#[inline]
#[must_use]
pub const fn required_caps(id: HighwayKernelId) -> Caps {
  match id {
    HighwayKernelId::Portable => Caps::NONE,
    HighwayKernelId::X86Avx2 => x86::AVX2_READY,
  }
}
