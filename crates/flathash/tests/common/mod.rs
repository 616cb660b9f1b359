use bytemuck::{Pod, Zeroable};

pub const NAME_LEN: usize = 20;

/// 32 bytes, no padding: `f64` first, then `i32`, then the name buffer.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Record {
  pub value: f64,
  pub id: i32,
  pub name: [u8; NAME_LEN],
}

impl Record {
  pub fn new(id: i32, value: f64, name: &str) -> Self {
    let mut buf = [0u8; NAME_LEN];
    let len = name.len().min(NAME_LEN - 1);
    buf[..len].copy_from_slice(&name.as_bytes()[..len]);
    Self { value, id, name: buf }
  }
}
