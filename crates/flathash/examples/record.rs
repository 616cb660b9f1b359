//! Hash two sample records and compare them.
//!
//! ```text
//! cargo run -p flathash --example record
//! FLATHASH_HIGHWAY_FORCE=portable cargo run -p flathash --example record
//! ```

use bytemuck::{Pod, Zeroable};
use flathash::{ValueHasher, flat};

const NAME_LEN: usize = 20;

#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct Record {
  value: f64,
  id: i32,
  name: [u8; NAME_LEN],
}

impl Record {
  /// `name` is truncated to 19 bytes; the rest of the buffer is zeroed.
  fn new(id: i32, value: f64, name: &str) -> Self {
    let mut buf = [0u8; NAME_LEN];
    let len = name.len().min(NAME_LEN - 1);
    buf[..len].copy_from_slice(&name.as_bytes()[..len]);
    Self { value, id, name: buf }
  }

  fn name(&self) -> &str {
    let end = self.name.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
    core::str::from_utf8(&self.name[..end]).unwrap_or("<invalid utf-8>")
  }
}

#[allow(clippy::approx_constant)]
fn main() {
  let _ = tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .try_init();

  let hasher = ValueHasher::<Record>::new();
  let records = [Record::new(1, 42.0, "Example"), Record::new(2, 3.14, "Test")];

  println!("kernel: {} on {}", flathash::kernel_name(), flathash::describe_platform());
  for record in &records {
    println!(
      "Record {{ id: {}, value: {}, name: {:?} }} -> {:#018x}",
      record.id,
      record.value,
      record.name(),
      hasher.hash(record)
    );
  }

  let [first, second] = &records;
  if flat::equals(first, second) {
    println!("records are equal");
  } else {
    println!("records are different");
  }
}
