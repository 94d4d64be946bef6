//! Byte encoding helpers shared by the services.

#[cfg(test)]
#[path = "encoding_test.rs"]
mod encoding_test;

use std::fmt::Write;

/// Lowercase hex, two digits per byte.
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}
