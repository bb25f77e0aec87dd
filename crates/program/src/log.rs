//! Log helpers over the `sand_log` syscall.
//!
//! The sandbox has exactly one log channel: a byte string handed to the
//! host. Formatting therefore happens guest-side, into stack buffers.

use crate::syscalls::sand_log;

/// Log a UTF-8 message.
pub fn log(message: &str) {
    sand_log(message.as_bytes());
}

/// Log raw bytes as-is.
pub fn log_bytes(bytes: &[u8]) {
    sand_log(bytes);
}

/// Log `bytes` hex-encoded. Long inputs go out in chunks so the encoder can
/// work from a fixed stack buffer.
pub fn log_hex(bytes: &[u8]) {
    let mut out = [0u8; 128];
    for chunk in bytes.chunks(out.len() / 2) {
        let encoded = &mut out[..chunk.len() * 2];
        // Cannot fail: the output slice is sized to exactly 2x the input.
        if hex::encode_to_slice(chunk, encoded).is_ok() {
            sand_log(encoded);
        }
    }
}
