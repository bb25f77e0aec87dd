/// Value an entrypoint hands back to the host. Zero means success; any other
/// value is surfaced to the caller of the program verbatim.
pub type EntrypointResult = u64;

pub const SUCCESS: EntrypointResult = 0;

/// Returned by the entrypoint glue when the host input cannot be decoded.
pub const ERR_DESERIALIZE: EntrypointResult = 1;
