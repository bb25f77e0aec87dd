#![no_std]
#![no_main]

use program::types::{EntrypointResult, Pubkey, SUCCESS};
use program::{entrypoint, log, log_hex};

/// Guest program that logs the parameters the host handed to it. No state,
/// no return data; it only shows the deserialize-and-log plumbing.
entrypoint!(main);
fn main(program_id: &Pubkey, data: &[u8]) -> EntrypointResult {
    log("sanity: enter");

    log("sanity: program id");
    log_hex(&program_id.0);

    if data.is_empty() {
        log("sanity: no input data");
    } else {
        log("sanity: input data");
        log_hex(data);
    }

    SUCCESS
}
