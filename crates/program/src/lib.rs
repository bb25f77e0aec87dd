#![no_std]

pub mod allocator;
pub mod entrypoint;
pub mod log;
pub mod mem;
pub mod panic;
pub mod syscalls;

pub use allocator::{BumpAllocator, HEAP_LENGTH, HEAP_START_ADDRESS};
pub use log::{log, log_bytes, log_hex};
pub use panic::{require, vm_panic};
pub use syscalls::{Parameters, sand_get_return_data, sand_log, sand_set_return_data};

pub use types;
pub use types::{EntrypointResult, Pubkey, SUCCESS};
