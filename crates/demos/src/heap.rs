#![no_std]
#![no_main]

extern crate alloc;

use program::allocator::{BumpAllocator, HEAP_LENGTH, HEAP_START_ADDRESS};
use program::types::{EntrypointResult, Pubkey, SUCCESS};
use program::{entrypoint, log, mem, require};

/// Guest program that demonstrates the bump heap: direct calloc/free plus
/// `alloc` collections through the global allocator the entrypoint macro
/// installs. Both paths share the same cursor word.
entrypoint!(main);
fn main(_program_id: &Pubkey, _data: &[u8]) -> EntrypointResult {
    use alloc::vec::Vec;

    let heap = BumpAllocator::new(HEAP_START_ADDRESS, HEAP_LENGTH);

    // A fresh block comes back zeroed and aligned to its element size.
    let block = unsafe { heap.calloc(16, 8) };
    require(!block.is_null(), b"calloc failed");
    require(block as u64 % 8 == 0, b"calloc misaligned");
    let zeros = [0u8; 128];
    require(
        unsafe { mem::memcmp(block, zeros.as_ptr(), 128) } == 0,
        b"calloc block not zeroed",
    );

    unsafe { mem::memset(block, 0x5a, 128) };
    require(
        unsafe { *block.add(127) } == 0x5a,
        b"memset did not reach the end",
    );

    // An oversized request fails with null; the block above stays valid.
    let too_big = unsafe { heap.calloc(1, HEAP_LENGTH * 2) };
    require(too_big.is_null(), b"oversized calloc succeeded");

    heap.free(block);

    // Collections ride the same region through the global allocator.
    let mut numbers = Vec::new();
    for i in 0..10u32 {
        numbers.push(i * i);
    }
    require(numbers.len() == 10, b"vec length mismatch");
    require(numbers[9] == 81, b"vec content mismatch");

    log("heap: ok");
    SUCCESS
}
