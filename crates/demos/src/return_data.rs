#![no_std]
#![no_main]

use program::types::{EntrypointResult, Pubkey, SUCCESS};
use program::{entrypoint, mem, require, sand_get_return_data, sand_set_return_data};

const DATA: &[u8] = b"the quick brown fox jumps over the lazy dog";

/// Guest program that exercises the return-data syscalls end to end.
entrypoint!(main);
fn main(_program_id: &Pubkey, _data: &[u8]) -> EntrypointResult {
    let mut buf = [0u8; 1024];
    let mut setter = Pubkey::zeroed();

    // There should be no return data on entry.
    let ret = sand_get_return_data(&mut [], &mut setter);
    require(ret == 0, b"return data present on entry");

    sand_set_return_data(DATA);

    // Probe the length without copying anything out.
    let ret = sand_get_return_data(&mut [], &mut setter);
    require(ret == DATA.len() as u64, b"length probe mismatch");

    // A short buffer gets a prefix but still reports the full length.
    let ret = sand_get_return_data(&mut buf[..4], &mut setter);
    require(ret == DATA.len() as u64, b"subset read mismatch");
    require(
        unsafe { mem::memcmp(buf.as_ptr(), b"the ".as_ptr(), 4) } == 0,
        b"prefix mismatch",
    );

    // The whole payload.
    let ret = sand_get_return_data(&mut buf, &mut setter);
    require(ret == DATA.len() as u64, b"full read mismatch");
    require(
        unsafe { mem::memcmp(buf.as_ptr(), DATA.as_ptr(), DATA.len()) } == 0,
        b"payload mismatch",
    );

    SUCCESS
}
