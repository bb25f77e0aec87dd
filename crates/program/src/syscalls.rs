//! Bindings for the host syscall surface.
//!
//! Every syscall is an `ecall` with its number in `a7`, arguments in
//! `a1..a3`, and the result (when there is one) in `a0`. On anything other
//! than the VM target the raw stubs are inert, so the crate and its tests
//! still build on the development machine.

use types::Pubkey;

pub const SYSCALL_LOG: u64 = 1;
pub const SYSCALL_PANIC: u64 = 2;
pub const SYSCALL_DESERIALIZE: u64 = 3;
pub const SYSCALL_SET_RETURN_DATA: u64 = 4;
pub const SYSCALL_GET_RETURN_DATA: u64 = 5;

/// Input descriptor filled by [`sand_deserialize`]. Mirrors the host's
/// layout word for word; do not reorder fields.
#[repr(C)]
pub struct Parameters {
    pub program_id: Pubkey,
    pub data_addr: u64,
    pub data_len: u64,
}

impl Parameters {
    pub const fn zeroed() -> Self {
        Self {
            program_id: Pubkey::zeroed(),
            data_addr: 0,
            data_len: 0,
        }
    }
}

/// Log a byte string through the host. The host decides how to render it.
pub fn sand_log(message: &[u8]) {
    unsafe { syscall_log(message.as_ptr(), message.len() as u64) }
}

/// Publish the program's return data, replacing whatever was set before.
pub fn sand_set_return_data(data: &[u8]) {
    unsafe { syscall_set_return_data(data.as_ptr(), data.len() as u64) }
}

/// Copy up to `buf.len()` bytes of the current return data into `buf` and
/// record which program set it. Returns the total length available, which
/// may exceed `buf.len()`; pass an empty buffer to probe the length alone.
pub fn sand_get_return_data(buf: &mut [u8], program_id: &mut Pubkey) -> u64 {
    unsafe { syscall_get_return_data(buf.as_mut_ptr(), buf.len() as u64, program_id) }
}

/// Decode the loader-serialized input block into `params`.
///
/// # Safety
/// `input` must be the pointer the loader passed to `entrypoint`.
pub unsafe fn sand_deserialize(input: *const u8, params: &mut Parameters) -> bool {
    unsafe { syscall_deserialize(input, params as *mut Parameters) != 0 }
}

#[cfg(target_arch = "riscv64")]
unsafe fn syscall_log(ptr: *const u8, len: u64) {
    unsafe {
        core::arch::asm!(
            "li a7, 1", // SYSCALL_LOG
            "ecall",
            in("a1") ptr,
            in("a2") len,
        );
    }
}

#[cfg(target_arch = "riscv64")]
unsafe fn syscall_set_return_data(ptr: *const u8, len: u64) {
    unsafe {
        core::arch::asm!(
            "li a7, 4", // SYSCALL_SET_RETURN_DATA
            "ecall",
            in("a1") ptr,
            in("a2") len,
        );
    }
}

#[cfg(target_arch = "riscv64")]
unsafe fn syscall_get_return_data(buf: *mut u8, len: u64, program_id: *mut Pubkey) -> u64 {
    unsafe {
        let total: u64;
        core::arch::asm!(
            "li a7, 5", // SYSCALL_GET_RETURN_DATA
            "ecall",
            in("a1") buf,
            in("a2") len,
            in("a3") program_id,
            out("a0") total,
        );
        total
    }
}

#[cfg(target_arch = "riscv64")]
unsafe fn syscall_deserialize(input: *const u8, params: *mut Parameters) -> u64 {
    unsafe {
        let ok: u64;
        core::arch::asm!(
            "li a7, 3", // SYSCALL_DESERIALIZE
            "ecall",
            in("a1") input,
            in("a2") params,
            out("a0") ok,
        );
        ok
    }
}

// Host-side stand-ins. There is no host VM on the development machine, so
// logs vanish, return data is absent, and deserialization reports failure.

#[cfg(not(target_arch = "riscv64"))]
unsafe fn syscall_log(_ptr: *const u8, _len: u64) {}

#[cfg(not(target_arch = "riscv64"))]
unsafe fn syscall_set_return_data(_ptr: *const u8, _len: u64) {}

#[cfg(not(target_arch = "riscv64"))]
unsafe fn syscall_get_return_data(_buf: *mut u8, _len: u64, _program_id: *mut Pubkey) -> u64 {
    0
}

#[cfg(not(target_arch = "riscv64"))]
unsafe fn syscall_deserialize(_input: *const u8, _params: *mut Parameters) -> u64 {
    0
}
