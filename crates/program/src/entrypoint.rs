/// Declares the program entrypoint.
///
/// The loader resolves the `entrypoint` symbol and calls it once with a
/// pointer to the serialized input block. The expansion decodes the block
/// through `sand_deserialize`, hands `(&Pubkey, &[u8])` to `$func`, and
/// returns the function's result code to the host; a block that fails to
/// decode returns `ERR_DESERIALIZE` without reaching `$func`. On the VM
/// target the macro also installs the fixed-region heap as the global
/// allocator so `alloc` collections work out of the box.
#[macro_export]
macro_rules! entrypoint {
    ($func:path) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn entrypoint(input: *const u8) -> u64 {
            let mut params = $crate::syscalls::Parameters::zeroed();
            let ok = unsafe { $crate::syscalls::sand_deserialize(input, &mut params) };
            if !ok {
                return $crate::types::ERR_DESERIALIZE;
            }
            let data: &[u8] = if params.data_addr == 0 || params.data_len == 0 {
                &[]
            } else {
                unsafe {
                    core::slice::from_raw_parts(
                        params.data_addr as *const u8,
                        params.data_len as usize,
                    )
                }
            };
            $func(&params.program_id, data)
        }

        #[cfg(target_arch = "riscv64")]
        #[global_allocator]
        static ALLOCATOR: $crate::allocator::BumpAllocator =
            $crate::allocator::BumpAllocator::new(
                $crate::allocator::HEAP_START_ADDRESS,
                $crate::allocator::HEAP_LENGTH,
            );
    };
}
