//! Abort plumbing. Failed assertions and Rust panics both end up at the
//! host's panic syscall, which records the message and kills the instance.

/// Abort the instance with a message.
#[cfg(target_arch = "riscv64")]
pub fn vm_panic(msg: &[u8]) -> ! {
    unsafe {
        core::arch::asm!(
            "li a7, 2", // SYSCALL_PANIC
            "ecall",
            in("a1") msg.as_ptr(),
            in("a2") msg.len(),
        );
        // The host should not return from a panic syscall; trap if it does.
        core::arch::asm!("ebreak", options(nomem, nostack));
    }
    loop {}
}

#[cfg(not(target_arch = "riscv64"))]
pub fn vm_panic(msg: &[u8]) -> ! {
    panic!(
        "vm_panic: {}",
        core::str::from_utf8(msg).unwrap_or("<invalid utf-8>")
    );
}

/// Assert a condition, aborting with `msg` when it does not hold.
pub fn require(cond: bool, msg: &[u8]) {
    if !cond {
        vm_panic(msg);
    }
}

#[cfg(target_arch = "riscv64")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    use core::fmt::Write;

    struct BufWriter<'a> {
        buf: &'a mut [u8],
        pos: usize,
    }

    impl<'a> Write for BufWriter<'a> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let space = self.buf.len().saturating_sub(self.pos);
            let len = core::cmp::min(s.len(), space);
            self.buf[self.pos..self.pos + len].copy_from_slice(&s.as_bytes()[..len]);
            self.pos += len;
            Ok(())
        }
    }

    let mut buf = [0u8; 128];
    let mut writer = BufWriter {
        buf: &mut buf,
        pos: 0,
    };

    if let Some(location) = info.location() {
        let _ = write!(
            &mut writer,
            "panic at {}:{}: ",
            location.file(),
            location.line()
        );
    }
    let _ = write!(&mut writer, "{}", info.message());

    vm_panic(&writer.buf[..writer.pos]);
}
