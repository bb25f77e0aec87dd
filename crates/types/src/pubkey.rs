use core::fmt;

pub const PUBKEY_LEN: usize = 32;

/// Identity of a program instance, assigned by the host when the program is
/// loaded. Guest code only ever receives it; it is never derived in-sandbox.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Pubkey(pub [u8; PUBKEY_LEN]);

impl Pubkey {
    pub const fn new(bytes: [u8; PUBKEY_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn zeroed() -> Self {
        Self([0u8; PUBKEY_LEN])
    }

    pub fn from_slice(slice: &[u8]) -> Self {
        let mut bytes = [0u8; PUBKEY_LEN];
        bytes.copy_from_slice(&slice[..PUBKEY_LEN]);
        Pubkey::new(bytes)
    }

    pub fn to_bytes(&self) -> [u8; PUBKEY_LEN] {
        self.0
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
