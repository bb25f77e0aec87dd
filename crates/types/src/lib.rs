#![no_std]

pub mod pubkey;
pub use pubkey::{Pubkey, PUBKEY_LEN};

pub mod result;
pub use result::{EntrypointResult, ERR_DESERIALIZE, SUCCESS};
