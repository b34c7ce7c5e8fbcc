//! Message Authentication Codes

pub mod hmac;

#[doc(inline)]
pub use hmac::{hmac, Hmac};
