//! Key Derivation Functions

pub mod hkdf;
