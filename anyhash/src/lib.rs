//! One identifier-driven API over fixed-output hash functions and extendable-output functions.
//!
//! A [`HashId`] names a registered primitive. From it you get a hasher which speaks the common
//! [`Hasher`] contract: absorb with `update`, produce output with `read`, `sum` or `hash`. Fixed
//! hashers ([`Fixed`]) additionally carry `HMAC` and `HKDF`; XOFs ([`Extendable`]) produce output
//! of any configured size.
//!
//! ```
//! use anyhash::{HashId, HashType};
//!
//! for id in anyhash::registry::all() {
//!     let digest = id.hash([b"hello".as_slice(), b" world"]);
//!     assert_eq!(digest.len(), id.size());
//! }
//!
//! let mut shake = HashId::SHAKE256.get_xof().unwrap();
//! shake.set_output_size(200);
//! assert_eq!(shake.hash([b"long output"]).len(), 200);
//!
//! assert_eq!(HashId::SHA3_512.hash_type(), Some(HashType::Fixed));
//! ```
//!
//! # Features
//!
//! - `std` (default): `std::io::Write` for every hasher.
//! - `embedded-io`: `embedded_io::Write` for every hasher.
//! - `fips`: hashers start in [`Mode::Fips140`], restricting `HKDF` to approved parameters.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    clippy::all
)]
// output sizes are bounded by the primitives, every narrowing is checked first
#![allow(clippy::cast_possible_truncation)]
// stupid lint IMO
#![allow(clippy::module_name_repetitions)]
// this devalues things which actually require the must-use attribute
#![allow(clippy::must_use_candidate)]
// `HashId::new` is the registry constructor, not `Self`
#![allow(clippy::new_ret_no_self, clippy::wrong_self_convention)]

extern crate alloc;

#[macro_use]
mod macros;

mod dispatch;
mod error;
mod id;
mod io;
mod policy;

pub mod hash;
pub mod kdf;
pub mod mac;
pub mod registry;

pub use error::{Error, Result};
pub use hash::{AnyHasher, Digester, Extendable, Fixed, Hasher};
pub use id::{CryptoHash, HashId, HashType};
pub use policy::Mode;
pub use registry::{Factory, Metadata};
