//! SHA-256 length-extension forgery.
//!
//! Given `H(secret ‖ message)`, the byte length of `secret` and `message`
//! itself, [`forge`] computes `H(secret ‖ message ‖ padding ‖ appended)` and
//! the bytes `message ‖ padding ‖ appended` that a verifier holding the secret
//! will accept, without ever learning the secret.
//!
//! ```
//! let forged = lenext::forge(
//!   "&admin=true",
//!   "163aee92c92be150037d006d060cbc54048227483beb28fee6e5bbab5a46ef70",
//!   6u64,
//!   "user=guest",
//! )?;
//! assert_eq!(
//!   forged.digest_hex(),
//!   "65151def802fd834333cc1f2c16215212c1d0331d5babddb1f22f610210e6eaa"
//! );
//! assert!(forged.message().starts_with(b"user=guest\x80"));
//! assert!(forged.message().ends_with(b"&admin=true"));
//! # Ok::<(), lenext::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing and output rendering for `sha256-extend`.
//! - [`diag`] - Explains the lengths and block counts behind one forgery.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

pub mod cli;
pub mod diag;
mod error;
mod forge;

pub use error::{Error, KeyLengthError};
pub use forge::{Forgery, MAX_SECRET_LEN, forge, parse_key_length};
pub use hashes::crypto::{AlignmentError, MalformedDigest};
