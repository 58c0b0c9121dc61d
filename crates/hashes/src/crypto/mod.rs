//! Cryptographic hash functions.

pub mod sha256;

pub use sha256::{AlignmentError, MalformedDigest, Sha256, State};
