//! SHA-256 building blocks that resume from any chaining state.
//!
//! Unlike a conventional hasher, every stage here is exposed on its own:
//! padding against an arbitrary number of previously absorbed bytes, the
//! message schedule, the compression loop starting from an imported
//! [`State`], and the hex/byte codec for that state. Composed from the
//! initialization vector they give ordinary SHA-256 ([`Sha256::digest`]).
//!
//! This crate is `no_std` compatible (padded buffers need `alloc`) and has zero
//! library dependencies. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - SHA-256 padding, schedule, compression and state codec.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod crypto;

mod util;

pub use crypto::sha256::{Sha256, State};
