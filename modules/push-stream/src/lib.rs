#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_async)]
#![deny(clippy::unnecessary_wraps)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![cfg_attr(not(test), no_std)]

//! Push-based stream stages.
//!
//! A pipeline is a chain of stages linked pairwise with [`compose`](crate::core::compose). Data is pushed
//! downstream through `write`, end-of-stream travels downstream through `end`, and a
//! cooperative pause flag lets each stage hold back its upstream neighbour.
//!
//! The `core` module is `no_std + alloc`. The `std` module adds a tokio-backed line reader for
//! [`AsyncSource`](crate::core::AsyncSource).

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod std;
