// Copyright 2025 Cowboy AI, LLC.

//! # CIM Bool
//!
//! Logical combinators over asynchronous booleans for the Composable
//! Information Machine.
//!
//! An asynchronous boolean is a deferred computation that eventually yields a
//! single `bool`, completes empty, or fails. This crate composes such
//! computations with NOT, AND, NAND, OR, NOR and XOR while keeping them lazy,
//! cancellable and short-circuiting:
//!
//! - **AsyncBoolean**: the trait every source and combinator implements
//! - **BoolMono**: a cloneable source built from values, futures or other sources
//! - **Combinators**: `not`, `and`, `nand`, `or`, `nor`, `xor`
//! - **BooleanExt**: the same combinators as methods
//!
//! ## Design Principles
//!
//! 1. **Laziness**: building a combinator runs nothing; observing it does
//! 2. **Short-circuit**: AND and OR never activate the right operand when the
//!    left one already decides the result
//! 3. **Cancellation**: dropping an observation drops every operand in flight
//! 4. **Transparency**: operand errors reach the caller unchanged
//! 5. **Statelessness**: every observation is an independent activation
//!
//! ## Example
//!
//! ```rust
//! use cim_bool::{and, or, xor, AsyncBoolean, BoolMono, SourceError};
//!
//! # tokio_test::block_on(async {
//! let denied = BoolMono::<SourceError>::error(SourceError::Unavailable("acl".into()));
//!
//! // The failing source is never observed
//! assert_eq!(and(BoolMono::just(false), denied.clone()).observe().await, Ok(Some(false)));
//! assert_eq!(or(BoolMono::just(true), denied).observe().await, Ok(Some(true)));
//!
//! let mixed = xor(BoolMono::<SourceError>::just(true), BoolMono::just(false));
//! assert_eq!(mixed.observe().await, Ok(Some(true)));
//! # });
//! ```

#![warn(missing_docs)]

mod combinators;
mod errors;
mod extensions;
mod mono;
mod source;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export core types
pub use combinators::{
    and, nand, nor, not, or, xor, Conjunction, Disjunction, ExclusiveOr, Nand, Negation, Nor,
};
pub use errors::SourceError;
pub use extensions::BooleanExt;
pub use mono::BoolMono;
pub use source::{AsyncBoolean, Outcome};
