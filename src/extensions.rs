// Copyright 2025 Cowboy AI, LLC.

//! Method syntax for the combinators
//!
//! [`BooleanExt`] is implemented for every [`AsyncBoolean`], so combinators
//! read left to right:
//!
//! ```rust
//! use cim_bool::{AsyncBoolean, BoolMono, BooleanExt, SourceError};
//!
//! let is_owner = BoolMono::<SourceError>::just(false);
//! let is_admin = BoolMono::just(true);
//! let can_edit = is_owner.or_boolean(is_admin).and_boolean(BoolMono::just(true));
//!
//! assert_eq!(tokio_test::block_on(can_edit.observe()), Ok(Some(true)));
//! ```
//!
//! `BoolMono` also supports `!` for negation. With `std::ops::Not` in scope,
//! `mono.not()` on a `BoolMono` is ambiguous; write `!mono` or
//! `BooleanExt::not(mono)` instead.

use std::ops;

use crate::combinators::{self, Conjunction, Disjunction, ExclusiveOr, Nand, Negation, Nor};
use crate::mono::BoolMono;
use crate::source::AsyncBoolean;

/// Combinator methods for every [`AsyncBoolean`]
///
/// [`BoolMono`] also implements [`std::ops::Not`]. When that trait is
/// imported, call [`BooleanExt::not`] by its full path or use `!`.
pub trait BooleanExt: AsyncBoolean + Sized {
    /// Logical NOT, see [`combinators::not`]
    fn not(self) -> Negation<Self> {
        combinators::not(self)
    }

    /// Logical AND, see [`combinators::and`]
    fn and_boolean<B>(self, right: B) -> Conjunction<Self, B>
    where
        B: AsyncBoolean<Error = Self::Error>,
    {
        combinators::and(self, right)
    }

    /// Logical NAND, see [`combinators::nand`]
    fn nand<B>(self, right: B) -> Nand<Self, B>
    where
        B: AsyncBoolean<Error = Self::Error>,
    {
        combinators::nand(self, right)
    }

    /// Logical OR, see [`combinators::or`]
    fn or_boolean<B>(self, right: B) -> Disjunction<Self, B>
    where
        B: AsyncBoolean<Error = Self::Error>,
    {
        combinators::or(self, right)
    }

    /// Logical NOR, see [`combinators::nor`]
    fn nor<B>(self, right: B) -> Nor<Self, B>
    where
        B: AsyncBoolean<Error = Self::Error>,
    {
        combinators::nor(self, right)
    }

    /// Logical XOR, see [`combinators::xor`]
    fn xor<B>(self, right: B) -> ExclusiveOr<Self, B>
    where
        B: AsyncBoolean<Error = Self::Error>,
    {
        combinators::xor(self, right)
    }

    /// Erase the combinator tree into a [`BoolMono`]
    fn boxed(self) -> BoolMono<Self::Error>
    where
        Self: 'static,
    {
        BoolMono::from_source(self)
    }
}

impl<T: AsyncBoolean> BooleanExt for T {}

impl<E: Send + 'static> ops::Not for BoolMono<E> {
    type Output = BoolMono<E>;

    fn not(self) -> Self::Output {
        BoolMono::from_source(combinators::not(self))
    }
}
