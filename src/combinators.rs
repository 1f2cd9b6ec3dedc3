// Copyright 2025 Cowboy AI, LLC.

//! Logical combinators over asynchronous booleans
//!
//! Each combinator is a small struct holding its operands and implementing
//! [`AsyncBoolean`] itself, so combinators nest freely. Building one has no
//! side effects; operands are only activated when the combinator is observed.
//!
//! # Evaluation Order
//!
//! | Operator | Left empty | Left error | Right observed when |
//! |----------|------------|------------|---------------------|
//! | AND      | empty      | error      | left is `true`      |
//! | OR       | empty      | error      | left is `false`     |
//! | XOR      | empty      | error      | always, concurrently |
//! | NAND/NOR | as AND/OR, with a present value negated | | |
//!
//! Operand errors are forwarded untouched. No combinator fails on its own.

use async_trait::async_trait;
use futures::future::{self, Either};
use tracing::trace;

use crate::source::{outcome_kind, AsyncBoolean, Outcome};

/// Logical NOT of one operand
#[derive(Debug, Clone)]
pub struct Negation<A> {
    operand: A,
}

/// Short-circuiting logical AND
#[derive(Debug, Clone)]
pub struct Conjunction<A, B> {
    left: A,
    right: B,
}

/// Short-circuiting logical OR
#[derive(Debug, Clone)]
pub struct Disjunction<A, B> {
    left: A,
    right: B,
}

/// Logical XOR; both operands are always observed
#[derive(Debug, Clone)]
pub struct ExclusiveOr<A, B> {
    left: A,
    right: B,
}

/// NOT over AND
pub type Nand<A, B> = Negation<Conjunction<A, B>>;

/// NOT over OR
pub type Nor<A, B> = Negation<Disjunction<A, B>>;

/// Negate the value of `operand`; empty and error pass through
pub fn not<A>(operand: A) -> Negation<A>
where
    A: AsyncBoolean,
{
    Negation { operand }
}

/// Logical AND; `right` is only observed when `left` is `true`
///
/// # Example
/// ```rust
/// use cim_bool::{and, AsyncBoolean, BoolMono, SourceError};
///
/// let unreachable = BoolMono::error(SourceError::generic("never observed"));
/// let combined = and(BoolMono::just(false), unreachable);
/// assert_eq!(tokio_test::block_on(combined.observe()), Ok(Some(false)));
/// ```
pub fn and<A, B>(left: A, right: B) -> Conjunction<A, B>
where
    A: AsyncBoolean,
    B: AsyncBoolean<Error = A::Error>,
{
    Conjunction { left, right }
}

/// Logical NAND, built as `not(and(left, right))`
pub fn nand<A, B>(left: A, right: B) -> Nand<A, B>
where
    A: AsyncBoolean,
    B: AsyncBoolean<Error = A::Error>,
{
    not(and(left, right))
}

/// Logical OR; `right` is only observed when `left` is `false`
pub fn or<A, B>(left: A, right: B) -> Disjunction<A, B>
where
    A: AsyncBoolean,
    B: AsyncBoolean<Error = A::Error>,
{
    Disjunction { left, right }
}

/// Logical NOR, built as `not(or(left, right))`
pub fn nor<A, B>(left: A, right: B) -> Nor<A, B>
where
    A: AsyncBoolean,
    B: AsyncBoolean<Error = A::Error>,
{
    not(or(left, right))
}

/// Logical XOR; both operands are observed concurrently
pub fn xor<A, B>(left: A, right: B) -> ExclusiveOr<A, B>
where
    A: AsyncBoolean,
    B: AsyncBoolean<Error = A::Error>,
{
    ExclusiveOr { left, right }
}

#[async_trait]
impl<A> AsyncBoolean for Negation<A>
where
    A: AsyncBoolean,
{
    type Error = A::Error;

    async fn observe(&self) -> Outcome<Self::Error> {
        let outcome = self.operand.observe().await.map(|value| value.map(|v| !v));
        trace!(
            operator = "not",
            operand = %self.operand.description(),
            outcome = outcome_kind(&outcome),
            "negation resolved"
        );
        outcome
    }

    fn description(&self) -> String {
        format!("(NOT {})", self.operand.description())
    }
}

#[async_trait]
impl<A, B> AsyncBoolean for Conjunction<A, B>
where
    A: AsyncBoolean,
    B: AsyncBoolean<Error = A::Error>,
{
    type Error = A::Error;

    async fn observe(&self) -> Outcome<Self::Error> {
        short_circuit("and", false, &self.left, &self.right).await
    }

    fn description(&self) -> String {
        format!("({} AND {})", self.left.description(), self.right.description())
    }
}

#[async_trait]
impl<A, B> AsyncBoolean for Disjunction<A, B>
where
    A: AsyncBoolean,
    B: AsyncBoolean<Error = A::Error>,
{
    type Error = A::Error;

    async fn observe(&self) -> Outcome<Self::Error> {
        short_circuit("or", true, &self.left, &self.right).await
    }

    fn description(&self) -> String {
        format!("({} OR {})", self.left.description(), self.right.description())
    }
}

/// Shared evaluation for AND and OR
///
/// `decisive` is the left value that settles the result on its own: `false`
/// for AND, `true` for OR. Any other left value hands over to `right`.
async fn short_circuit<A, B>(
    operator: &'static str,
    decisive: bool,
    left: &A,
    right: &B,
) -> Outcome<A::Error>
where
    A: AsyncBoolean,
    B: AsyncBoolean<Error = A::Error>,
{
    let first = left.observe().await;
    match first {
        Ok(Some(value)) if value != decisive => {
            trace!(
                operator,
                left = %left.description(),
                right = %right.description(),
                "left operand {}, observing right operand",
                value
            );
            let outcome = right.observe().await;
            trace!(operator, outcome = outcome_kind(&outcome), "right operand resolved");
            outcome
        }
        settled => {
            trace!(
                operator,
                left = %left.description(),
                outcome = outcome_kind(&settled),
                "short-circuited on left operand"
            );
            settled
        }
    }
}

#[async_trait]
impl<A, B> AsyncBoolean for ExclusiveOr<A, B>
where
    A: AsyncBoolean,
    B: AsyncBoolean<Error = A::Error>,
{
    type Error = A::Error;

    /// Both observations run in the same task and the left outcome takes
    /// precedence. An empty or failed left operand ends the observation and
    /// drops the right one. An empty or failed right operand that settles
    /// first still waits for the left: a left value hands over to the right
    /// outcome, a left empty or error replaces it.
    async fn observe(&self) -> Outcome<Self::Error> {
        let left = self.left.observe();
        let right = self.right.observe();

        let outcome = match future::select(left, right).await {
            Either::Left((Ok(Some(l)), right)) => match right.await {
                Ok(Some(r)) => Ok(Some(l ^ r)),
                unresolved => unresolved,
            },
            Either::Left((settled, _right)) => settled,
            Either::Right((second, left)) => match (left.await, second) {
                (Ok(Some(l)), Ok(Some(r))) => Ok(Some(l ^ r)),
                (Ok(Some(_)), unresolved) => unresolved,
                (settled, _) => settled,
            },
        };
        trace!(
            operator = "xor",
            left = %self.left.description(),
            right = %self.right.description(),
            outcome = outcome_kind(&outcome),
            "exclusive-or resolved"
        );
        outcome
    }

    fn description(&self) -> String {
        format!("({} XOR {})", self.left.description(), self.right.description())
    }
}
