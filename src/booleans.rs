// Copyright 2025 Cowboy AI, LLC.

//! Curried boolean logic combinators
//!
//! This module is the combinator surface of the crate: the named binary
//! boolean operators in both eager and curried forms, unary negation,
//! predicate negation, short-circuiting sequence reductions, and a
//! curried conditional selector.
//!
//! # Design
//!
//! Every binary operator is derived from two primitive associative
//! combining rules, the [`Conjunction`] and [`Disjunction`] semigroups
//! (with [`ExclusiveDisjunction`] for parity), composed through
//! [`crate::function::compose2`] and [`crate::function::flip`]. The
//! derivations are an economy of definition, not a contract: the truth
//! tables are the contract.
//!
//! The namespace itself is a module of free functions. The uninhabited
//! [`Booleans`] type is retained as a namespace witness for callers
//! migrating from object-shaped APIs; it has no values and its only
//! associated constructor fails with
//! [`LogicError::UnsupportedConstruction`].

use crate::errors::{LogicError, LogicResult};
use crate::function::{compose, compose2, curry3, flip, Curried};
use crate::monoid::Monoid;
use crate::semigroup::{Conjunction, Disjunction, ExclusiveDisjunction, Semigroup};

/// Logical "and" (conjunction).
pub fn and(p: bool, q: bool) -> bool {
    Conjunction(p).combine(Conjunction(q)).into_inner()
}

/// Logical "inclusive or" (disjunction).
pub fn or(p: bool, q: bool) -> bool {
    Disjunction(p).combine(Disjunction(q)).into_inner()
}

/// Logical "exclusive or" (nonequivalence): true iff exactly one
/// argument is true.
pub fn xor(p: bool, q: bool) -> bool {
    ExclusiveDisjunction(p)
        .combine(ExclusiveDisjunction(q))
        .into_inner()
}

/// Logical negation.
pub fn not(p: bool) -> bool {
    !p
}

/// Logical "only if" (material implication): `!p || q`.
pub fn implies(p: bool, q: bool) -> bool {
    !p || q
}

/// Logical "if" (reverse material implication): `implies` with its
/// arguments flipped, `!q || p`.
pub fn if_(p: bool, q: bool) -> bool {
    flip(implies)(p, q)
}

/// Logical "if and only if" (biconditional, equivalence): the negation
/// of `xor`, true iff `p == q`.
pub fn iff(p: bool, q: bool) -> bool {
    compose2(not, xor)(p, q)
}

/// Logical "not implies" (nonimplication).
pub fn nimp(p: bool, q: bool) -> bool {
    compose2(not, implies)(p, q)
}

/// Logical "not if" (reverse nonimplication).
pub fn nif(p: bool, q: bool) -> bool {
    compose2(not, if_)(p, q)
}

/// Logical "not or" (joint denial).
pub fn nor(p: bool, q: bool) -> bool {
    compose2(not, or)(p, q)
}

/// Curried forms of the binary operators.
///
/// Each function takes the first operand and returns the one-argument
/// function of the second, enabling partial application:
///
/// ```rust
/// use cim_logic::booleans::curried;
///
/// let known_true = curried::and(true);
/// assert!(known_true(true));
/// assert!(!known_true(false));
/// ```
pub mod curried {
    /// Curried form of logical "and".
    pub fn and(p: bool) -> impl Fn(bool) -> bool {
        move |q| super::and(p, q)
    }

    /// Curried form of logical "inclusive or".
    pub fn or(p: bool) -> impl Fn(bool) -> bool {
        move |q| super::or(p, q)
    }

    /// Curried form of logical "exclusive or".
    pub fn xor(p: bool) -> impl Fn(bool) -> bool {
        move |q| super::xor(p, q)
    }

    /// Curried form of logical "only if" (material implication).
    pub fn implies(p: bool) -> impl Fn(bool) -> bool {
        move |q| super::implies(p, q)
    }

    /// Curried form of logical "if" (reverse material implication).
    pub fn if_(p: bool) -> impl Fn(bool) -> bool {
        move |q| super::if_(p, q)
    }

    /// Curried form of logical "if and only if".
    pub fn iff(p: bool) -> impl Fn(bool) -> bool {
        move |q| super::iff(p, q)
    }

    /// Curried form of logical "not implies".
    pub fn nimp(p: bool) -> impl Fn(bool) -> bool {
        move |q| super::nimp(p, q)
    }

    /// Curried form of logical "not if".
    pub fn nif(p: bool) -> impl Fn(bool) -> bool {
        move |q| super::nif(p, q)
    }

    /// Curried form of logical "not or".
    pub fn nor(p: bool) -> impl Fn(bool) -> bool {
        move |q| super::nor(p, q)
    }
}

/// Negate a predicate, leaving its argument domain untouched.
///
/// ```rust
/// use cim_logic::booleans::negate;
///
/// let is_positive = |x: i32| x > 0;
/// let is_non_positive = negate(is_positive);
/// assert!(is_non_positive(-3));
/// assert!(!is_non_positive(3));
/// ```
pub fn negate<A>(predicate: impl Fn(A) -> bool) -> impl Fn(A) -> bool {
    compose(not, predicate)
}

/// True iff all elements of the sequence are true.
///
/// The reduction is the [`Conjunction`] monoid fold with short-circuit
/// evaluation: input is consumed in forward order and stops at the
/// first `false`, so unbounded lazy iterators terminate once decided.
/// The empty sequence yields `true`, the conjunction identity.
pub fn all_true<I>(values: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    for value in values {
        if !value {
            return false;
        }
    }
    Conjunction::empty().into_inner()
}

/// True iff any element of the sequence is true.
///
/// The reduction is the [`Disjunction`] monoid fold with short-circuit
/// evaluation: input is consumed in forward order and stops at the
/// first `true`, so unbounded lazy iterators terminate once decided.
/// The empty sequence yields `false`, the disjunction identity.
pub fn any_true<I>(values: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    for value in values {
        if value {
            return true;
        }
    }
    Disjunction::empty().into_inner()
}

/// Conditional selector, eager form: `consequent` if `p` is true,
/// otherwise `alternative`.
pub fn cond_eager<A>(p: bool, consequent: A, alternative: A) -> A {
    if p {
        consequent
    } else {
        alternative
    }
}

/// Curried form of the conditional selector.
///
/// Returns the three-step chain `bool -> A -> A -> A`:
///
/// ```rust
/// use cim_logic::booleans::cond;
///
/// assert_eq!(cond::<&str>()(true)("yes")("no"), "yes");
/// assert_eq!(cond::<i32>()(false)(1)(2), 2);
/// ```
pub fn cond<A>() -> impl Fn(bool) -> Curried<A, Curried<A, A>>
where
    A: Clone + 'static,
{
    curry3(cond_eager::<A>)
}

/// Namespace witness for the combinator module.
///
/// The type is uninhabited: no value of it can ever exist, which is the
/// compile-time rendering of a throwing private constructor. The
/// [`Booleans::instance`] guard preserves the loud runtime failure for
/// callers that probe construction dynamically.
#[derive(Debug)]
pub enum Booleans {}

impl Booleans {
    /// Always fails: the namespace is not instantiable.
    pub fn instance() -> LogicResult<Self> {
        Err(LogicError::unsupported_construction("Booleans"))
    }
}
