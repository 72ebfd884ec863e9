// Copyright 2025 Cowboy AI, LLC.

//! # CIM Logic
//!
//! Curried boolean combinators and the algebraic building blocks they are
//! derived from, for the Composable Information Machine.
//!
//! This crate provides three layers:
//! - **Function utilities**: `compose`, `compose2`, `curry`, `curry3`, `flip` -
//!   the generic transformation toolkit
//! - **Semigroups and Monoids**: associative combining rules over `bool`
//!   (conjunction, disjunction, exclusive disjunction) with their identity
//!   elements
//! - **Boolean combinators**: the named operators (`and`, `or`, `xor`,
//!   `implies`, `if_`, `iff`, `nimp`, `nif`, `nor`, `not`) in eager and
//!   curried forms, predicate negation, short-circuiting sequence
//!   reductions, and a curried conditional selector
//!
//! ## Design Principles
//!
//! 1. **Purity**: every operation is a referentially transparent, stateless
//!    function over the two-valued boolean domain
//! 2. **Derivation over repetition**: operators are derived from the two
//!    primitive semigroups via composition and flipping; truth tables are
//!    the contract
//! 3. **Identity from algebra**: empty-sequence results come from monoid
//!    identity elements (`and` of nothing is `true`, `or` of nothing is
//!    `false`)
//! 4. **Laziness respected**: sequence reductions short-circuit at the
//!    first deciding element and terminate on unbounded input
//!
//! ## Example
//!
//! ```rust
//! use cim_logic::{all_true, any_true, cond, implies, negate};
//! use cim_logic::booleans::curried;
//!
//! assert!(implies(false, true));
//!
//! let known_false = curried::and(false);
//! assert!(!known_false(true));
//!
//! assert!(all_true(vec![true, true]));
//! assert!(!any_true(Vec::<bool>::new()));
//!
//! let is_even = |x: i32| x % 2 == 0;
//! assert!(negate(is_even)(3));
//!
//! assert_eq!(cond::<&str>()(true)("yes")("no"), "yes");
//! ```

#![warn(missing_docs)]

pub mod booleans;
mod errors;
pub mod function;
mod monoid;
mod operator;
mod semigroup;

// Re-export the combinator surface
pub use booleans::{
    all_true, and, any_true, cond, cond_eager, iff, if_, implies, negate, nif, nimp, nor, not,
    or, xor, Booleans,
};
pub use errors::{LogicError, LogicResult};
pub use function::{
    apply, compose, compose2, constant, curry, curry3, flip, flip_curried, identity, uncurry,
    Curried,
};
pub use monoid::Monoid;
pub use operator::BooleanOp;
pub use semigroup::{Conjunction, Disjunction, ExclusiveDisjunction, Semigroup};
