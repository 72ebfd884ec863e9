// Copyright 2025 Cowboy AI, LLC.

//! Monoid abstraction built on [`Semigroup`]
//!
//! A monoid is a semigroup additionally equipped with a two-sided
//! identity element, which makes folds over possibly-empty sequences
//! well-defined. The boolean identities fix the empty-sequence results
//! of the reductions in [`crate::booleans`]: `true` for conjunction,
//! `false` for disjunction.
//!
//! # Laws
//!
//! 1. Left Identity: `Self::empty().combine(a) ≡ a`
//! 2. Right Identity: `a.combine(Self::empty()) ≡ a`
//! 3. Associativity: inherited from [`Semigroup`]

use crate::semigroup::{Conjunction, Disjunction, ExclusiveDisjunction, Semigroup};

/// A semigroup with a two-sided identity element.
pub trait Monoid: Semigroup + Sized {
    /// The identity element of the combining operation.
    fn empty() -> Self;

    /// Left fold over a sequence, starting from the identity element.
    ///
    /// This is a total fold: it consumes the whole input. For the lazy
    /// short-circuiting boolean reductions use
    /// [`crate::booleans::all_true`] / [`crate::booleans::any_true`].
    fn sum_left<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().fold(Self::empty(), Semigroup::combine)
    }

    /// Combine an owned collection of values into one.
    fn concat(items: Vec<Self>) -> Self {
        Self::sum_left(items)
    }
}

impl Monoid for Conjunction {
    fn empty() -> Self {
        Conjunction(true)
    }
}

impl Monoid for Disjunction {
    fn empty() -> Self {
        Disjunction(false)
    }
}

impl Monoid for ExclusiveDisjunction {
    fn empty() -> Self {
        ExclusiveDisjunction(false)
    }
}
