// Copyright 2025 Cowboy AI, LLC.

//! Semigroup abstraction and its boolean carriers
//!
//! A semigroup is a type paired with an associative binary combining
//! operation. The three boolean carriers here are the primitive
//! combining rules every operator in [`crate::booleans`] is derived
//! from: conjunction, disjunction, and exclusive disjunction.

/// A type with an associative binary combining operation.
///
/// # Laws
///
/// Associativity: `a.combine(b).combine(c) ≡ a.combine(b.combine(c))`
pub trait Semigroup {
    /// Combine two values with the associative operation.
    fn combine(self, other: Self) -> Self;
}

/// Boolean carrier whose combining operation is logical "and".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Conjunction(pub bool);

/// Boolean carrier whose combining operation is logical "inclusive or".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Disjunction(pub bool);

/// Boolean carrier whose combining operation is logical "exclusive or".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExclusiveDisjunction(pub bool);

impl Semigroup for Conjunction {
    fn combine(self, other: Self) -> Self {
        Conjunction(self.0 && other.0)
    }
}

impl Semigroup for Disjunction {
    fn combine(self, other: Self) -> Self {
        Disjunction(self.0 || other.0)
    }
}

impl Semigroup for ExclusiveDisjunction {
    fn combine(self, other: Self) -> Self {
        ExclusiveDisjunction(self.0 ^ other.0)
    }
}

macro_rules! impl_bool_carrier {
    ($carrier:ident) => {
        impl $carrier {
            /// Unwrap the carried boolean value.
            pub fn into_inner(self) -> bool {
                self.0
            }
        }

        impl From<bool> for $carrier {
            fn from(value: bool) -> Self {
                $carrier(value)
            }
        }

        impl From<$carrier> for bool {
            fn from(carrier: $carrier) -> Self {
                carrier.0
            }
        }
    };
}

impl_bool_carrier!(Conjunction);
impl_bool_carrier!(Disjunction);
impl_bool_carrier!(ExclusiveDisjunction);
