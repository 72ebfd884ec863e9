// Copyright 2025 Cowboy AI, LLC.

//! Named boolean operator value objects
//!
//! [`BooleanOp`] reifies the combinators of [`crate::booleans`] as an
//! enumerable, serializable value object, so callers can carry an
//! operator in data (configuration, schemas, generated documentation)
//! and evaluate it later. Evaluation delegates to the free functions,
//! so the enum can never drift from the combinator surface.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::booleans;
use crate::errors::LogicError;

/// The named boolean operators exposed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOp {
    /// Logical "and" (conjunction)
    And,
    /// Logical "inclusive or" (disjunction)
    Or,
    /// Logical "exclusive or" (nonequivalence)
    Xor,
    /// Logical "only if" (material implication)
    Implies,
    /// Logical "if" (reverse material implication)
    If,
    /// Logical "if and only if" (biconditional)
    Iff,
    /// Logical "not implies" (nonimplication)
    Nimp,
    /// Logical "not if" (reverse nonimplication)
    Nif,
    /// Logical "not or" (joint denial)
    Nor,
    /// Logical negation (unary)
    Not,
}

impl BooleanOp {
    /// Every operator, in declaration order.
    pub const ALL: [BooleanOp; 10] = [
        BooleanOp::And,
        BooleanOp::Or,
        BooleanOp::Xor,
        BooleanOp::Implies,
        BooleanOp::If,
        BooleanOp::Iff,
        BooleanOp::Nimp,
        BooleanOp::Nif,
        BooleanOp::Nor,
        BooleanOp::Not,
    ];

    /// Return the canonical lowercase mnemonic for this operator.
    pub fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Implies => "implies",
            Self::If => "if",
            Self::Iff => "iff",
            Self::Nimp => "nimp",
            Self::Nif => "nif",
            Self::Nor => "nor",
            Self::Not => "not",
        }
    }

    /// Parse a mnemonic into a known operator.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "xor" => Some(Self::Xor),
            "implies" => Some(Self::Implies),
            "if" => Some(Self::If),
            "iff" => Some(Self::Iff),
            "nimp" => Some(Self::Nimp),
            "nif" => Some(Self::Nif),
            "nor" => Some(Self::Nor),
            "not" => Some(Self::Not),
            _ => None,
        }
    }

    /// True when the operator takes a single argument.
    pub fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }

    /// Evaluate the operator on a pair of operands.
    ///
    /// For the unary [`BooleanOp::Not`] the second operand is ignored;
    /// use [`BooleanOp::eval_unary`] when that is clearer at the call
    /// site.
    pub fn eval(self, p: bool, q: bool) -> bool {
        match self {
            Self::And => booleans::and(p, q),
            Self::Or => booleans::or(p, q),
            Self::Xor => booleans::xor(p, q),
            Self::Implies => booleans::implies(p, q),
            Self::If => booleans::if_(p, q),
            Self::Iff => booleans::iff(p, q),
            Self::Nimp => booleans::nimp(p, q),
            Self::Nif => booleans::nif(p, q),
            Self::Nor => booleans::nor(p, q),
            Self::Not => booleans::not(p),
        }
    }

    /// Evaluate a unary operator; `None` for binary operators.
    pub fn eval_unary(self, p: bool) -> Option<bool> {
        match self {
            Self::Not => Some(booleans::not(p)),
            _ => None,
        }
    }

    /// Enumerate the truth table as `(p, q, result)` rows, inputs in
    /// canonical `(false, false) .. (true, true)` order.
    ///
    /// Unary operators still yield four rows; the `q` column is inert
    /// for them.
    pub fn truth_table(self) -> Vec<(bool, bool, bool)> {
        let mut rows = Vec::with_capacity(4);
        for p in [false, true] {
            for q in [false, true] {
                rows.push((p, q, self.eval(p, q)));
            }
        }
        rows
    }
}

impl Display for BooleanOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BooleanOp {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LogicError::UnknownOperator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booleans;

    #[test]
    fn test_name_round_trip() {
        for op in BooleanOp::ALL {
            assert_eq!(BooleanOp::from_name(op.name()), Some(op));
            assert_eq!(op.name().parse::<BooleanOp>().ok(), Some(op));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "nand".parse::<BooleanOp>().unwrap_err();
        assert_eq!(err, LogicError::UnknownOperator("nand".to_string()));
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(BooleanOp::Implies.to_string(), "implies");
        assert_eq!(BooleanOp::If.to_string(), "if");
        assert_eq!(BooleanOp::Nor.to_string(), "nor");
    }

    /// eval agrees with the free functions on the whole domain
    #[test]
    fn test_eval_agrees_with_combinators() {
        for p in [false, true] {
            for q in [false, true] {
                assert_eq!(BooleanOp::And.eval(p, q), booleans::and(p, q));
                assert_eq!(BooleanOp::Or.eval(p, q), booleans::or(p, q));
                assert_eq!(BooleanOp::Xor.eval(p, q), booleans::xor(p, q));
                assert_eq!(BooleanOp::Implies.eval(p, q), booleans::implies(p, q));
                assert_eq!(BooleanOp::If.eval(p, q), booleans::if_(p, q));
                assert_eq!(BooleanOp::Iff.eval(p, q), booleans::iff(p, q));
                assert_eq!(BooleanOp::Nimp.eval(p, q), booleans::nimp(p, q));
                assert_eq!(BooleanOp::Nif.eval(p, q), booleans::nif(p, q));
                assert_eq!(BooleanOp::Nor.eval(p, q), booleans::nor(p, q));
                assert_eq!(BooleanOp::Not.eval(p, q), booleans::not(p));
            }
        }
    }

    #[test]
    fn test_eval_unary() {
        assert_eq!(BooleanOp::Not.eval_unary(true), Some(false));
        assert_eq!(BooleanOp::Not.eval_unary(false), Some(true));
        assert_eq!(BooleanOp::And.eval_unary(true), None);
    }

    #[test]
    fn test_is_unary() {
        assert!(BooleanOp::Not.is_unary());
        for op in BooleanOp::ALL.iter().filter(|op| **op != BooleanOp::Not) {
            assert!(!op.is_unary());
        }
    }

    #[test]
    fn test_truth_table_rows() {
        let table = BooleanOp::Xor.truth_table();
        assert_eq!(
            table,
            vec![
                (false, false, false),
                (false, true, true),
                (true, false, true),
                (true, true, false),
            ]
        );

        // nor is true only at the all-false row
        let table = BooleanOp::Nor.truth_table();
        assert_eq!(table[0], (false, false, true));
        assert!(table[1..].iter().all(|(_, _, result)| !result));
    }

    #[test]
    fn test_serde_lowercase_rename() {
        let json = serde_json::to_string(&BooleanOp::Implies).unwrap();
        assert_eq!(json, "\"implies\"");

        let parsed: BooleanOp = serde_json::from_str("\"nimp\"").unwrap();
        assert_eq!(parsed, BooleanOp::Nimp);
    }
}
