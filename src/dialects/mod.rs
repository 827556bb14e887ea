//! Built-in rule data, one module per execution-client dialect.
//!
//! Every module exports a `RULES` table. Supporting a new client means adding
//! a module (or appending rules through [`crate::PatternTable::extend`]);
//! evaluation code never branches on the dialect.

pub mod arbitrum;
pub mod avalanche;
pub mod besu;
pub mod celo;
pub mod erigon;
pub mod geth;
pub mod harmony;
pub mod klaytn;
pub mod metis;
pub mod nethermind;
pub mod parity;
pub mod substrate;
pub mod zksync;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::classify::Category;

/// Execution-client family a rule was observed on. Informational only.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Geth,
    Besu,
    Erigon,
    Parity,
    Arbitrum,
    Metis,
    Substrate,
    Avalanche,
    Nethermind,
    Harmony,
    Klaytn,
    Celo,
    ZkSync,
    /// Caller-supplied rules for clients without a built-in module.
    Other,
}

impl Dialect {
    pub fn rules(self) -> &'static [CategoryRule] {
        match self {
            Self::Geth => geth::RULES,
            Self::Besu => besu::RULES,
            Self::Erigon => erigon::RULES,
            Self::Parity => parity::RULES,
            Self::Arbitrum => arbitrum::RULES,
            Self::Metis => metis::RULES,
            Self::Substrate => substrate::RULES,
            Self::Avalanche => avalanche::RULES,
            Self::Nethermind => nethermind::RULES,
            Self::Harmony => harmony::RULES,
            Self::Klaytn => klaytn::RULES,
            Self::Celo => celo::RULES,
            Self::ZkSync => zksync::RULES,
            Self::Other => &[],
        }
    }
}

/// How a rule's pattern is compared with a normalized message.
///
/// "Clause" kinds look at the whole message and at every tail following a
/// `": "` separator, which is how transports and clients prefix context
/// (`"call failed: nonce too low"`, `"transaction rejected: nonce too low"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The leaf cause or the full text equals the pattern.
    Exact,
    /// The message or one of its trailing clauses equals the pattern.
    Clause,
    /// The message or one of its trailing clauses starts with the pattern.
    ClausePrefix,
    /// A clause is the error-code token, optionally followed by
    /// `", <detail>"`. The detail never affects the match.
    ErrorCode,
    /// The pattern occurs anywhere in the message.
    Substring,
    /// The regular expression matches anywhere in the leaf cause or full text.
    Regex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: Category,
    pub dialect: Dialect,
    pub kind: MatchKind,
    pub pattern: &'static str,
    pub ignore_case: bool,
}

impl CategoryRule {
    pub const fn new(
        dialect: Dialect,
        category: Category,
        kind: MatchKind,
        pattern: &'static str,
    ) -> Self {
        Self {
            category,
            dialect,
            kind,
            pattern,
            ignore_case: false,
        }
    }

    pub const fn exact(dialect: Dialect, category: Category, pattern: &'static str) -> Self {
        Self::new(dialect, category, MatchKind::Exact, pattern)
    }

    pub const fn clause(dialect: Dialect, category: Category, pattern: &'static str) -> Self {
        Self::new(dialect, category, MatchKind::Clause, pattern)
    }

    pub const fn clause_prefix(
        dialect: Dialect,
        category: Category,
        pattern: &'static str,
    ) -> Self {
        Self::new(dialect, category, MatchKind::ClausePrefix, pattern)
    }

    pub const fn error_code(dialect: Dialect, category: Category, code: &'static str) -> Self {
        Self::new(dialect, category, MatchKind::ErrorCode, code)
    }

    pub const fn substring(dialect: Dialect, category: Category, pattern: &'static str) -> Self {
        Self::new(dialect, category, MatchKind::Substring, pattern)
    }

    pub const fn regex(dialect: Dialect, category: Category, pattern: &'static str) -> Self {
        Self::new(dialect, category, MatchKind::Regex, pattern)
    }

    pub const fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

/// A named exclusion between lexically overlapping categories: whenever any
/// rule of `winner` matches, `loser` evaluates to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precedence {
    pub name: &'static str,
    pub winner: Category,
    pub loser: Category,
}

pub const PRECEDENCE: &[Precedence] = &[
    // "replacement transaction underpriced" also reads as "transaction underpriced".
    Precedence {
        name: "replacement-over-terminal",
        winner: Category::ReplacementUnderpriced,
        loser: Category::TerminallyUnderpriced,
    },
    // Parity emits queue-limit and minimum-gas-price rejections with shared vocabulary.
    Precedence {
        name: "temporary-over-terminal",
        winner: Category::TemporarilyUnderpriced,
        loser: Category::TerminallyUnderpriced,
    },
];

pub fn builtin_rules() -> impl Iterator<Item = CategoryRule> {
    Dialect::iter().flat_map(|d| d.rules().iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_is_filed_under_its_own_dialect() {
        for dialect in Dialect::iter() {
            for rule in dialect.rules() {
                assert_eq!(
                    rule.dialect, dialect,
                    "{} rule {:?} filed under {dialect}",
                    rule.dialect, rule.pattern
                );
            }
        }
    }

    #[test]
    fn no_builtin_pattern_is_empty() {
        assert!(builtin_rules().all(|r| !r.pattern.is_empty()));
    }

    #[test]
    fn l2_fee_too_high_has_no_builtin_rule() {
        assert!(builtin_rules().all(|r| r.category != Category::L2FeeTooHigh));
    }

    #[test]
    fn precedence_never_targets_fatal() {
        for p in PRECEDENCE {
            assert_ne!(p.winner, Category::Fatal, "{}", p.name);
            assert_ne!(p.loser, Category::Fatal, "{}", p.name);
            assert_ne!(p.winner, p.loser, "{}", p.name);
        }
    }

    #[test]
    fn dialect_names_roundtrip() {
        assert_eq!("zksync".parse::<Dialect>().ok(), Some(Dialect::ZkSync));
        assert_eq!(Dialect::Nethermind.to_string(), "nethermind");
        assert_eq!("optimism".parse::<Dialect>().ok(), None);
    }
}
