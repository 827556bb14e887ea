use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::Celo;

pub const RULES: &[Rule] = &[
    Rule::regex(
        D,
        C::TxFeeExceedsCap,
        r"(?:: |^)tx fee \([0-9.]+ of currency celo\) exceeds the configured cap \([0-9.]+ [a-zA-Z]+\)$",
    ),
    Rule::clause(
        D,
        C::InsufficientFunds,
        "insufficient funds for gas * price + value + gatewayFee",
    ),
];
