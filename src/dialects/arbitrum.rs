use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::Arbitrum;

pub const RULES: &[Rule] = &[
    Rule::clause(D, C::NonceTooLow, "invalid transaction nonce"),
    // "nonce too low: address 0x.., tx: 8089 state: 8090"
    Rule::regex(D, C::NonceTooLow, r"(?:: |^)nonce too low(?::|$)"),
    Rule::regex(D, C::NonceTooHigh, r"(?:: |^)nonce too high(?::|$)"),
    // Bare phrase only; Metis appends a required price and means something else.
    Rule::clause(D, C::TerminallyUnderpriced, "gas price too low"),
    Rule::clause_prefix(D, C::InsufficientFunds, "not enough funds for gas"),
    Rule::clause_prefix(
        D,
        C::InsufficientFunds,
        "insufficient funds for gas * price + value",
    ),
    Rule::regex(
        D,
        C::L2FeeTooLow,
        r"(?:: |^)max fee per gas less than block base fee(?::|$)",
    ),
    Rule::regex(D, C::L2Full, r"(?:: |^)queue full(?::|$)"),
    Rule::regex(
        D,
        C::L2Full,
        r"(?:: |^)sequencer pending tx pool full, please try again(?::|$)",
    ),
    Rule::clause_prefix(D, C::ServiceUnavailable, "502 Bad Gateway: "),
    Rule::clause(D, C::Fatal, "invalid message format"),
    Rule::clause(D, C::Fatal, "forbidden sender address"),
    Rule::regex(D, C::Fatal, r"(?:: |^)execution reverted(?::|$)"),
];
