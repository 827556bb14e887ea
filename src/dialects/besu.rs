use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::Besu;

// Besu reports bare, capitalised messages with no prefix of its own.
pub const RULES: &[Rule] = &[
    Rule::exact(D, C::NonceTooLow, "Nonce too low"),
    Rule::exact(D, C::ReplacementUnderpriced, "Replacement transaction underpriced"),
    Rule::exact(D, C::TransactionAlreadyInMempool, "Known transaction"),
    Rule::exact(
        D,
        C::TerminallyUnderpriced,
        "Gas price below configured minimum gas price",
    ),
    Rule::exact(D, C::InsufficientFunds, "Upfront cost exceeds account balance"),
    Rule::exact(D, C::TxFeeExceedsCap, "Transaction fee cap exceeded"),
    Rule::exact(D, C::Fatal, "Intrinsic gas exceeds gas limit"),
    Rule::exact(D, C::Fatal, "Transaction gas limit exceeds block gas limit"),
    Rule::exact(D, C::Fatal, "Invalid signature"),
];
