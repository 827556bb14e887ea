use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::Erigon;

pub const RULES: &[Rule] = &[
    Rule::clause(D, C::NonceTooLow, "nonce too low"),
    Rule::clause(D, C::NonceTooHigh, "nonce too high"),
    Rule::clause(D, C::ReplacementUnderpriced, "replacement transaction underpriced"),
    Rule::clause_prefix(D, C::TransactionAlreadyInMempool, "block already known"),
    Rule::clause_prefix(D, C::TransactionAlreadyInMempool, "already known"),
    Rule::clause(D, C::TerminallyUnderpriced, "transaction underpriced"),
    Rule::clause(D, C::InsufficientFunds, "insufficient funds for transfer"),
    Rule::clause(D, C::InsufficientFunds, "insufficient funds for gas * price + value"),
    Rule::clause(D, C::InsufficientFunds, "insufficient balance for transfer"),
    Rule::regex(
        D,
        C::TxFeeExceedsCap,
        r"(?:: |^)tx fee \([0-9.]+ [a-zA-Z]+\) exceeds the configured cap \([0-9.]+ [a-zA-Z]+\)$",
    ),
    Rule::clause(D, C::Fatal, "exceeds block gas limit"),
    Rule::clause(D, C::Fatal, "invalid sender"),
    Rule::clause(D, C::Fatal, "negative value"),
    Rule::clause(D, C::Fatal, "oversized data"),
    Rule::clause(D, C::Fatal, "gas uint64 overflow"),
    Rule::clause(D, C::Fatal, "intrinsic gas too low"),
];
