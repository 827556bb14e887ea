use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::Nethermind;

/// Nethermind answers with an `AcceptTxResult` code, optionally followed by
/// `", <detail>"` whose numbers change on every rejection.
pub const RULES: &[Rule] = &[
    // The sender already executed a transaction with this nonce.
    Rule::error_code(D, C::NonceTooLow, "OldNonce"),
    Rule::error_code(D, C::NonceTooHigh, "NonceGap"),
    // Fee too low to be accepted into the pool at all.
    Rule::error_code(D, C::TerminallyUnderpriced, "FeeTooLow"),
    Rule::error_code(D, C::TerminallyUnderpriced, "FeeTooLowToCompete"),
    // Same hash seen before, or same nonce already signed locally and pending.
    Rule::error_code(D, C::TransactionAlreadyInMempool, "AlreadyKnown"),
    Rule::error_code(D, C::TransactionAlreadyInMempool, "OwnNonceAlreadyUsed"),
    Rule::error_code(D, C::InsufficientFunds, "InsufficientFunds"),
    Rule::clause_prefix(D, C::ServiceUnavailable, "503 Service Unavailable: "),
    Rule::error_code(D, C::Fatal, "SenderIsContract"),
    Rule::error_code(D, C::Fatal, "Invalid"),
    Rule::error_code(D, C::Fatal, "Int256Overflow"),
    Rule::error_code(D, C::Fatal, "FailedToResolveSender"),
    Rule::error_code(D, C::Fatal, "GasLimitExceeded"),
];
