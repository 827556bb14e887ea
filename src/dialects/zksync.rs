use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::ZkSync;

pub const RULES: &[Rule] = &[
    // "nonce too low. allowed nonce range: 427 - 447, actual: 426"
    Rule::regex(D, C::NonceTooLow, r"(?:: |^)nonce too low\..+actual: \d*$"),
    Rule::regex(D, C::NonceTooHigh, r"(?:: |^)nonce too high\..+actual: \d*$"),
    Rule::clause(
        D,
        C::TerminallyUnderpriced,
        "max fee per gas less than block base fee",
    ),
    Rule::clause(
        D,
        C::TerminallyUnderpriced,
        "virtual machine entered unexpected state. please contact developers and provide transaction details that caused this error. Error description: The operator included transaction with an unacceptable gas price",
    ),
    Rule::clause(D, C::InsufficientFunds, "insufficient balance for transfer"),
    Rule::clause_prefix(D, C::InsufficientFunds, "insufficient funds for gas + value"),
    Rule::clause(
        D,
        C::TxFeeExceedsCap,
        "max priority fee per gas higher than max fee per gas",
    ),
    Rule::clause(D, C::Fatal, "exceeds block gas limit"),
    // gas limit below the 14700 floor
    Rule::clause(D, C::Fatal, "intrinsic gas too low"),
    // gas limit below the L2 fee
    Rule::clause(D, C::Fatal, "Not enough gas for transaction validation"),
    // gas limit below the L2 + L1 fee
    Rule::clause(D, C::Fatal, "Failed to pay the fee to the operator"),
    // contract call with a zero gas limit
    Rule::clause(D, C::Fatal, "Error function_selector = 0x, data = 0x"),
    Rule::clause(
        D,
        C::Fatal,
        "invalid sender. can't start a transaction from a non-account",
    ),
    Rule::regex(
        D,
        C::Fatal,
        r"(?:: |^)max(?: priority)? fee per (?:gas|pubdata byte) higher than 2\^64-1$",
    ),
    Rule::regex(D, C::Fatal, r"(?:: |^)oversized data\. max: \d+; actual: \d+$"),
];
