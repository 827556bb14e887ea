use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::Klaytn;

pub const RULES: &[Rule] = &[
    Rule::clause(D, C::NonceTooLow, "nonce too low"),
    Rule::clause(D, C::ReplacementUnderpriced, "replacement transaction underpriced"),
    Rule::regex(
        D,
        C::ReplacementUnderpriced,
        r"there is another tx which has the same nonce in the tx pool$",
    ),
    Rule::clause(D, C::TransactionAlreadyInMempool, "known transaction"),
    Rule::clause(D, C::TerminallyUnderpriced, "transaction underpriced"),
    // Klaytn rejects below its fixed unit price this way; the other clients'
    // "intrinsic gas too low" stays fatal through their own rules.
    Rule::clause(D, C::TerminallyUnderpriced, "intrinsic gas too low"),
    Rule::clause(D, C::InsufficientFunds, "insufficient funds"),
    Rule::clause(D, C::TxFeeExceedsCap, "invalid gas fee cap"),
    Rule::clause(
        D,
        C::TxFeeExceedsCap,
        "max fee per gas higher than max priority fee per gas",
    ),
];
