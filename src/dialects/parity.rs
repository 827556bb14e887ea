use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::Parity;

/// OpenEthereum/Parity. Messages are full sentences with interpolated numbers
/// in the middle, so most rules anchor on the fixed leading sentence.
pub const RULES: &[Rule] = &[
    Rule::clause_prefix(
        D,
        C::NonceTooLow,
        "Transaction nonce is too low. Try incrementing the nonce.",
    ),
    Rule::regex(
        D,
        C::ReplacementUnderpriced,
        r"^Transaction gas price \d+wei is too low\. There is another transaction with same nonce in the queue with gas price \d+wei\. Try increasing the gas price or incrementing the nonce\.",
    ),
    Rule::substring(
        D,
        C::TemporarilyUnderpriced,
        "There are too many transactions in the queue. Your transaction was dropped due to limit. Try increasing the fee.",
    ),
    Rule::substring(
        D,
        C::TransactionAlreadyInMempool,
        "Transaction with the same hash was already imported.",
    ),
    Rule::clause_prefix(
        D,
        C::TerminallyUnderpriced,
        "Transaction gas price is too low. It does not satisfy your node's minimal gas price",
    ),
    Rule::clause_prefix(
        D,
        C::InsufficientFunds,
        "Insufficient funds. The account you tried to send transaction from does not have enough funds.",
    ),
    Rule::clause_prefix(D, C::InsufficientFunds, "Insufficient balance for transaction."),
    Rule::clause_prefix(
        D,
        C::Fatal,
        "Transaction gas is too low. There is not enough gas to cover minimal cost of the transaction",
    ),
    Rule::clause_prefix(
        D,
        C::Fatal,
        "Transaction cost exceeds current gas limit. Limit:",
    ),
    Rule::clause_prefix(D, C::Fatal, "Invalid signature"),
    Rule::clause_prefix(D, C::Fatal, "Invalid RLP data"),
    Rule::clause_prefix(
        D,
        C::Fatal,
        "Transaction is too big, see chain specification for the limit",
    ),
    Rule::clause_prefix(D, C::Fatal, "Transaction is not permitted"),
    Rule::clause_prefix(D, C::Fatal, "Sender is banned in local queue"),
    Rule::clause_prefix(D, C::Fatal, "Code is banned in local queue"),
    Rule::clause_prefix(D, C::Fatal, "Recipient is banned in local queue"),
    Rule::clause_prefix(D, C::Fatal, "Supplied gas is beyond limit"),
];
