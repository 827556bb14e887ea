use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::Substrate;

/// Substrate-based EVM chains (Moonriver, Moonbeam) surface the pool's
/// `InvalidTransaction` variant debug-formatted at the end of the message.
pub const RULES: &[Rule] = &[
    Rule::clause(D, C::NonceTooLow, "Pool(Stale)"),
    Rule::clause(D, C::TransactionAlreadyInMempool, "Pool(AlreadyImported)"),
];
