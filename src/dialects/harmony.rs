use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::Harmony;

pub const RULES: &[Rule] = &[
    Rule::clause(D, C::TransactionAlreadyMined, "transaction already finalized"),
    Rule::clause(D, C::Fatal, "invalid shard"),
    Rule::clause(D, C::Fatal, "`to` address of transaction in blacklist"),
    Rule::clause(D, C::Fatal, "`from` address of transaction in blacklist"),
    Rule::clause(
        D,
        C::Fatal,
        "staking message does not match directive message",
    ),
];
