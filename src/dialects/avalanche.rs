use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::Avalanche;

pub const RULES: &[Rule] = &[Rule::regex(
    D,
    C::NonceTooLow,
    r"(?:: |^)nonce too low: address 0x[0-9a-fA-F]{40} current nonce \(\d+\) > tx nonce \(\d+\)$",
)];
