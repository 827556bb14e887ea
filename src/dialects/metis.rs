use super::{CategoryRule as Rule, Dialect};
use crate::classify::Category as C;

const D: Dialect = Dialect::Metis;

pub const RULES: &[Rule] = &[Rule::regex(
    D,
    C::L2FeeTooLow,
    r"(?:: |^)gas price too low: \d+ wei, use at least tx\.gasPrice = \d+ wei$",
)];
