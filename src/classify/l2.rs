use serde::Serialize;

use crate::classify::Category;
use crate::classify::evaluator::CategoryFlags;

/// Sequencer/rollup admission verdicts, layered on the generic categories.
///
/// These never feed the fatal verdict: a sequencer that is full or wants a
/// higher fee today may accept the same payload later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct L2Status {
    /// Offered fee is below what the sequencer currently requires.
    pub fee_too_low: bool,
    /// Converse of `fee_too_low`. No built-in rule sets it.
    pub fee_too_high: bool,
    /// Sequencer queue or pending pool refused admission.
    pub full: bool,
}

impl L2Status {
    pub const CATEGORIES: [Category; 3] =
        [Category::L2FeeTooLow, Category::L2FeeTooHigh, Category::L2Full];

    pub fn from_flags(flags: &CategoryFlags) -> Self {
        Self {
            fee_too_low: flags.get(Category::L2FeeTooLow),
            fee_too_high: flags.get(Category::L2FeeTooHigh),
            full: flags.get(Category::L2Full),
        }
    }

    pub fn any(&self) -> bool {
        self.fee_too_low || self.fee_too_high || self.full
    }
}
