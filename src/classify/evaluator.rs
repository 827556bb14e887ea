use strum::{EnumCount, IntoEnumIterator};

use crate::classify::Category;
use crate::normalize::NormalizedMessage;
use crate::table::PatternTable;

/// One boolean per [`Category`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFlags([bool; Category::COUNT]);

impl CategoryFlags {
    pub fn get(&self, category: Category) -> bool {
        self.0[category as usize]
    }

    fn set(&mut self, category: Category, value: bool) {
        self.0[category as usize] = value;
    }

    /// Categories whose flag is set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::iter().filter(|c| self.get(*c))
    }
}

/// Evaluates every non-fatal category against `table`.
///
/// Each category first gets its raw verdict from its own rules. A category
/// that loses a [`crate::dialects::Precedence`] is then false whenever the
/// winner's rules claimed the message. Both steps read only raw verdicts, so
/// the result does not depend on rule or precedence order.
pub fn evaluate(table: &PatternTable, msg: &NormalizedMessage) -> CategoryFlags {
    let mut raw = CategoryFlags::default();
    for category in Category::iter().filter(|c| *c != Category::Fatal) {
        raw.set(category, table.matches(category, msg));
    }

    let mut flags = CategoryFlags::default();
    for category in raw.iter() {
        let claimed_by = table
            .precedence()
            .iter()
            .find(|p| p.loser == category && raw.get(p.winner));
        match claimed_by {
            Some(p) => tracing::trace!(
                %category,
                winner = %p.winner,
                precedence = p.name,
                "category suppressed by precedence"
            ),
            None => flags.set(category, true),
        }
    }
    flags
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::dialects::{CategoryRule, Dialect};

    fn eval(text: &str) -> CategoryFlags {
        evaluate(PatternTable::builtin(), &NormalizedMessage::from_text(text))
    }

    #[test]
    fn fatal_is_never_set_by_the_evaluator() {
        assert!(!eval("exceeds block gas limit").get(Category::Fatal));
    }

    #[test]
    fn replacement_suppresses_an_overlapping_terminal_rule() {
        let table = PatternTable::builtin()
            .extend([CategoryRule::substring(
                Dialect::Other,
                Category::TerminallyUnderpriced,
                "underpriced",
            )])
            .unwrap();

        let replacement = evaluate(
            &table,
            &NormalizedMessage::from_text("replacement transaction underpriced"),
        );
        assert!(replacement.get(Category::ReplacementUnderpriced));
        assert!(!replacement.get(Category::TerminallyUnderpriced));

        let generic = evaluate(&table, &NormalizedMessage::from_text("transaction underpriced"));
        assert!(generic.get(Category::TerminallyUnderpriced));
        assert!(!generic.get(Category::ReplacementUnderpriced));
    }

    #[test]
    fn queue_limit_suppresses_an_overlapping_terminal_rule() {
        let table = PatternTable::builtin()
            .extend([CategoryRule::substring(
                Dialect::Other,
                Category::TerminallyUnderpriced,
                "Try increasing the",
            )])
            .unwrap();

        let queue = evaluate(
            &table,
            &NormalizedMessage::from_text(
                "There are too many transactions in the queue. Your transaction was dropped due to limit. Try increasing the fee.",
            ),
        );
        assert!(queue.get(Category::TemporarilyUnderpriced));
        assert!(!queue.get(Category::TerminallyUnderpriced));

        let minimum = evaluate(
            &table,
            &NormalizedMessage::from_text(
                "Transaction gas price is too low. It does not satisfy your node's minimal gas price (minimal: 100 got: 50). Try increasing the gas price.",
            ),
        );
        assert!(minimum.get(Category::TerminallyUnderpriced));
        assert!(!minimum.get(Category::TemporarilyUnderpriced));
    }

    #[test]
    fn unrelated_categories_can_coexist() {
        let flags = eval("max fee per gas less than block base fee");
        assert_eq!(
            flags.iter().collect::<Vec<_>>(),
            vec![Category::TerminallyUnderpriced, Category::L2FeeTooLow]
        );
    }

    #[test]
    fn unknown_text_sets_nothing() {
        assert_eq!(eval("some old bollocks"), CategoryFlags::default());
        assert_eq!(eval(""), CategoryFlags::default());
    }
}
