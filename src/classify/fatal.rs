use crate::classify::Category;
use crate::classify::evaluator::CategoryFlags;
use crate::normalize::NormalizedMessage;
use crate::table::PatternTable;

/// Whether resubmitting this exact transaction can never succeed.
///
/// Only the fatal-only rules and the caller's forced-fatal marker decide.
/// Category flags are consulted solely to report a fatal verdict that lands
/// on a message also recognised as transient.
pub fn aggregate(table: &PatternTable, msg: &NormalizedMessage, flags: &CategoryFlags) -> bool {
    if msg.is_forced_fatal() {
        return true;
    }

    let fatal = table.matches(Category::Fatal, msg);
    if fatal {
        let transient: Vec<Category> = flags.iter().filter(|c| c.is_transient()).collect();
        if !transient.is_empty() {
            tracing::warn!(
                ?transient,
                message = msg.full(),
                "fatal send error also matched transient categories"
            );
        }
    }
    fatal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::evaluator::evaluate;
    use crate::types::SubmissionError;

    fn fatal(text: &str) -> bool {
        let table = PatternTable::builtin();
        let msg = NormalizedMessage::from_text(text);
        aggregate(table, &msg, &evaluate(table, &msg))
    }

    #[test]
    fn protocol_rejections_are_fatal() {
        assert!(fatal("exceeds block gas limit"));
        assert!(fatal("Invalid RLP data: some old bollocks"));
        assert!(fatal("execution reverted: stale report"));
        assert!(fatal("call failed: GasLimitExceeded, Gas limit: 100, gas limit of rejected tx: 150"));
    }

    #[test]
    fn transient_and_unknown_errors_are_not_fatal() {
        assert!(!fatal("insufficient funds for transfer"));
        assert!(!fatal("tx dropped due to L2 congestion"));
        assert!(!fatal("queue full"));
        assert!(!fatal("nonce too low"));
        assert!(!fatal("some old bollocks"));
        assert!(!fatal(""));
    }

    #[test]
    fn forced_fatal_wins_over_text() {
        let table = PatternTable::builtin();
        let err = SubmissionError::fatal("nonce too low");
        let msg = crate::normalize::normalize(Some(&err));
        assert!(msg.is_some_and(|m| aggregate(table, &m, &evaluate(table, &m))));
    }
}
