pub mod disposition;
pub mod evaluator;
pub mod fatal;
pub mod l2;

use serde::Serialize;

use crate::dialects::{CategoryRule, Dialect, MatchKind};
use crate::normalize::{NormalizedMessage, normalize};
use crate::table::PatternTable;
use crate::types::SubmissionError;
use disposition::{Disposition, disposition_for};
use evaluator::CategoryFlags;
use l2::L2Status;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NonceTooLow,
    NonceTooHigh,
    TransactionAlreadyInMempool,
    TransactionAlreadyMined,
    ReplacementUnderpriced,
    TerminallyUnderpriced,
    TemporarilyUnderpriced,
    InsufficientFunds,
    ServiceUnavailable,
    TxFeeExceedsCap,
    L2FeeTooLow,
    L2FeeTooHigh,
    L2Full,
    /// Rules filed here feed the fatal verdict only.
    Fatal,
}

impl Category {
    /// Conditions that may clear without changing the payload.
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            Self::NonceTooLow
                | Self::NonceTooHigh
                | Self::TransactionAlreadyInMempool
                | Self::TransactionAlreadyMined
                | Self::TemporarilyUnderpriced
                | Self::InsufficientFunds
                | Self::ServiceUnavailable
                | Self::L2FeeTooLow
                | Self::L2FeeTooHigh
                | Self::L2Full
        )
    }

    pub fn is_l2(self) -> bool {
        matches!(self, Self::L2FeeTooLow | Self::L2FeeTooHigh | Self::L2Full)
    }
}

/// Verdict for one submission error. All flags are false for "no error".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub has_error: bool,
    pub nonce_too_low: bool,
    pub nonce_too_high: bool,
    pub transaction_already_in_mempool: bool,
    pub transaction_already_mined: bool,
    pub replacement_underpriced: bool,
    pub terminally_underpriced: bool,
    pub temporarily_underpriced: bool,
    pub insufficient_funds: bool,
    pub service_unavailable: bool,
    pub tx_fee_exceeds_cap: bool,
    pub l2: L2Status,
    pub fatal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_code: Option<i64>,
}

impl ClassificationResult {
    fn from_parts(flags: &CategoryFlags, fatal: bool, rpc_code: Option<i64>) -> Self {
        Self {
            has_error: true,
            nonce_too_low: flags.get(Category::NonceTooLow),
            nonce_too_high: flags.get(Category::NonceTooHigh),
            transaction_already_in_mempool: flags.get(Category::TransactionAlreadyInMempool),
            transaction_already_mined: flags.get(Category::TransactionAlreadyMined),
            replacement_underpriced: flags.get(Category::ReplacementUnderpriced),
            terminally_underpriced: flags.get(Category::TerminallyUnderpriced),
            temporarily_underpriced: flags.get(Category::TemporarilyUnderpriced),
            insufficient_funds: flags.get(Category::InsufficientFunds),
            service_unavailable: flags.get(Category::ServiceUnavailable),
            tx_fee_exceeds_cap: flags.get(Category::TxFeeExceedsCap),
            l2: L2Status::from_flags(flags),
            fatal,
            rpc_code,
        }
    }

    pub fn get(&self, category: Category) -> bool {
        match category {
            Category::NonceTooLow => self.nonce_too_low,
            Category::NonceTooHigh => self.nonce_too_high,
            Category::TransactionAlreadyInMempool => self.transaction_already_in_mempool,
            Category::TransactionAlreadyMined => self.transaction_already_mined,
            Category::ReplacementUnderpriced => self.replacement_underpriced,
            Category::TerminallyUnderpriced => self.terminally_underpriced,
            Category::TemporarilyUnderpriced => self.temporarily_underpriced,
            Category::InsufficientFunds => self.insufficient_funds,
            Category::ServiceUnavailable => self.service_unavailable,
            Category::TxFeeExceedsCap => self.tx_fee_exceeds_cap,
            Category::L2FeeTooLow => self.l2.fee_too_low,
            Category::L2FeeTooHigh => self.l2.fee_too_high,
            Category::L2Full => self.l2.full,
            Category::Fatal => self.fatal,
        }
    }

    /// Set categories (including [`Category::Fatal`]) in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        use strum::IntoEnumIterator;
        Category::iter().filter(|c| self.get(*c))
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn is_nonce_too_low(&self) -> bool {
        self.nonce_too_low
    }

    pub fn is_nonce_too_high(&self) -> bool {
        self.nonce_too_high
    }

    /// The node already holds this transaction in its pool.
    pub fn is_transaction_already_in_mempool(&self) -> bool {
        self.transaction_already_in_mempool
    }

    pub fn is_transaction_already_mined(&self) -> bool {
        self.transaction_already_mined
    }

    /// A transaction with this nonce is pending and the fee bump was too small.
    pub fn is_replacement_underpriced(&self) -> bool {
        self.replacement_underpriced
    }

    /// The fee is below what the node will ever accept into its pool.
    pub fn is_terminally_underpriced(&self) -> bool {
        self.terminally_underpriced
    }

    /// The pool is at its limit; the same transaction may be accepted later.
    pub fn is_temporarily_underpriced(&self) -> bool {
        self.temporarily_underpriced
    }

    pub fn is_insufficient_funds(&self) -> bool {
        self.insufficient_funds
    }

    pub fn is_service_unavailable(&self) -> bool {
        self.service_unavailable
    }

    /// Gas price and limit combine into a total fee above the node's cap.
    /// No retry at this or a higher price can succeed.
    pub fn is_tx_fee_exceeds_cap(&self) -> bool {
        self.tx_fee_exceeds_cap
    }

    pub fn is_l2_fee_too_low(&self) -> bool {
        self.l2.fee_too_low
    }

    pub fn is_l2_fee_too_high(&self) -> bool {
        self.l2.fee_too_high
    }

    pub fn is_l2_full(&self) -> bool {
        self.l2.full
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    pub fn l2(&self) -> L2Status {
        self.l2
    }

    pub fn disposition(&self) -> Disposition {
        disposition_for(self)
    }
}

/// A rule that matched, as reported by [`Classifier::explain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub category: Category,
    pub dialect: Dialect,
    pub kind: MatchKind,
    pub pattern: &'static str,
}

impl From<&CategoryRule> for RuleHit {
    fn from(rule: &CategoryRule) -> Self {
        Self {
            category: rule.category,
            dialect: rule.dialect,
            kind: rule.kind,
            pattern: rule.pattern,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Classifier<'t> {
    table: &'t PatternTable,
}

impl<'t> Classifier<'t> {
    pub fn new(table: &'t PatternTable) -> Self {
        Self { table }
    }

    pub fn builtin() -> Classifier<'static> {
        Classifier::new(PatternTable::builtin())
    }

    pub fn classify(&self, error: Option<&SubmissionError>) -> ClassificationResult {
        let Some(msg) = normalize(error) else {
            return ClassificationResult::default();
        };
        self.classify_normalized(&msg)
    }

    pub fn classify_message(&self, message: &str) -> ClassificationResult {
        self.classify_normalized(&NormalizedMessage::from_text(message))
    }

    pub fn classify_error(&self, err: &(dyn std::error::Error + 'static)) -> ClassificationResult {
        self.classify(Some(&SubmissionError::from_error(err)))
    }

    pub fn classify_normalized(&self, msg: &NormalizedMessage) -> ClassificationResult {
        let flags = evaluator::evaluate(self.table, msg);
        let fatal = fatal::aggregate(self.table, msg, &flags);
        let result = ClassificationResult::from_parts(&flags, fatal, msg.rpc_code());
        tracing::debug!(
            message = msg.full(),
            rpc_code = ?msg.rpc_code(),
            categories = ?result.categories().collect::<Vec<_>>(),
            "classified send error"
        );
        result
    }

    /// Every rule that matched, before precedence is applied.
    pub fn explain(&self, error: Option<&SubmissionError>) -> Vec<RuleHit> {
        normalize(error)
            .map(|msg| self.table.hits(&msg).map(RuleHit::from).collect())
            .unwrap_or_default()
    }
}

/// Classifies `error` against the built-in rules of every known dialect.
pub fn classify(error: Option<&SubmissionError>) -> ClassificationResult {
    Classifier::builtin().classify(error)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn classify_str(text: &str) -> ClassificationResult {
        classify(Some(&SubmissionError::new(text)))
    }

    fn only(result: &ClassificationResult, expected: &[Category]) {
        assert_eq!(result.categories().collect::<Vec<_>>(), expected.to_vec());
    }

    #[test]
    fn none_is_all_false() {
        let result = classify(None);
        assert_eq!(result, ClassificationResult::default());
        assert!(!result.has_error());
        assert!(Category::iter().all(|c| !result.get(c)));
    }

    #[test]
    fn unknown_text_is_an_error_with_no_category() {
        let result = classify_str("some old bollocks");
        assert!(result.has_error());
        only(&result, &[]);
    }

    #[test]
    fn nonce_too_low_is_the_only_flag() {
        only(&classify_str("nonce too low"), &[Category::NonceTooLow]);
    }

    #[test]
    fn replacement_underpriced_is_not_terminal() {
        let result = classify_str("replacement transaction underpriced");
        assert!(result.is_replacement_underpriced());
        assert!(!result.is_terminally_underpriced());
        assert!(!result.is_fatal());

        let generic = classify_str("transaction underpriced");
        assert!(generic.is_terminally_underpriced());
        assert!(!generic.is_replacement_underpriced());
    }

    #[test]
    fn insufficient_funds_is_not_fatal() {
        let result = classify_str("insufficient funds for transfer");
        assert!(result.is_insufficient_funds());
        assert!(!result.is_fatal());
    }

    #[test]
    fn exceeds_block_gas_limit_is_fatal_only() {
        only(&classify_str("exceeds block gas limit"), &[Category::Fatal]);
    }

    #[test]
    fn queue_full_is_l2_full() {
        let result = classify_str("queue full");
        assert!(result.is_l2_full());
        assert!(!result.is_fatal());
    }

    #[test]
    fn base_fee_rejection_is_l2_fee_too_low() {
        let result = classify_str("max fee per gas less than block base fee");
        assert!(result.is_l2_fee_too_low());
        assert!(!result.is_l2_fee_too_high());
    }

    #[test]
    fn classification_is_idempotent() {
        let err = SubmissionError::new("call failed: OldNonce, Current nonce: 22, nonce of rejected tx: 17")
            .wrap("primary http (http://localhost:8545)");
        let first = classify(Some(&err));
        for _ in 0..100 {
            assert_eq!(classify(Some(&err)), first);
        }
        assert!(first.is_nonce_too_low());
    }

    #[test]
    fn forced_fatal_overrides_text() {
        let result = classify(Some(&SubmissionError::fatal("already known")));
        assert!(result.is_fatal());
        assert!(result.is_transaction_already_in_mempool());
        assert_eq!(result.disposition(), Disposition::Abandon);
    }

    #[test]
    fn rpc_code_passes_through() {
        let err = SubmissionError::new("already known").with_rpc_code(-32000);
        assert_eq!(classify(Some(&err)).rpc_code, Some(-32000));
        assert_eq!(classify_str("already known").rpc_code, None);
    }

    #[test]
    fn explain_lists_raw_hits_before_precedence() {
        let table = PatternTable::builtin()
            .extend([CategoryRule::substring(
                Dialect::Other,
                Category::TerminallyUnderpriced,
                "underpriced",
            )])
            .unwrap();
        let classifier = Classifier::new(&table);
        let err = SubmissionError::new("replacement transaction underpriced");

        let hits = classifier.explain(Some(&err));
        assert!(hits.iter().any(|h| h.category == Category::ReplacementUnderpriced
            && h.dialect == Dialect::Geth));
        assert!(hits.iter().any(|h| h.category == Category::TerminallyUnderpriced
            && h.dialect == Dialect::Other));
        assert!(!classifier.classify(Some(&err)).is_terminally_underpriced());

        assert!(classifier.explain(None).is_empty());
    }

    #[test]
    fn classify_error_walks_the_source_chain() {
        #[derive(Debug)]
        struct Pool;
        impl std::fmt::Display for Pool {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("Pool(AlreadyImported)")
            }
        }
        impl std::error::Error for Pool {}

        #[derive(Debug)]
        struct Submit(Pool);
        impl std::fmt::Display for Submit {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "submit transaction to pool failed: {}", self.0)
            }
        }
        impl std::error::Error for Submit {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let result = Classifier::builtin().classify_error(&Submit(Pool));
        assert!(result.is_transaction_already_in_mempool());
        assert!(!result.is_nonce_too_low());
    }

    #[test]
    fn result_serializes_with_named_flags() {
        let value = serde_json::to_value(classify_str("queue full")).unwrap();
        assert_eq!(value["l2"]["full"], serde_json::json!(true));
        assert_eq!(value["fatal"], serde_json::json!(false));
        assert!(value.get("rpc_code").is_none());
    }

    #[test]
    fn category_names_roundtrip() {
        assert_eq!(Category::TxFeeExceedsCap.to_string(), "tx_fee_exceeds_cap");
        assert_eq!(
            "replacement_underpriced".parse::<Category>().ok(),
            Some(Category::ReplacementUnderpriced)
        );
    }
}
