use serde::Serialize;

use crate::classify::{Category, ClassificationResult};

/// What the broadcaster should do with a failed send.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// No error was reported.
    Success,
    /// The transaction can never be accepted as submitted; stop and alert.
    Abandon,
    /// The node already holds or mined this transaction; nothing to resend.
    TreatAsSuccess,
    /// The nonce was consumed; refresh it before resubmitting.
    RefreshNonce,
    /// Resubmit with a higher fee.
    BumpFee,
    /// The sender cannot cover value plus gas; retry once funded.
    AwaitFunds,
    /// The node refuses the total fee; bumping further cannot help.
    FeeCapExceeded,
    /// Transient node or sequencer condition; resend unchanged later.
    RetryLater,
    /// Unrecognised error; treated as retryable.
    Unknown,
}

/// First row whose categories intersect the result wins.
pub const DISPOSITION_PRECEDENCE: &[(&[Category], Disposition)] = &[
    (&[Category::Fatal], Disposition::Abandon),
    (
        &[
            Category::TransactionAlreadyInMempool,
            Category::TransactionAlreadyMined,
        ],
        Disposition::TreatAsSuccess,
    ),
    (&[Category::NonceTooLow], Disposition::RefreshNonce),
    (
        &[
            Category::ReplacementUnderpriced,
            Category::TerminallyUnderpriced,
            Category::TemporarilyUnderpriced,
            Category::L2FeeTooLow,
        ],
        Disposition::BumpFee,
    ),
    (&[Category::InsufficientFunds], Disposition::AwaitFunds),
    (&[Category::TxFeeExceedsCap], Disposition::FeeCapExceeded),
    (
        &[
            Category::NonceTooHigh,
            Category::ServiceUnavailable,
            Category::L2Full,
            Category::L2FeeTooHigh,
        ],
        Disposition::RetryLater,
    ),
];

pub fn disposition_for(result: &ClassificationResult) -> Disposition {
    if !result.has_error() {
        return Disposition::Success;
    }
    DISPOSITION_PRECEDENCE
        .iter()
        .find(|(categories, _)| categories.iter().any(|c| result.get(*c)))
        .map_or(Disposition::Unknown, |(_, d)| *d)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::classify::classify;
    use crate::types::SubmissionError;

    fn disposition(text: &str) -> Disposition {
        disposition_for(&classify(Some(&SubmissionError::new(text))))
    }

    #[test]
    fn every_category_has_a_disposition() {
        for category in Category::iter() {
            assert!(
                DISPOSITION_PRECEDENCE
                    .iter()
                    .any(|(cats, _)| cats.contains(&category)),
                "{category} has no disposition"
            );
        }
    }

    #[test]
    fn caller_actions_follow_the_classification() {
        assert_eq!(disposition_for(&classify(None)), Disposition::Success);
        assert_eq!(disposition("exceeds block gas limit"), Disposition::Abandon);
        assert_eq!(disposition("already known"), Disposition::TreatAsSuccess);
        assert_eq!(
            disposition("transaction already finalized"),
            Disposition::TreatAsSuccess
        );
        assert_eq!(disposition("nonce too low"), Disposition::RefreshNonce);
        assert_eq!(
            disposition("replacement transaction underpriced"),
            Disposition::BumpFee
        );
        assert_eq!(disposition("FeeTooLowToCompete"), Disposition::BumpFee);
        assert_eq!(
            disposition("insufficient funds for transfer"),
            Disposition::AwaitFunds
        );
        assert_eq!(
            disposition("Transaction fee cap exceeded"),
            Disposition::FeeCapExceeded
        );
        assert_eq!(disposition("queue full"), Disposition::RetryLater);
        assert_eq!(disposition("call failed: NonceGap"), Disposition::RetryLater);
        assert_eq!(disposition("some old bollocks"), Disposition::Unknown);
    }

    #[test]
    fn fatal_outranks_transient_categories() {
        // Klaytn files this under underpriced; the other clients reject it outright.
        assert_eq!(disposition("intrinsic gas too low"), Disposition::Abandon);
    }

    #[test]
    fn disposition_names_roundtrip() {
        assert_eq!(Disposition::BumpFee.to_string(), "bump_fee");
        assert_eq!(
            "treat_as_success".parse::<Disposition>().ok(),
            Some(Disposition::TreatAsSuccess)
        );
    }
}
