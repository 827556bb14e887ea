#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classify;
pub mod dialects;
pub mod error;
pub mod normalize;
pub mod table;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classify::disposition::{DISPOSITION_PRECEDENCE, Disposition};
pub use classify::evaluator::CategoryFlags;
pub use classify::l2::L2Status;
pub use classify::{Category, ClassificationResult, Classifier, RuleHit, classify};
pub use dialects::{CategoryRule, Dialect, MatchKind, PRECEDENCE, Precedence};
pub use error::Error;
pub use normalize::{NormalizedMessage, normalize};
pub use table::PatternTable;
pub use types::{RpcError, SubmissionError};
