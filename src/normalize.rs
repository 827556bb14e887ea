use crate::types::SubmissionError;

/// The flattened text of a [`SubmissionError`] that rules are matched against.
///
/// Both the leaf cause and the full context-prefixed text are kept: some
/// dialects are recognised by a phrase anchored at the start of the client's
/// own message, others by a clause that follows a transport prefix such as
/// `"call failed: "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMessage {
    cause: String,
    full: String,
    rpc_code: Option<i64>,
    forced_fatal: bool,
}

/// Returns `None` for the no-error sentinel; classification of `None` is
/// all-false and never touches the pattern table.
pub fn normalize(error: Option<&SubmissionError>) -> Option<NormalizedMessage> {
    let error = error?;
    Some(NormalizedMessage {
        cause: error.message().to_string(),
        full: error.to_string(),
        rpc_code: error.rpc_code(),
        forced_fatal: error.is_forced_fatal(),
    })
}

impl NormalizedMessage {
    pub fn from_text(text: &str) -> Self {
        Self {
            cause: text.to_string(),
            full: text.to_string(),
            rpc_code: None,
            forced_fatal: false,
        }
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }

    pub fn full(&self) -> &str {
        &self.full
    }

    pub fn rpc_code(&self) -> Option<i64> {
        self.rpc_code
    }

    pub fn is_forced_fatal(&self) -> bool {
        self.forced_fatal
    }

    /// The distinct whole-message texts: the leaf cause, then the full text
    /// when context was present.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.cause.as_str())
            .chain((self.full != self.cause).then_some(self.full.as_str()))
    }

    /// The full text followed by every tail that starts after a `": "`
    /// separator. The leaf cause is always one of them.
    pub fn clauses(&self) -> impl Iterator<Item = &str> {
        let full = self.full.as_str();
        std::iter::once(full).chain(
            full.match_indices(": ")
                .filter_map(move |(i, sep)| full.get(i + sep.len()..)),
        )
    }
}
