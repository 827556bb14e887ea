use std::fmt;

use crate::error::Error;

/// An error returned by a transaction submission attempt.
///
/// Built once per failed send and handed to the classifier. Context layers
/// added by the transport (endpoint names, "call failed" prefixes, caller
/// annotations) are kept separately from the leaf message the execution
/// client produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError {
    /// Innermost message as produced by the execution client.
    message: String,
    /// Wrapping context, innermost first.
    context: Vec<String>,
    /// JSON-RPC error code, when the transport surfaced one.
    rpc_code: Option<i64>,
    /// Set by callers that already know this send can never succeed.
    forced_fatal: bool,
}

impl SubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            rpc_code: None,
            forced_fatal: false,
        }
    }

    /// An error the caller has already judged fatal, regardless of its text.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            forced_fatal: true,
            ..Self::new(message)
        }
    }

    pub fn from_rpc(rpc: &RpcError) -> Self {
        Self::new(rpc.message.clone()).with_rpc_code(rpc.code)
    }

    /// Flattens a `source()` chain into leaf message plus context layers.
    ///
    /// Outer layers whose `Display` already repeats their source (the common
    /// `"{context}: {source}"` shape) contribute only the text they add.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut layers = Vec::new();
        let mut current = Some(err);
        while let Some(e) = current {
            layers.push(e.to_string());
            current = e.source();
        }

        let Some(message) = layers.pop() else {
            return Self::new(String::new());
        };

        let mut context = Vec::with_capacity(layers.len());
        let mut inner = message.as_str();
        for outer in layers.iter().rev() {
            let added = match outer.strip_suffix(inner) {
                Some(prefix) => prefix.trim_end().trim_end_matches(':').trim_end(),
                None => outer.as_str(),
            };
            if !added.is_empty() {
                context.push(added.to_string());
            }
            inner = outer.as_str();
        }

        Self {
            context,
            ..Self::new(message)
        }
    }

    /// Adds an outer context layer, like `"{context}: {self}"`.
    pub fn wrap(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    pub fn with_rpc_code(mut self, code: i64) -> Self {
        self.rpc_code = Some(code);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Context layers, outermost first.
    pub fn context(&self) -> impl Iterator<Item = &str> {
        self.context.iter().rev().map(String::as_str)
    }

    pub fn rpc_code(&self) -> Option<i64> {
        self.rpc_code
    }

    pub fn is_forced_fatal(&self) -> bool {
        self.forced_fatal
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in self.context() {
            write!(f, "{ctx}: ")?;
        }
        f.write_str(&self.message)
    }
}

impl std::error::Error for SubmissionError {}

impl From<&str> for SubmissionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for SubmissionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&RpcError> for SubmissionError {
    fn from(rpc: &RpcError) -> Self {
        Self::from_rpc(rpc)
    }
}

/// A JSON-RPC 2.0 error object as returned by `eth_sendRawTransaction`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RpcError {
    /// JSON-RPC error code (e.g. `-32000` for most execution-client rejections).
    pub code: i64,
    /// Client-specific error text; this is what gets classified.
    pub message: String,
    /// Optional payload, e.g. revert data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    /// Parses a bare error object: `{"code": -32000, "message": "..."}`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Extracts the `error` member of a full JSON-RPC response.
    pub fn from_response(response: &serde_json::Value) -> Result<Self, Error> {
        let error = response
            .get("error")
            .filter(|e| !e.is_null())
            .ok_or_else(|| Error::Rpc {
                reason: "response has no error member".into(),
            })?;
        Ok(serde_json::from_value(error.clone())?)
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}
