use crate::classify::Category;
use crate::dialects::Dialect;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid {dialect} pattern for {category}: {reason}")]
    Pattern {
        category: Category,
        dialect: Dialect,
        reason: String,
    },

    #[error("rpc error: {reason}")]
    Rpc { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
