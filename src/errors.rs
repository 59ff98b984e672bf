use thiserror::Error;

/// Errors that can occur while resolving and synthesizing interpolation expressions.
#[derive(Error, Debug)]
pub enum HclExprError {
    #[error("unsupported Terraform feature: {feature} (expression: {expression})")]
    UnsupportedFeature { feature: String, expression: String },

    #[error("unknown reference: {expression} was not found in {catalog}")]
    UnknownReference { expression: String, catalog: String },

    #[error("text discarded around single reference: {discarded:?} (expression: {expression})")]
    DiscardedText {
        expression: String,
        discarded: String,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `HclExprError`.
pub type Result<T> = std::result::Result<T, HclExprError>;
