/// Result alias used throughout the crate.
pub type SlideResult<T> = Result<T, SlideError>;

/// Error taxonomy for the slide pipeline.
///
/// Every stage fails fast with one of these kinds; the orchestrator surfaces
/// [`SlideError::kind`] together with the message.
#[derive(thiserror::Error, Debug)]
pub enum SlideError {
    /// Malformed or empty input text (no slide blocks found).
    #[error("parse error: {0}")]
    Parse(String),

    /// A specific slide could not be rasterized.
    #[error("render error: {0}")]
    Render(String),

    /// Caller-supplied input rejected before any work started (e.g. no frames).
    #[error("input error: {0}")]
    Input(String),

    /// Video assembly failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid pipeline configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Anything else, with its original source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideError {
    /// Build a [`SlideError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`SlideError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SlideError::Input`].
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`SlideError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SlideError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable lowercase name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Render(_) => "render",
            Self::Input(_) => "input",
            Self::Encode(_) => "encode",
            Self::Config(_) => "config",
            Self::Other(_) => "other",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
