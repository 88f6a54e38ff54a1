//! Error types for diagram building and export

use std::path::PathBuf;

/// Errors raised while building a diagram.
///
/// Every variant is fatal to the run: the builder aborts immediately and a
/// partial canvas is never returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A step referenced a lane identity that was never registered
    #[error("unknown lane `{0}`")]
    UnknownLane(String),

    /// Two lanes were registered with the same identity
    #[error("duplicate lane `{0}`")]
    DuplicateLane(String),

    /// More steps were supplied than the allocator has vertical slots for
    #[error("no vertical slot left for step {step}: only {slots} slots fit the canvas")]
    SlotExhausted { step: usize, slots: usize },

    /// A lane registration arrived after the guide-lines were already drawn
    #[error("lane `{0}` registered after lane drawing completed")]
    LateLaneRegistration(String),
}

/// Errors raised while serializing the finished canvas to a document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF conversion failed: {0}")]
    Pdf(String),
}
