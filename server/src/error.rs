//! Host start-up errors.

/// Anything that stops the web host from serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// `[workspace.metadata.leptos]` or its `LEPTOS_*` overrides are unusable.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    /// The server loop exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
