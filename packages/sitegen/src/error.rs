//! Typed errors for the sitegen library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during generation, deployment, and project
/// operations.
#[derive(Debug, Error)]
pub enum SitegenError {
    /// Required credential or setting missing; fatal to the attempted
    /// operation, surfaced before any network call.
    #[error("config error: {0}")]
    Config(String),

    /// Model call failed or returned unusable content. The caller retries
    /// by resubmitting; there is no automatic retry.
    #[error("generation failed: {0}")]
    Generation(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A single hosting provider failed. Contained within the deployer,
    /// logged, and converted into a fallback to the next host.
    #[error("host {host} failed: {source}")]
    Host {
        host: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Every configured host was tried and failed.
    #[error("all hosts failed after {} attempts", .attempts.len())]
    AllHostsFailed { attempts: Vec<HostAttempt> },

    /// Acting user does not own the record. Deliberately generic so that
    /// it reveals nothing about other users' records.
    #[error("unauthorized access to project")]
    Authorization,

    /// Project not found in the store
    #[error("project not found: {id}")]
    ProjectNotFound { id: Uuid },

    /// Archive read/write failed
    #[error("archive error: {0}")]
    Archive(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Record of one failed hosting attempt, kept so that total failure can
/// report which hosts failed and why.
#[derive(Debug, Clone)]
pub struct HostAttempt {
    pub host: String,
    pub reason: String,
}

/// Result type alias for sitegen operations.
pub type Result<T> = std::result::Result<T, SitegenError>;
