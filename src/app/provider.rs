//! The seam to the remote project service.
//!
//! The engine never performs network I/O itself; a concrete HTTP client
//! implements [`ProjectProvider`] outside this crate, and tests supply an
//! in-memory double.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A project as listed by the service, without its file listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
    pub path: String,
}

/// Full project metadata: the flat file listing this crate's tree and
/// selection engine operate on. Paths are relative to the project root,
/// `/`-separated, never empty, no trailing separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub path: String,
    pub files: Vec<String>,
}

/// Errors surfaced by a [`ProjectProvider`] implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid or missing API key")]
    Unauthorized,

    #[error("project '{0}' not found")]
    ProjectNotFound(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// The content/metadata service the session talks to.
#[async_trait]
pub trait ProjectProvider: Send + Sync {
    /// Lists the projects the service knows about.
    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, ProviderError>;

    /// Fetches one project's metadata including its flat file listing.
    async fn project_metadata(&self, name: &str) -> Result<Project, ProviderError>;

    /// Fetches the aggregated text content for `paths`. An empty `paths`
    /// slice means "the entire project" (see
    /// [`crate::core::RequestPlanner::plan`]).
    async fn project_content(&self, name: &str, paths: &[String])
        -> Result<String, ProviderError>;
}
