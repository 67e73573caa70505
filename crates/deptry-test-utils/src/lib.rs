//! Shared test utilities for the deptry workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`project`] - [`TestProject`](project::TestProject) builder for temporary
//!   Python projects with a `pyproject.toml`

pub mod project;

pub use project::TestProject;
