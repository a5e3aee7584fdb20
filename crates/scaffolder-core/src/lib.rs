//! Scaffolder Core - Shared library for project scaffolding CLIs
//!
//! This library turns a directory of bundled templates into new projects. A
//! binary describes its product (name, template catalog, template location)
//! through [`ProductConfig`] and hands control to [`run`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Package name rules, template lookup, tree copying, package.json patching
//! - **Layer 2: Workflow Orchestration** - The question flow ([`PromptFlow`]) over an abstract [`Prompter`], and [`create_project`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{create_project, FlowContext, PromptFlow, Resolution, TemplateSource};
//!
//! let flow = PromptFlow::new(MY_FAMILIES, "my-app");
//! let ctx = FlowContext::prefilled(Some("demo"), Some("react-ts"));
//! if let Resolution::Resolved(resolved) = flow.resolve(&mut my_prompter, ctx)? {
//!     let source = TemplateSource::new("templates");
//!     create_project(&source, &resolved, &std::env::current_dir()?).await?;
//! }
//! ```

pub mod error;
pub mod flow;
pub mod naming;
pub mod product;
pub mod project;
pub mod prompt;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use error::{ScaffoldError, ScaffoldResult};
pub use flow::{FlowContext, PromptFlow, Resolution, ResolvedConfig};
pub use naming::{is_valid_package_name, to_valid_package_name};
pub use product::ProductConfig;
pub use project::{create_project, CreatedProject};
pub use prompt::Prompter;
pub use templates::{TemplateFamily, TemplateSource, TemplateVariant};

#[cfg(feature = "tui")]
pub use tui::run;
