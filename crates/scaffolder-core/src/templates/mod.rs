//! Template catalog, lookup, copying and descriptor patching
//!
//! This module provides:
//! - The built-in catalog types (families and variants)
//! - Template root resolution and lookup of `template-<id>` directories
//! - Tree copying with the top-level rename table
//! - package.json patching

pub mod catalog;
pub mod copier;
pub mod descriptor;
pub mod source;

pub use catalog::{TemplateFamily, TemplateVariant};
pub use copier::copy_template;
pub use descriptor::{set_package_name, write_descriptor, DESCRIPTOR_FILE};
pub use source::TemplateSource;
