//! Built-in template catalog types
//!
//! A product ships a fixed list of template families. Each family offers one
//! or more variants, and a variant id names a `template-<id>` directory in the
//! template root.

/// Prefix of every template directory inside the template root
pub const TEMPLATE_DIR_PREFIX: &str = "template-";

/// A concrete, directly instantiable template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateVariant {
    /// Template id, matching a `template-<id>` directory
    pub id: &'static str,

    /// Label shown in the variant selection
    pub display_name: &'static str,
}

/// A named group of related templates (usually a framework)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFamily {
    pub id: &'static str,
    pub display_name: &'static str,
    pub variants: &'static [TemplateVariant],
}

impl TemplateFamily {
    /// Template id used when this family is picked: the variant if one was chosen,
    /// otherwise the family itself
    pub fn template_id(&self, variant: Option<&str>) -> String {
        variant.unwrap_or(self.id).to_string()
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

/// Directory name of a template inside the template root
pub fn template_dir_name(template_id: &str) -> String {
    format!("{}{}", TEMPLATE_DIR_PREFIX, template_id)
}
