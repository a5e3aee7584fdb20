//! Question flow that resolves what to scaffold
//!
//! The flow is a fixed sequence of steps. Each step has a skip predicate over
//! the context gathered so far, and answering a step returns the next context.
//! Values pre-filled from command-line flags go through the same predicates,
//! so a flag simply makes the matching question disappear.

use crate::naming::{format_target_dir, is_valid_package_name, to_valid_package_name};
use crate::prompt::{is_cancelled, Prompter, SelectOption, SelectPrompt, TextPrompt};
use crate::templates::catalog::TemplateFamily;
use std::io;

/// Steps of the flow, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    TargetDirectory,
    PackageName,
    TemplateFamily,
    TemplateVariant,
}

impl Step {
    pub const ORDER: [Step; 4] = [
        Step::TargetDirectory,
        Step::PackageName,
        Step::TemplateFamily,
        Step::TemplateVariant,
    ];
}

/// Answers accumulated while walking the steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowContext {
    /// Normalized target directory name
    pub target_dir: Option<String>,
    pub package_name: Option<String>,
    pub family: Option<TemplateFamily>,
    pub template_id: Option<String>,
}

impl FlowContext {
    /// Context pre-filled from command-line flags. Empty values count as absent.
    pub fn prefilled(directory: Option<&str>, template: Option<&str>) -> Self {
        Self {
            target_dir: directory
                .map(format_target_dir)
                .filter(|dir| !dir.is_empty()),
            template_id: template
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            ..Self::default()
        }
    }
}

/// Everything needed to create the project; immutable once produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub target_dir: String,
    pub package_name: String,
    pub template_id: String,
}

/// Terminal state of the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedConfig),
    Cancelled,
}

/// The question sequence for one product catalog
#[derive(Debug, Clone, Copy)]
pub struct PromptFlow<'a> {
    families: &'a [TemplateFamily],
    default_target_dir: &'a str,
}

impl<'a> PromptFlow<'a> {
    pub fn new(families: &'a [TemplateFamily], default_target_dir: &'a str) -> Self {
        Self {
            families,
            default_target_dir,
        }
    }

    /// Whether `step` has nothing left to ask given `ctx`
    pub fn should_skip(&self, step: Step, ctx: &FlowContext) -> bool {
        match step {
            Step::TargetDirectory => ctx.target_dir.is_some(),
            Step::PackageName => {
                ctx.package_name.is_some()
                    || is_valid_package_name(self.working_target_dir(ctx))
            }
            Step::TemplateFamily => ctx.template_id.is_some() || ctx.family.is_some(),
            Step::TemplateVariant => {
                ctx.template_id.is_some()
                    || ctx.family.is_some_and(|family| !family.has_variants())
            }
        }
    }

    /// Walk every step in order. An operator abort yields [`Resolution::Cancelled`];
    /// nothing here touches the filesystem.
    pub fn resolve<P: Prompter>(
        &self,
        prompter: &mut P,
        ctx: FlowContext,
    ) -> io::Result<Resolution> {
        let mut ctx = ctx;
        for step in Step::ORDER {
            if self.should_skip(step, &ctx) {
                continue;
            }
            ctx = match self.ask(step, prompter, ctx) {
                Ok(next) => next,
                Err(err) if is_cancelled(&err) => return Ok(Resolution::Cancelled),
                Err(err) => return Err(err),
            };
        }
        self.finish(ctx).map(Resolution::Resolved)
    }

    fn ask<P: Prompter>(
        &self,
        step: Step,
        prompter: &mut P,
        ctx: FlowContext,
    ) -> io::Result<FlowContext> {
        match step {
            Step::TargetDirectory => {
                let raw = prompter.text(&TextPrompt {
                    message: "Project name:",
                    default: self.default_target_dir.to_string(),
                    validate: None,
                })?;
                Ok(FlowContext {
                    target_dir: Some(format_target_dir(&raw)),
                    ..ctx
                })
            }
            Step::PackageName => {
                let name = prompter.text(&TextPrompt {
                    message: "Package name:",
                    default: to_valid_package_name(self.working_target_dir(&ctx)),
                    validate: Some(validate_package_name),
                })?;
                Ok(FlowContext {
                    package_name: Some(name),
                    ..ctx
                })
            }
            Step::TemplateFamily => {
                if self.families.is_empty() {
                    return Err(io::Error::other("No templates available."));
                }
                let options = self
                    .families
                    .iter()
                    .map(|family| SelectOption {
                        label: family.display_name,
                        hint: "",
                    })
                    .collect();
                let idx = prompter.select(&SelectPrompt {
                    message: "Select a template:",
                    options,
                })?;
                let family = self.families.get(idx).copied().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "template choice out of range")
                })?;
                Ok(FlowContext {
                    family: Some(family),
                    ..ctx
                })
            }
            Step::TemplateVariant => {
                let family = ctx.family.ok_or_else(|| {
                    io::Error::other("variant asked before a template was chosen")
                })?;
                let options = family
                    .variants
                    .iter()
                    .map(|variant| SelectOption {
                        label: variant.display_name,
                        hint: "",
                    })
                    .collect();
                let idx = prompter.select(&SelectPrompt {
                    message: "Select a variant:",
                    options,
                })?;
                let variant = family.variants.get(idx).ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "variant choice out of range")
                })?;
                Ok(FlowContext {
                    template_id: Some(variant.id.to_string()),
                    ..ctx
                })
            }
        }
    }

    fn working_target_dir<'c>(&self, ctx: &'c FlowContext) -> &'c str
    where
        'a: 'c,
    {
        ctx.target_dir.as_deref().unwrap_or(self.default_target_dir)
    }

    fn finish(&self, ctx: FlowContext) -> io::Result<ResolvedConfig> {
        let target_dir = self.working_target_dir(&ctx).to_string();
        let package_name = ctx
            .package_name
            .unwrap_or_else(|| to_valid_package_name(&target_dir));
        let template_id = match (ctx.template_id, ctx.family) {
            (Some(id), _) => id,
            (None, Some(family)) => family.template_id(None),
            (None, None) => return Err(io::Error::other("No template selected.")),
        };

        Ok(ResolvedConfig {
            target_dir,
            package_name,
            template_id,
        })
    }
}

fn validate_package_name(name: &str) -> Result<(), &'static str> {
    if is_valid_package_name(name) {
        Ok(())
    } else {
        Err("Invalid package.json name")
    }
}
