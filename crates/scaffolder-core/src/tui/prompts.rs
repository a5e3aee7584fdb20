//! Charm-style CLI prompts using cliclack

use crate::flow::{FlowContext, PromptFlow, Resolution};
use crate::product::ProductConfig;
use crate::prompt::Prompter;
use crate::project;
use crate::templates::TemplateSource;
use crate::tui::CliclackPrompter;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the bundled ones
    pub template_dir: Option<PathBuf>,

    /// Template id to use (skips the template questions)
    pub template: Option<String>,

    /// Project directory to create (skips the project name question)
    pub directory: Option<String>,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    run_with(config, args, &mut CliclackPrompter, &cwd).await
}

/// Run the create flow with a given question engine, creating the project under `cwd`
pub async fn run_with<C: ProductConfig, P: Prompter>(
    config: &C,
    args: CreateArgs,
    prompter: &mut P,
    cwd: &Path,
) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Locate templates
    let source = TemplateSource::resolve(config, args.template_dir.clone());
    cliclack::log::info(format!("Using templates from {}", source.root().display()))?;

    // Step 2: Apply flags before asking anything
    let context = FlowContext::prefilled(args.directory.as_deref(), args.template.as_deref());
    if let Some(dir) = &context.target_dir {
        cliclack::log::info(format!("Using directory: {}", dir))?;
    }
    if let Some(template_id) = &context.template_id {
        source.template_dir(template_id)?;
        cliclack::log::info(format!("Using template: {}", template_id))?;
    }

    // Step 3: Ask the remaining questions
    let flow = PromptFlow::new(config.families(), config.default_project_name());
    let resolved = match flow
        .resolve(prompter, context)
        .context("Failed to read answers")?
    {
        Resolution::Resolved(resolved) => resolved,
        Resolution::Cancelled => {
            cliclack::outro_cancel("Operation cancelled")?;
            return Ok(());
        }
    };

    // Step 4: Create project
    let root = project::project_root(cwd, &resolved);
    let existing = project::count_entries(&root).await;
    if existing > 0 {
        cliclack::log::warning(format!(
            "Directory has {} existing items; files with the same name will be overwritten",
            existing
        ))?;
    }
    cliclack::log::step(format!(
        "Creating a new app in {}",
        root.display().to_string().green()
    ))?;

    let created = project::create_project(&source, &resolved, cwd)
        .await
        .with_context(|| {
            format!("Failed to create project from template '{}'", resolved.template_id)
        })?;
    cliclack::log::info(format!(
        "Wrote {} files in {}",
        created.files.len(),
        created.root.display()
    ))?;

    // Step 5: Show next steps
    cliclack::log::success(format!(
        "Done! Created a new app at \"{}\".",
        resolved.target_dir
    ))?;
    print_next_steps(config, cwd, &created.root)?;

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, cwd: &Path, root: &Path) -> Result<()> {
    let steps = config.next_steps(cwd, root);

    println!();
    println!("  Now run:");
    println!();

    for step in &steps {
        println!("    {}", step.cyan());
    }
    println!();

    cliclack::outro("Happy coding!")?;

    Ok(())
}
