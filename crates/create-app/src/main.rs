//! create-app - Generate a new app with one command

use clap::Parser;
use colored::Colorize;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{ProductConfig, TemplateFamily, TemplateVariant};
use std::ffi::OsString;
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

const FAMILIES: &[TemplateFamily] = &[
    TemplateFamily {
        id: "node",
        display_name: "Node",
        variants: &[
            TemplateVariant {
                id: "node",
                display_name: "Node Javascript",
            },
            TemplateVariant {
                id: "node-ts",
                display_name: "Node Typescript",
            },
        ],
    },
    TemplateFamily {
        id: "react",
        display_name: "React",
        variants: &[
            TemplateVariant {
                id: "react",
                display_name: "React Javascript",
            },
            TemplateVariant {
                id: "react-ts",
                display_name: "React Typescript",
            },
        ],
    },
];

/// create-app product configuration
#[derive(Clone)]
pub struct CreateAppConfig;

impl ProductConfig for CreateAppConfig {
    fn name(&self) -> &'static str {
        "create-app"
    }

    fn display_name(&self) -> &'static str {
        "Create App"
    }

    fn cli_description(&self) -> &'static str {
        "A CLI for generating a new app with one command"
    }

    fn families(&self) -> &'static [TemplateFamily] {
        FAMILIES
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_APP_TEMPLATE_DIR"
    }

    fn default_template_dir(&self) -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-app")]
#[command(about = "A CLI for generating a new app with one command")]
pub struct Args {
    /// Directory to create the project in
    #[arg(value_name = "project-directory")]
    pub project_directory: Option<String>,

    /// Specify a template for the created project
    #[arg(short, long)]
    pub template: Option<String>,

    /// Local directory containing template-<id> folders (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Stray values left behind by unknown flags
    #[arg(hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            template: args.template,
            directory: args.project_directory,
        }
    }
}

/// Options understood by [`Args`]; anything else that looks like a flag is dropped
const KNOWN_LONG: &[&str] = &["--template", "--template-dir", "--version", "--help"];
const KNOWN_SHORT: &[char] = &['t', 'v', 'h'];

/// Strip unknown flags so they are ignored instead of rejected. Values that
/// followed them are collected into [`Args::ignored`].
fn known_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut kept = Vec::new();
    let mut args = args.into_iter();

    // Binary name
    kept.extend(args.next());

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            kept.push(arg);
            continue;
        };

        if text == "--" {
            kept.push(arg);
            kept.extend(args.by_ref());
            break;
        }

        let keep = if let Some(long) = text.strip_prefix("--") {
            let name = long.split('=').next().unwrap_or(long);
            KNOWN_LONG.contains(&format!("--{}", name).as_str())
        } else if let Some(short) = text.strip_prefix('-') {
            short
                .chars()
                .next()
                .map_or(true, |c| KNOWN_SHORT.contains(&c))
        } else {
            true
        };

        if keep {
            kept.push(arg);
        }
    }

    kept
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse_from(known_args(std::env::args_os()));
    if args.version {
        println!("{}", CLI_VERSION);
        return;
    }
    let config = CreateAppConfig;

    let result = scaffolder_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
