//! Shared fixtures for unit tests

use crate::product::ProductConfig;
use crate::prompt::{Prompter, SelectPrompt, TextPrompt};
use crate::templates::catalog::{TemplateFamily, TemplateVariant};
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;

pub const FAMILIES: &[TemplateFamily] = &[
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
    TemplateFamily {
        id: "vanilla",
        display_name: "Vanilla",
        variants: &[],
    },
];

#[derive(Clone)]
pub struct TestConfig;

impl ProductConfig for TestConfig {
    fn name(&self) -> &'static str {
        "create-test"
    }

    fn display_name(&self) -> &'static str {
        "Create Test"
    }

    fn cli_description(&self) -> &'static str {
        "Scaffolder used by unit tests"
    }

    fn families(&self) -> &'static [TemplateFamily] {
        FAMILIES
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_TEST_TEMPLATE_DIR"
    }

    fn default_template_dir(&self) -> PathBuf {
        PathBuf::from("templates")
    }
}

/// One scripted operator action
#[derive(Debug, Clone)]
pub enum Reply {
    Text(&'static str),
    Select(usize),
    Cancel,
}

/// Prompter that replays scripted replies and records every question asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    pub asked: Vec<String>,
    pub defaults: Vec<String>,
    pub choices: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            ..Self::default()
        }
    }

    fn next_reply(&mut self) -> io::Result<Reply> {
        self.replies
            .pop_front()
            .ok_or_else(|| io::Error::other("script exhausted"))
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, prompt: &TextPrompt<'_>) -> io::Result<String> {
        self.defaults.push(prompt.default.clone());
        loop {
            self.asked.push(prompt.message.to_string());
            let answer = match self.next_reply()? {
                Reply::Text("") => prompt.default.clone(),
                Reply::Text(text) => text.to_string(),
                Reply::Cancel => {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "cancelled"))
                }
                Reply::Select(_) => return Err(io::Error::other("expected a text reply")),
            };
            match prompt.validate {
                Some(validate) if validate(&answer).is_err() => continue,
                _ => return Ok(answer),
            }
        }
    }

    fn select(&mut self, prompt: &SelectPrompt<'_>) -> io::Result<usize> {
        self.asked.push(prompt.message.to_string());
        self.choices.push(
            prompt
                .options
                .iter()
                .map(|option| option.label.to_string())
                .collect(),
        );
        match self.next_reply()? {
            Reply::Select(idx) => Ok(idx),
            Reply::Cancel => Err(io::Error::new(io::ErrorKind::Interrupted, "cancelled")),
            Reply::Text(_) => Err(io::Error::other("expected a select reply")),
        }
    }
}
