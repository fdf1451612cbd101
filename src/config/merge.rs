//! Configuration merging logic
//!
//! Priority: CLI args > kodkafa.toml > defaults

use std::path::{Path, PathBuf};

use crate::category::{Category, Selection};
use crate::document::DEFAULT_INDENT;
use crate::prompt::{AnswerDefaults, PartialAnswers};
use crate::template::TemplateSource;
use crate::Settings;

use super::file::resolve_templates_dir;
use super::toml_schema::{AnswersSection, KodkafaToml};

/// Answers fixed on the command line.
///
/// Uses `Option<T>` to distinguish "not specified" (ask) from "explicitly set".
#[derive(Debug, Default)]
pub struct CliAnswers {
    pub only: Option<Vec<Category>>,
    pub react: Option<bool>,
    pub vitest: Option<bool>,
}

/// Run settings given on the command line.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub project_root: PathBuf,
    pub templates_dir: Option<PathBuf>,
    pub indent: Option<usize>,
    pub dry_run: bool,
}

/// Merge CLI answers with the `[answers]` section.
///
/// CLI values fix an answer outright; TOML values only move the defaults
/// offered by the prompts.
pub fn merge_answers(cli: &CliAnswers, toml: Option<&AnswersSection>) -> PartialAnswers {
    let mut defaults = AnswerDefaults::default();

    if let Some(t) = toml {
        let checked = |category: Category| match category {
            Category::CompilerConfig => t.compiler.unwrap_or(true),
            Category::LintConfig => t.lint.unwrap_or(true),
            Category::FormatConfig => t.format.unwrap_or(true),
        };
        defaults.selection = Category::ALL.into_iter().filter(|c| checked(*c)).collect();
        defaults.react = t.react.unwrap_or(defaults.react);
        defaults.vitest = t.vitest.unwrap_or(defaults.vitest);
    }

    PartialAnswers {
        selection: cli
            .only
            .as_ref()
            .map(|only| only.iter().copied().collect::<Selection>()),
        react: cli.react,
        vitest: cli.vitest,
        defaults,
    }
}

/// Merge CLI settings with kodkafa.toml (and the path it was loaded from) and defaults.
pub fn merge_settings(cli: &CliSettings, toml: Option<(&Path, &KodkafaToml)>) -> Settings {
    let templates = cli
        .templates_dir
        .clone()
        .or_else(|| toml.and_then(|(path, config)| resolve_templates_dir(path, config)))
        .map_or(TemplateSource::Bundled, TemplateSource::Directory);

    Settings {
        project_root: cli.project_root.clone(),
        templates,
        indent: cli
            .indent
            .or_else(|| toml.and_then(|(_, config)| config.output.indent))
            .unwrap_or(DEFAULT_INDENT),
        dry_run: cli.dry_run,
    }
}
