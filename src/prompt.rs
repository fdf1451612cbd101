//! Interactive answer collection

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};

use crate::category::{Answers, Category, Selection};
use crate::error::Result;

/// A yes/no question asked after the file selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    React,
    Vitest,
}

impl Question {
    pub fn text(self) -> &'static str {
        match self {
            Question::React => "Do You Use React?",
            Question::Vitest => "Do You Use Vitest in Vite for testing?",
        }
    }
}

/// Source of interactive answers.
pub trait Prompter {
    /// Ask which files to generate, with `defaults` pre-checked.
    fn select_categories(&mut self, defaults: &Selection) -> Result<Selection>;

    fn confirm(&mut self, question: Question, default: bool) -> Result<bool>;
}

/// Terminal prompts.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select_categories(&mut self, defaults: &Selection) -> Result<Selection> {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        let checked: Vec<bool> = Category::ALL.iter().map(|c| defaults.contains(*c)).collect();

        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(format!(
                "Which Files You Want to Setup Using {}?",
                style("Kodkafa Settings").yellow()
            ))
            .items(&labels)
            .defaults(&checked)
            .interact()?;

        Ok(picked.into_iter().map(|i| Category::ALL[i]).collect())
    }

    fn confirm(&mut self, question: Question, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(question.text())
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

/// Defaults offered by the prompts (or taken as-is with `--yes`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerDefaults {
    pub selection: Selection,
    pub react: bool,
    pub vitest: bool,
}

impl Default for AnswerDefaults {
    fn default() -> Self {
        Self {
            selection: Selection::all(),
            react: false,
            vitest: false,
        }
    }
}

/// Answers known before prompting; `None` means "ask".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialAnswers {
    pub selection: Option<Selection>,
    pub react: Option<bool>,
    pub vitest: Option<bool>,
    pub defaults: AnswerDefaults,
}

/// Fill in every missing answer, in order: selection, React, Vitest.
///
/// With `assume_defaults` nothing is asked and the defaults are taken.
pub fn resolve_answers(
    partial: &PartialAnswers,
    prompter: &mut dyn Prompter,
    assume_defaults: bool,
) -> Result<Answers> {
    let defaults = &partial.defaults;

    let selection = match &partial.selection {
        Some(selection) => selection.clone(),
        None if assume_defaults => defaults.selection.clone(),
        None => prompter.select_categories(&defaults.selection)?,
    };

    let mut ask = |known: Option<bool>, question: Question, default: bool| match known {
        Some(answer) => Ok(answer),
        None if assume_defaults => Ok(default),
        None => prompter.confirm(question, default),
    };

    let react = ask(partial.react, Question::React, defaults.react)?;
    let vitest = ask(partial.vitest, Question::Vitest, defaults.vitest)?;

    Ok(Answers {
        selection,
        react,
        vitest,
    })
}
