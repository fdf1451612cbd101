//! TOML schema definitions for kodkafa.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root structure for kodkafa.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct KodkafaToml {
    /// Where templates are loaded from
    #[serde(default)]
    pub templates: TemplatesSection,

    /// Default answers for the interactive questions
    #[serde(default)]
    pub answers: AnswersSection,

    /// Rendering of written files
    #[serde(default)]
    pub output: OutputSection,
}

/// `[templates]` section in kodkafa.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TemplatesSection {
    /// Template directory, relative to the config file (None = bundled templates)
    pub dir: Option<PathBuf>,
}

/// `[answers]` section in kodkafa.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AnswersSection {
    /// tsconfig.json checked by default (default: true)
    pub compiler: Option<bool>,

    /// eslintrc.json checked by default (default: true)
    pub lint: Option<bool>,

    /// .prettierrc.json checked by default (default: true)
    pub format: Option<bool>,

    /// Default answer for "Do You Use React?" (default: false)
    pub react: Option<bool>,

    /// Default answer for the Vitest question (default: false)
    pub vitest: Option<bool>,
}

/// `[output]` section in kodkafa.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Spaces per indentation level (default: 4)
    pub indent: Option<usize>,
}
