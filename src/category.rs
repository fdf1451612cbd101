//! Config categories and the answers that drive composition

use std::collections::BTreeSet;
use std::fmt;

use clap::ValueEnum;

/// An independently selectable config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Category {
    /// TypeScript compiler settings (`tsconfig.json`)
    #[value(name = "compiler", alias = "tsconfig")]
    CompilerConfig,
    /// ESLint rules (`eslintrc.json`)
    #[value(name = "lint", alias = "eslint")]
    LintConfig,
    /// Prettier rules (`.prettierrc.json`)
    #[value(name = "format", alias = "prettier")]
    FormatConfig,
}

impl Category {
    /// All categories in prompt and write order.
    pub const ALL: [Category; 3] = [
        Category::CompilerConfig,
        Category::LintConfig,
        Category::FormatConfig,
    ];

    /// File written into the project root for this category.
    pub fn file_name(self) -> &'static str {
        match self {
            Category::CompilerConfig => "tsconfig.json",
            Category::LintConfig => "eslintrc.json",
            Category::FormatConfig => ".prettierrc.json",
        }
    }

    /// Label shown in the interactive multi-select.
    pub fn label(self) -> &'static str {
        match self {
            Category::CompilerConfig => "TSConfig",
            Category::LintConfig => "ESLint",
            Category::FormatConfig => "Prettier",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of selected categories. Order is irrelevant and duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<Category>);

impl Selection {
    pub fn all() -> Self {
        Category::ALL.into_iter().collect()
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<Category> for Selection {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything the composer needs to know from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub selection: Selection,
    /// Project uses React
    pub react: bool,
    /// Project tests with Vitest
    pub vitest: bool,
}
