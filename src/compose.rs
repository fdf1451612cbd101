//! Configuration composer
//!
//! Turns the loaded templates, the project manifest and the user's answers
//! into the documents to write. Every step takes a document by value and
//! returns the merged one, so the loaded inputs are never aliased or mutated.
//!
//! Steps, in order:
//! 1. tsconfig: Vitest globals and dependency
//! 2. ESLint or Prettier: shared `@kodkafa/eslint-config` dependency
//! 3. ESLint and Prettier: bridging plugins and the `prettier/prettier` rule
//! 4. ESLint: linter dependencies (plus the React plugin)
//! 5. Prettier: formatter dependency
//! 6. `package.json`, always

use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

use crate::category::{Answers, Category};
use crate::error::{Error, Result};
use crate::manifest::{self as deps, with_dev_dependencies, DevDependency, MANIFEST_FILE};
use crate::template::Templates;

pub const VITEST_GLOBALS: &str = "vitest/globals";
pub const PRETTIER_EXTENDS: &str = "plugin:prettier/recommended";
pub const PRETTIER_PLUGIN: &str = "prettier";
pub const PRETTIER_RULE: &str = "prettier/prettier";

const LINT_FILE: &str = "eslintrc.json";
const COMPILER_FILE: &str = "tsconfig.json";

/// What an output document is written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Category(Category),
    Manifest,
}

impl Target {
    pub fn file_name(self) -> &'static str {
        match self {
            Target::Category(category) => category.file_name(),
            Target::Manifest => MANIFEST_FILE,
        }
    }
}

/// A document ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub target: Target,
    pub document: Value,
}

/// Ordered outputs of one composition. The manifest is always last.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub outputs: Vec<Output>,
}

impl Composition {
    pub fn get(&self, target: Target) -> Option<&Value> {
        self.outputs
            .iter()
            .find(|o| o.target == target)
            .map(|o| &o.document)
    }

    pub fn manifest(&self) -> Option<&Value> {
        self.get(Target::Manifest)
    }

    pub fn targets(&self) -> impl Iterator<Item = Target> + '_ {
        self.outputs.iter().map(|o| o.target)
    }
}

/// Compose every output for `answers`.
///
/// The selection must not be empty; callers check this before loading
/// anything and report it to the user instead.
pub fn compose(answers: &Answers, templates: &Templates, manifest: &Value) -> Result<Composition> {
    let selection = &answers.selection;
    let lint_selected = selection.contains(Category::LintConfig);
    let format_selected = selection.contains(Category::FormatConfig);

    let mut outputs = Vec::with_capacity(4);
    let mut manifest = manifest.clone();

    if selection.contains(Category::CompilerConfig) {
        let mut compiler = templates.compiler.clone();
        if answers.vitest {
            compiler = with_vitest_globals(compiler)?;
            manifest = with_dev_dependencies(manifest, &[deps::VITEST])?;
        }
        outputs.push(Output {
            target: Target::Category(Category::CompilerConfig),
            document: compiler,
        });
    }

    if lint_selected || format_selected {
        manifest = with_dev_dependencies(manifest, &[deps::KODKAFA_ESLINT_CONFIG])?;
    }

    let mut lint = templates.lint.clone();
    if lint_selected && format_selected {
        manifest = with_dev_dependencies(
            manifest,
            &[deps::ESLINT_CONFIG_PRETTIER, deps::ESLINT_PLUGIN_PRETTIER],
        )?;
        lint = with_prettier_bridge(lint, &templates.format)?;
    }

    if lint_selected {
        manifest = with_dev_dependencies(manifest, &lint_dependencies(answers.react))?;
        outputs.push(Output {
            target: Target::Category(Category::LintConfig),
            document: lint,
        });
    }

    if format_selected {
        manifest = with_dev_dependencies(manifest, &[deps::PRETTIER])?;
        outputs.push(Output {
            target: Target::Category(Category::FormatConfig),
            document: templates.format.clone(),
        });
    }

    outputs.push(Output {
        target: Target::Manifest,
        document: manifest,
    });

    Ok(Composition { outputs })
}

/// Linter engine, TypeScript plugin and parser, plus the React plugin when needed.
pub fn lint_dependencies(react: bool) -> Vec<DevDependency> {
    let mut linter = vec![
        deps::TYPESCRIPT_ESLINT_PLUGIN,
        deps::TYPESCRIPT_ESLINT_PARSER,
        deps::ESLINT,
    ];
    if react {
        linter.push(deps::ESLINT_PLUGIN_REACT);
    }
    linter
}

/// Set `compilerOptions.types` to exactly `["vitest/globals"]`.
pub fn with_vitest_globals(mut compiler: Value) -> Result<Value> {
    let root = object_mut(&mut compiler, COMPILER_FILE, "the document")?;
    let options = child_object(root, COMPILER_FILE, "compilerOptions")?;
    options.insert("types".to_string(), json!([VITEST_GLOBALS]));
    Ok(compiler)
}

/// Make ESLint defer formatting to Prettier.
///
/// Appends the recommended config to `extends` and the plugin to `plugins`,
/// and sets the `prettier/prettier` rule to `["error", <format document>]`.
/// The format document is copied, not shared.
pub fn with_prettier_bridge(mut lint: Value, format: &Value) -> Result<Value> {
    let root = object_mut(&mut lint, LINT_FILE, "the document")?;

    child_array(root, "extends")?.push(Value::String(PRETTIER_EXTENDS.to_string()));
    child_array(root, "plugins")?.push(Value::String(PRETTIER_PLUGIN.to_string()));
    child_object(root, LINT_FILE, "rules")?
        .insert(PRETTIER_RULE.to_string(), json!(["error", format.clone()]));

    Ok(lint)
}

fn object_mut<'a>(
    value: &'a mut Value,
    document: &str,
    field: &str,
) -> Result<&'a mut Map<String, Value>> {
    value
        .as_object_mut()
        .ok_or_else(|| Error::shape(document, field, "an object"))
}

fn child_object<'a>(
    parent: &'a mut Map<String, Value>,
    document: &str,
    key: &str,
) -> Result<&'a mut Map<String, Value>> {
    let child = parent
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()));
    if child.is_null() {
        *child = Value::Object(Map::new());
    }
    object_mut(child, document, key)
}

/// `extends` may be a single string in ESLint configs; it is promoted to a list.
fn child_array<'a>(parent: &'a mut Map<String, Value>, key: &str) -> Result<&'a mut Vec<Value>> {
    let child = parent.entry(key).or_insert_with(|| Value::Array(Vec::new()));
    let promoted = match child {
        Value::Null => Some(Vec::new()),
        Value::String(s) => Some(vec![Value::String(std::mem::take(s))]),
        _ => None,
    };
    if let Some(items) = promoted {
        *child = Value::Array(items);
    }
    child
        .as_array_mut()
        .ok_or_else(|| Error::shape(LINT_FILE, key, "an array"))
}

/// Path of `target` inside the project root.
pub fn target_path(project_root: &Path, target: Target) -> PathBuf {
    project_root.join(target.file_name())
}
