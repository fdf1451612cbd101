//! Scaffolds TypeScript, ESLint and Prettier config files and merges their
//! devDependencies into `package.json`.

pub mod category;
pub mod colors;
pub mod compose;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod manifest;
mod output;
pub mod prompt;
pub mod template;

pub use category::{Answers, Category, Selection};
pub use colors::{should_use_colors, ColorChoice, Colors};
pub use compose::{compose, target_path, Composition, Output, Target};
pub use config::{
    find_config_file, generate_init_file, load_config, merge_answers, merge_settings, CliAnswers,
    CliSettings, ConfigError, KodkafaToml, KODKAFA_TOML_TEMPLATE,
};
pub use document::{load_document, render_document, write_document, DEFAULT_INDENT};
pub use error::{Error, Result};
pub use manifest::{load_manifest, DevDependency, MANIFEST_FILE};
pub use output::{
    render_diff, FileReport, OutputContext, OutputMode, RunOutcome, RunReport, NOTHING_SELECTED,
};
pub use prompt::{resolve_answers, DialoguerPrompter, PartialAnswers, Prompter, Question};
pub use template::{TemplateSource, Templates, Variant};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Where and how a run reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding package.json; generated files land here too
    pub project_root: PathBuf,
    pub templates: TemplateSource,
    /// Spaces per indentation level in written files
    pub indent: usize,
    /// Show diffs instead of writing
    pub dry_run: bool,
}

impl Settings {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            templates: TemplateSource::Bundled,
            indent: DEFAULT_INDENT,
            dry_run: false,
        }
    }
}

/// Main entry point: compose and write every document for `answers`.
///
/// An empty selection prints a notice and returns without touching any file.
/// Templates and the manifest are all loaded before the first write; a write
/// fault stops the run, leaving files already written in place.
pub fn run(settings: &Settings, answers: &Answers, ctx: &OutputContext) -> Result<RunOutcome> {
    if answers.selection.is_empty() {
        output::print_nothing_selected(ctx);
        return Ok(RunOutcome::NothingSelected);
    }

    let variant = Variant::from_react(answers.react);
    debug!(variant = variant.as_str(), "loading templates");
    let templates = Templates::load(&settings.templates, variant)?;
    let manifest = load_manifest(&settings.project_root)?;

    let composition = compose(answers, &templates, &manifest)?;

    let mut report = RunReport {
        files: Vec::with_capacity(composition.outputs.len()),
        dry_run: settings.dry_run,
    };

    for item in &composition.outputs {
        let path = target_path(&settings.project_root, item.target);
        let rendered = render_document(item.target.file_name(), &item.document, settings.indent)?;

        let changed = if settings.dry_run {
            let current = read_existing(&path)?;
            let base = current.as_deref().map(String::from_utf8_lossy);
            output::print_dry_run(&path, base.as_deref().unwrap_or(""), &rendered, ctx);
            base.as_deref() != Some(rendered.as_str())
        } else {
            // The target is overwritten whatever it holds; an unreadable one counts as changed
            let changed = fs::read(&path).map_or(true, |bytes| bytes != rendered.as_bytes());
            write_document(&path, &rendered)?;
            info!(path = %path.display(), changed, "wrote document");
            output::print_written(&path, ctx);
            changed
        };

        report.files.push(FileReport { path, changed });
    }

    Ok(RunOutcome::Completed(report))
}

/// Current bytes of a target file, `None` if it does not exist yet.
fn read_existing(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn quiet() -> OutputContext {
        OutputContext::new(OutputMode::Quiet, false)
    }

    fn project(manifest: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), manifest).unwrap();
        dir
    }

    fn answers(categories: &[Category], react: bool, vitest: bool) -> Answers {
        Answers {
            selection: categories.iter().copied().collect(),
            react,
            vitest,
        }
    }

    fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_selection_writes_nothing() {
        let dir = project(r#"{"name": "demo"}"#);
        let settings = Settings::new(dir.path());

        let outcome = run(&settings, &answers(&[], true, true), &quiet()).unwrap();

        assert_eq!(outcome, RunOutcome::NothingSelected);
        assert_eq!(
            fs::read_to_string(dir.path().join("package.json")).unwrap(),
            r#"{"name": "demo"}"#
        );
        assert!(!dir.path().join("tsconfig.json").exists());
    }

    #[test]
    fn test_empty_selection_does_not_need_manifest() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::new(dir.path());

        let outcome = run(&settings, &answers(&[], false, false), &quiet()).unwrap();
        assert_eq!(outcome, RunOutcome::NothingSelected);
    }

    #[test]
    fn test_writes_selected_files_and_manifest() {
        let dir = project(r#"{"name": "demo"}"#);
        let settings = Settings::new(dir.path());
        let answers = answers(&[Category::LintConfig, Category::FormatConfig], false, false);

        let outcome = run(&settings, &answers, &quiet()).unwrap();

        let RunOutcome::Completed(report) = outcome else {
            panic!("expected a completed run");
        };
        let names: Vec<_> = report
            .files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["eslintrc.json", ".prettierrc.json", "package.json"]);

        assert!(!dir.path().join("tsconfig.json").exists());
        let manifest = read_json(&dir.path().join("package.json"));
        assert_eq!(manifest["name"], "demo");
        assert_eq!(manifest["devDependencies"]["prettier"], "^2.8.4");

        let lint = read_json(&dir.path().join("eslintrc.json"));
        let format = read_json(&dir.path().join(".prettierrc.json"));
        assert_eq!(lint["rules"]["prettier/prettier"], json!(["error", format]));
    }

    #[test]
    fn test_existing_unselected_file_is_untouched() {
        let dir = project("{}");
        fs::write(dir.path().join("tsconfig.json"), "keep me").unwrap();
        let settings = Settings::new(dir.path());

        run(&settings, &answers(&[Category::FormatConfig], false, false), &quiet()).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("tsconfig.json")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = project("{}");
        let mut settings = Settings::new(dir.path());
        settings.dry_run = true;

        let outcome = run(&settings, &answers(&[Category::CompilerConfig], false, true), &quiet())
            .unwrap();

        let RunOutcome::Completed(report) = outcome else {
            panic!("expected a completed run");
        };
        assert!(report.dry_run);
        assert!(report.files.iter().all(|f| f.changed));
        assert!(!dir.path().join("tsconfig.json").exists());
        assert_eq!(fs::read_to_string(dir.path().join("package.json")).unwrap(), "{}");
    }

    #[test]
    fn test_second_run_reports_unchanged() {
        let dir = project("{}");
        let settings = Settings::new(dir.path());
        let answers = answers(&[Category::FormatConfig], false, false);

        run(&settings, &answers, &quiet()).unwrap();
        let outcome = run(&settings, &answers, &quiet()).unwrap();

        let RunOutcome::Completed(report) = outcome else {
            panic!("expected a completed run");
        };
        assert!(report.files.iter().all(|f| !f.changed));
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::new(dir.path());

        let result = run(&settings, &answers(&[Category::CompilerConfig], false, false), &quiet());

        assert!(matches!(result, Err(Error::Read { .. })));
        assert!(!dir.path().join("tsconfig.json").exists());
    }

    #[test]
    fn test_indent_setting() {
        let dir = project("{}");
        let mut settings = Settings::new(dir.path());
        settings.indent = 2;

        run(&settings, &answers(&[Category::FormatConfig], false, false), &quiet()).unwrap();

        let content = fs::read_to_string(dir.path().join(".prettierrc.json")).unwrap();
        assert!(content.starts_with("{\n  \""));
        assert!(content.ends_with("}\n"));
    }

    #[test]
    fn test_overwrites_target_that_is_not_utf8() {
        let dir = project(r#"{"name": "demo"}"#);
        fs::write(
            dir.path().join(".prettierrc.json"),
            [0xFF, 0xFE, 0x7B, 0x00, 0x7D, 0x00],
        )
        .unwrap();
        let settings = Settings::new(dir.path());
        let answers = Answers {
            selection: Selection::all(),
            react: false,
            vitest: false,
        };

        let outcome = run(&settings, &answers, &quiet()).unwrap();

        let RunOutcome::Completed(report) = outcome else {
            panic!("expected a completed run");
        };
        assert_eq!(report.files.len(), 4);
        assert!(report.files.iter().all(|f| f.changed));
        assert!(read_json(&dir.path().join(".prettierrc.json")).is_object());
        let manifest = read_json(&dir.path().join("package.json"));
        assert_eq!(manifest["devDependencies"]["prettier"], "^2.8.4");
    }

    #[test]
    fn test_dry_run_diffs_against_non_utf8_target() {
        let dir = project("{}");
        fs::write(dir.path().join(".prettierrc.json"), [0xFF, 0xFE]).unwrap();
        let mut settings = Settings::new(dir.path());
        settings.dry_run = true;

        let outcome = run(&settings, &answers(&[Category::FormatConfig], false, false), &quiet())
            .unwrap();

        let RunOutcome::Completed(report) = outcome else {
            panic!("expected a completed run");
        };
        assert!(report.files[0].changed);
        assert_eq!(
            fs::read(dir.path().join(".prettierrc.json")).unwrap(),
            vec![0xFF, 0xFE]
        );
    }

    #[test]
    fn test_write_fault_keeps_earlier_files() {
        let dir = project(r#"{"name": "demo"}"#);
        fs::create_dir(dir.path().join(".prettierrc.json")).unwrap();
        let settings = Settings::new(dir.path());
        let answers = Answers {
            selection: Selection::all(),
            react: false,
            vitest: false,
        };

        let result = run(&settings, &answers, &quiet());

        match result {
            Err(Error::Write { path, .. }) => {
                assert_eq!(path, dir.path().join(".prettierrc.json"));
            }
            other => panic!("expected a write error, got {other:?}"),
        }
        assert!(read_json(&dir.path().join("tsconfig.json")).is_object());
        assert!(read_json(&dir.path().join("eslintrc.json")).is_object());
        assert_eq!(
            fs::read_to_string(dir.path().join("package.json")).unwrap(),
            r#"{"name": "demo"}"#
        );
    }
}
