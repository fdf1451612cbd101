use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use similar::{ChangeTag, TextDiff};

use crate::colors::Colors;

pub const NOTHING_SELECTED: &str = "In order to create a config file, you must choose one!";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    Quiet,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
        }
    }
}

/// One file touched (or, in a dry run, that would be touched) by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    /// New content differs from what was on disk
    pub changed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub dry_run: bool,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing was selected; no file was loaded or written
    NothingSelected,
    Completed(RunReport),
}

/// Printed in every mode: it is the only output of an aborted run.
pub fn print_nothing_selected(ctx: &OutputContext) {
    println!("{}", ctx.colors.error.apply_to(NOTHING_SELECTED));
}

pub fn print_written(path: &Path, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        println!("{}", path.display());
        return;
    }
    println!(
        "{} {}",
        ctx.colors.success.apply_to("Wrote:"),
        path.display()
    );
}

pub fn print_dry_run(path: &Path, original: &str, content: &str, ctx: &OutputContext) {
    if original == content {
        if ctx.mode != OutputMode::Quiet {
            println!("{} {}", ctx.colors.info.apply_to("Unchanged:"), path.display());
        }
        return;
    }

    if ctx.mode == OutputMode::Quiet {
        println!("{}", path.display());
        return;
    }

    println!(
        "{} {}",
        ctx.colors.info.apply_to("Would write:"),
        path.display()
    );
    print!(
        "{}",
        render_diff(&path.display().to_string(), original, content, &ctx.colors)
    );
}

/// Unified diff of `original` against `content`, three lines of context.
pub fn render_diff(label: &str, original: &str, content: &str, colors: &Colors) -> String {
    let diff = TextDiff::from_lines(original, content);
    let mut out = String::new();

    let _ = writeln!(out, "--- {label}");
    let _ = writeln!(out, "+++ {label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let line = match change.tag() {
                    ChangeTag::Delete => colors.removed.apply_to(format!("-{change}")).to_string(),
                    ChangeTag::Insert => colors.added.apply_to(format!("+{change}")).to_string(),
                    ChangeTag::Equal => format!(" {change}"),
                };
                out.push_str(&line);
                if change.missing_newline() {
                    out.push('\n');
                }
            }
        }
    }

    out
}
