//! Template documents, bundled or loaded from a directory

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::document::{load_document, parse_document};
use crate::error::{Error, Result};

const COMPILER_NODE: &str = include_str!("../templates/compiler-node.json");
const COMPILER_REACT: &str = include_str!("../templates/compiler-react.json");
const LINT_NODE: &str = include_str!("../templates/lint-node.json");
const LINT_REACT: &str = include_str!("../templates/lint-react.json");
const FORMAT: &str = include_str!("../templates/format.json");

/// Which flavour of the compiler and lint templates to start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    React,
    Node,
}

impl Variant {
    pub fn from_react(react: bool) -> Self {
        if react {
            Variant::React
        } else {
            Variant::Node
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::React => "react",
            Variant::Node => "node",
        }
    }
}

/// Where template documents come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary
    #[default]
    Bundled,
    /// `compiler-<variant>.json`, `lint-<variant>.json` and `format.json` in a directory
    Directory(PathBuf),
}

pub fn compiler_file_name(variant: Variant) -> String {
    format!("compiler-{}.json", variant.as_str())
}

pub fn lint_file_name(variant: Variant) -> String {
    format!("lint-{}.json", variant.as_str())
}

pub const FORMAT_FILE_NAME: &str = "format.json";

/// The three template documents for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Templates {
    pub compiler: Value,
    pub lint: Value,
    pub format: Value,
}

impl Templates {
    /// Load all three templates for `variant`. The first fault aborts the load.
    pub fn load(source: &TemplateSource, variant: Variant) -> Result<Self> {
        Ok(Self {
            compiler: load_template(source, &compiler_file_name(variant))?,
            lint: load_template(source, &lint_file_name(variant))?,
            format: load_template(source, FORMAT_FILE_NAME)?,
        })
    }
}

fn load_template(source: &TemplateSource, name: &str) -> Result<Value> {
    let document = match source {
        TemplateSource::Bundled => {
            debug!(template = name, "loading bundled template");
            let content = bundled(name).ok_or_else(|| Error::Read {
                path: bundled_path(name),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no bundled template"),
            })?;
            parse_document(&bundled_path(name), content)?
        }
        TemplateSource::Directory(dir) => {
            let path = dir.join(name);
            debug!(path = %path.display(), "loading template");
            load_document(&path)?
        }
    };

    if !document.is_object() {
        return Err(Error::shape(name, "the document", "an object"));
    }
    Ok(document)
}

fn bundled(name: &str) -> Option<&'static str> {
    match name {
        "compiler-node.json" => Some(COMPILER_NODE),
        "compiler-react.json" => Some(COMPILER_REACT),
        "lint-node.json" => Some(LINT_NODE),
        "lint-react.json" => Some(LINT_REACT),
        FORMAT_FILE_NAME => Some(FORMAT),
        _ => None,
    }
}

fn bundled_path(name: &str) -> PathBuf {
    Path::new("<bundled>").join(name)
}
