//! Configuration file support for kodkafa.
//!
//! This module provides:
//! - Loading configuration from `kodkafa.toml`
//! - Config file discovery (search upward from the project root)
//! - Merging CLI args, config file, and defaults
//! - Template generation with `--init`

mod file;
mod init;
mod merge;
mod toml_schema;

pub use file::{
    find_config_file, find_file_upward, load_config, resolve_templates_dir, ConfigError,
    CONFIG_FILE_NAME,
};
pub use init::{generate_init_file, KODKAFA_TOML_TEMPLATE};
pub use merge::{merge_answers, merge_settings, CliAnswers, CliSettings};
pub use toml_schema::{AnswersSection, KodkafaToml, OutputSection, TemplatesSection};
