//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::CONFIG_FILE_NAME;

/// Template kodkafa.toml with documentation
pub const KODKAFA_TOML_TEMPLATE: &str = r#"# kodkafa.toml - Configuration for the kodkafa config scaffolder
#
# kodkafa writes tsconfig.json, eslintrc.json and .prettierrc.json from
# templates and adds the matching devDependencies to package.json.
# Command-line flags take precedence over everything in this file.

[templates]
# Directory holding compiler-<react|node>.json, lint-<react|node>.json and
# format.json, relative to this file. Comment out to use the bundled templates.
# dir = "configs"

[answers]
# Files checked by default in the selection prompt.
# compiler = true
# lint = true
# format = true

# Default answers for the yes/no questions.
# react = false
# vitest = false

[output]
# Spaces per indentation level in written JSON files.
# indent = 4
"#;

/// Generate kodkafa.toml in `dir`.
///
/// Returns an error if kodkafa.toml already exists.
pub fn generate_init_file(dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "kodkafa.toml already exists",
        ));
    }

    fs::write(&path, KODKAFA_TOML_TEMPLATE)?;
    Ok(path)
}
