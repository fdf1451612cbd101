//! Config file discovery and loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::toml_schema::KodkafaToml;

pub const CONFIG_FILE_NAME: &str = "kodkafa.toml";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    /// TOML parsing error
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Search upward from `start_dir` for a file with the given name.
///
/// If `stop_at_git_root` is true, stops searching when a `.git` directory is found.
/// Returns `None` if the file is not found.
pub fn find_file_upward(
    start_dir: &Path,
    filename: &str,
    stop_at_git_root: bool,
) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.is_file() {
            return Some(file_path);
        }

        if stop_at_git_root && current.join(".git").exists() {
            return None;
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find kodkafa.toml by searching upward from the project root.
///
/// Stops at the first `kodkafa.toml` found, or at the git repository root
/// (directory containing `.git`), whichever comes first.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, CONFIG_FILE_NAME, true)
}

/// Load and parse kodkafa.toml from the given path.
pub fn load_config(path: &Path) -> Result<KodkafaToml, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: KodkafaToml = toml::from_str(&content)?;
    Ok(config)
}

/// Template directory named by the config, resolved against the config file's directory.
pub fn resolve_templates_dir(config_path: &Path, config: &KodkafaToml) -> Option<PathBuf> {
    let dir = config.templates.dir.as_ref()?;
    if dir.is_absolute() {
        return Some(dir.clone());
    }
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));
    Some(base.join(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_current_dir() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("kodkafa.toml");
        fs::write(&config_path, "[answers]\n").unwrap();

        let found = find_config_file(dir.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let parent = TempDir::new().unwrap();
        let config_path = parent.path().join("kodkafa.toml");
        fs::write(&config_path, "[answers]\n").unwrap();

        let child = parent.path().join("packages").join("web");
        fs::create_dir_all(&child).unwrap();

        let found = find_config_file(&child);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let subdir = dir.path().join("app");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir);
        assert_eq!(found, None);
    }

    #[test]
    fn test_find_config_ignores_directory_with_same_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("kodkafa.toml")).unwrap();

        assert_eq!(find_config_file(dir.path()), None);
    }

    #[test]
    fn test_load_config_full() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("kodkafa.toml");
        fs::write(
            &config_path,
            r#"
[templates]
dir = "configs"

[answers]
compiler = false
react = true

[output]
indent = 2
"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.templates.dir, Some(PathBuf::from("configs")));
        assert_eq!(config.answers.compiler, Some(false));
        assert_eq!(config.answers.lint, None);
        assert_eq!(config.answers.react, Some(true));
        assert_eq!(config.output.indent, Some(2));
    }

    #[test]
    fn test_load_config_empty() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("kodkafa.toml");
        fs::write(&config_path, "").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.templates.dir, None);
        assert_eq!(config.answers.vitest, None);
        assert_eq!(config.output.indent, None);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("kodkafa.toml");
        fs::write(&config_path, "invalid toml {{{\n").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_resolve_relative_templates_dir() {
        let mut config = KodkafaToml::default();
        config.templates.dir = Some(PathBuf::from("configs"));

        let resolved = resolve_templates_dir(Path::new("/work/app/kodkafa.toml"), &config);
        assert_eq!(resolved, Some(PathBuf::from("/work/app/configs")));
    }

    #[test]
    fn test_resolve_without_templates_dir() {
        let config = KodkafaToml::default();
        assert_eq!(
            resolve_templates_dir(Path::new("/work/kodkafa.toml"), &config),
            None
        );
    }
}
