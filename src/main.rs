use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use kodkafa::logging::init_logging;
use kodkafa::{
    find_config_file, generate_init_file, load_config, merge_answers, merge_settings,
    resolve_answers, run, should_use_colors, Category, CliAnswers, CliSettings, ColorChoice,
    DialoguerPrompter, KodkafaToml, OutputContext, OutputMode,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "kodkafa")]
#[command(
    version,
    about = "Scaffold tsconfig, ESLint and Prettier configs and their devDependencies"
)]
struct Cli {
    /// Project directory containing package.json (default: current directory)
    #[arg(long, value_name = "DIR")]
    project: Option<PathBuf>,

    /// Directory with compiler-*.json, lint-*.json and format.json templates
    #[arg(long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Specify config file path (overrides auto-discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Files to generate, skipping the selection prompt
    #[arg(long, value_enum, value_delimiter = ',', value_name = "FILES")]
    only: Option<Vec<Category>>,

    /// The project uses React
    #[arg(long, conflicts_with = "no_react")]
    react: bool,

    /// The project does not use React
    #[arg(long)]
    no_react: bool,

    /// The project tests with Vitest
    #[arg(long, conflicts_with = "no_vitest")]
    vitest: bool,

    /// The project does not test with Vitest
    #[arg(long)]
    no_vitest: bool,

    /// Accept defaults for every question that was not answered by a flag
    #[arg(short, long)]
    yes: bool,

    /// Show what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Spaces per indentation level in written files
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Output only written file names
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, value_name = "WHEN")]
    color: ColorChoice,

    /// Generate a template kodkafa.toml configuration file
    #[arg(long)]
    init: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.color);

    let project_root = match resolve_project_root(&cli) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: cannot determine project directory: {e}");
            return ExitCode::from(1);
        }
    };

    // Handle --init command
    if cli.init {
        return handle_init(&project_root);
    }

    let loaded = load_configuration(&cli.config, &project_root);
    let toml = loaded.as_ref().map(|(path, config)| (path.as_path(), config));

    let settings = merge_settings(&build_cli_settings(&cli, project_root), toml);
    let partial = merge_answers(
        &build_cli_answers(&cli),
        toml.map(|(_, config)| &config.answers),
    );

    let mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let ctx = OutputContext::new(mode, should_use_colors(cli.color));

    let mut prompter = DialoguerPrompter::new();
    let result = resolve_answers(&partial, &mut prompter, cli.yes)
        .and_then(|answers| run(&settings, &answers, &ctx));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn resolve_project_root(cli: &Cli) -> std::io::Result<PathBuf> {
    match &cli.project {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir(),
    }
}

fn handle_init(project_root: &Path) -> ExitCode {
    match generate_init_file(project_root) {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_configuration(
    explicit_path: &Option<PathBuf>,
    project_root: &Path,
) -> Option<(PathBuf, KodkafaToml)> {
    let config_path = explicit_path
        .clone()
        .or_else(|| find_config_file(project_root))?;

    match load_config(&config_path) {
        Ok(config) => {
            info!(path = %config_path.display(), "using config");
            Some((config_path, config))
        }
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "failed to load config, ignoring it");
            None
        }
    }
}

fn build_cli_settings(cli: &Cli, project_root: PathBuf) -> CliSettings {
    CliSettings {
        project_root,
        templates_dir: cli.templates.clone(),
        indent: cli.indent,
        dry_run: cli.dry_run,
    }
}

fn build_cli_answers(cli: &Cli) -> CliAnswers {
    // Boolean flags in clap are always present (default false), so each
    // answer is only set when one of its two flags was given.
    CliAnswers {
        only: cli.only.clone(),
        react: cli
            .react
            .then_some(true)
            .or(cli.no_react.then_some(false)),
        vitest: cli
            .vitest
            .then_some(true)
            .or(cli.no_vitest.then_some(false)),
    }
}
