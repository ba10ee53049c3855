//! tagflow - Entry Point

use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tagflow::model::AppError;
use tracing::info;

/// tagflow - terminal blog list with wrapped tag chips
#[derive(Parser, Debug)]
#[command(name = "tagflow")]
#[command(version)]
#[command(about = "Terminal blog list whose tags wrap with a flow layout")]
pub struct Args {
    /// JSON file of posts (uses the built-in sample posts if not provided)
    #[arg(short, long)]
    pub posts: Option<PathBuf>,

    /// Start with the category filter active
    #[arg(short, long)]
    pub filtered: bool,

    /// Gap between tag chips in cells
    #[arg(short, long)]
    pub spacing: Option<u16>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = tagflow::config::load_config_with_precedence(args.config.clone())
            .map_err(AppError::from)?;

        // 2. Merge with defaults
        let merged = tagflow::config::merge_config(config_file);

        // 3. Apply environment variable overrides
        let with_env = tagflow::config::apply_env_overrides(merged);

        // 4. Apply CLI argument overrides
        // --filtered only overrides when explicitly set
        let filtered_override = if args.filtered { Some(true) } else { None };

        tagflow::config::apply_cli_overrides(
            with_env,
            args.spacing,
            filtered_override,
            args.posts.clone(),
        )
    };
    config.validate().map_err(AppError::from)?;

    // Initialize tracing with configured log file path
    tagflow::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Pick the post provider and load everything up front
    let source = tagflow::model::select_source(
        config.posts_file.clone(),
        Local::now().naive_local(),
    );
    let posts = source.load().map_err(AppError::from)?;
    info!(source = %source.describe(), count = posts.len(), "Posts loaded");

    let mut app_state = tagflow::state::AppState::new(posts, config.filter_category.clone());
    app_state.filtered = config.start_filtered;
    app_state.collapse_threshold = config.collapse_threshold;

    let color = tagflow::view::ColorConfig::from_env_and_args(args.no_color);
    let cli_args = tagflow::view::CliArgs::new(config.tag_spacing, color);

    tagflow::view::run_with_state(app_state, cli_args)?;

    Ok(())
}
