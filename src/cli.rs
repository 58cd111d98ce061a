use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dockgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate Docker configurations from your codebase")]
#[command(
    long_about = "Analyzes a project directory, detects its language ecosystem from marker files, and generates a Dockerfile or Docker Compose configuration tailored to it. Environment variables found in .env files are folded in, with secret-looking ones routed to compose secrets."
)]
pub struct Cli {
    /// Path to the project directory to analyze
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: Option<PathBuf>,

    /// Path to the project directory (takes precedence over the positional argument)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Generate docker-compose.yml instead of a Dockerfile
    #[arg(long)]
    pub compose: bool,

    /// Generate both Dockerfile and docker-compose.yml
    #[arg(long, conflicts_with = "compose")]
    pub all: bool,

    /// Output directory for generated files (defaults to the project root)
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Print generated content to stdout without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Print the synthesized build configuration as JSON instead of rendering
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The effective project root: `--path` wins over the positional
    /// argument, falling back to the current directory.
    pub fn project_root(&self) -> PathBuf {
        self.path
            .clone()
            .or_else(|| self.project_path.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_path_wins_over_positional() {
        let cli = Cli::parse_from(["dockgen", "./pos", "--path", "./flag"]);
        assert_eq!(cli.project_root(), PathBuf::from("./flag"));
    }

    #[test]
    fn test_default_path_is_current_dir() {
        let cli = Cli::parse_from(["dockgen"]);
        assert_eq!(cli.project_root(), PathBuf::from("."));
    }

    #[test]
    fn test_compose_flag_defaults_off() {
        let cli = Cli::parse_from(["dockgen", "."]);
        assert!(!cli.compose);
        assert!(!cli.all);
    }
}
