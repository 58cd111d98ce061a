use clap::Parser;
use dockgen::{
    analyzer::{analyze_project, collect_environment},
    cli::Cli,
    common::env_file,
    error::GeneratorError,
    generator::{self, RenderTarget},
};
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> dockgen::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    let project_root = cli.project_root();
    let inspector = analyze_project(&project_root)?;

    let parsed_env = env_file::discover_env_file(inspector.project_root())?;
    let environment = collect_environment(&inspector, parsed_env);

    let target = if cli.all {
        RenderTarget::Both
    } else if cli.compose {
        RenderTarget::Compose
    } else {
        RenderTarget::Dockerfile
    };
    let config = generator::synthesize(&inspector, environment, target);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let output_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| inspector.project_root().to_path_buf());

    if config.target != RenderTarget::Compose {
        let content = generator::generate_dockerfile(&config)?;
        emit("Dockerfile", &content, &output_dir, cli.dry_run)?;
    }
    if config.target != RenderTarget::Dockerfile {
        let content = generator::generate_compose(&config)?;
        emit("docker-compose.yml", &content, &output_dir, cli.dry_run)?;
    }

    if !cli.dry_run && !cli.quiet {
        println!("Docker configuration generated successfully!");
    }

    Ok(())
}

fn emit(file_name: &str, content: &str, output_dir: &Path, dry_run: bool) -> dockgen::Result<()> {
    if dry_run {
        println!("--- {} (dry run) ---", file_name);
        println!("{}", content);
        return Ok(());
    }

    let path = output_dir.join(file_name);
    fs::write(&path, content).map_err(|e| GeneratorError::OutputWrite {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    log::info!("Wrote {}", path.display());
    Ok(())
}
