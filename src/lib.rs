//! # dockgen
//!
//! A Rust-based command-line application that analyzes a project directory,
//! infers its language ecosystem from marker files, and generates Docker
//! configurations: a Dockerfile and/or a Docker Compose file.
//!
//! ## Features
//!
//! - **Ecosystem Detection**: Node.js, Python, Go, Java (Maven/Gradle),
//!   Ruby, and PHP projects are recognized from their marker files, with a
//!   generic fallback for everything else
//! - **Environment Discovery**: variables from `.env`-style files are merged
//!   with sensible per-ecosystem defaults
//! - **Secret Labeling**: variables whose names look sensitive are routed to
//!   the compose secrets mechanism instead of the plain environment list
//!
//! ## Example
//!
//! ```rust,no_run
//! use dockgen::{analyze_project, collect_environment, synthesize, RenderTarget};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let inspector = analyze_project(Path::new("./my-project"))?;
//! let environment = collect_environment(&inspector, None);
//! let config = synthesize(&inspector, environment, RenderTarget::Dockerfile);
//! println!("{}", dockgen::generate_dockerfile(&config)?);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod common;
pub mod error;
pub mod generator;

// Re-export commonly used types and functions
pub use analyzer::{analyze_project, collect_environment, EnvironmentMap, ProjectInspector};
pub use error::{DockGenError, Result};
pub use generator::{
    generate_compose, generate_dockerfile, synthesize, BuildConfig, EcosystemProfile, RenderTarget,
};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
