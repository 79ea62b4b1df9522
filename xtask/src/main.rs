//! Build automation tasks for Tilewalk
//!
//! Usage:
//!   cargo xtask build-web       # Build WASM into dist/web
//!   cargo xtask package-itch    # Zip dist/web for itch.io upload

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const CRATE_NAME: &str = "tilewalk";
const MQ_JS_BUNDLE: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Tilewalk")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM and copy the web shell into dist/web
    BuildWeb {
        /// Build in debug mode
        #[arg(long)]
        debug: bool,
    },
    /// Create zip file ready for itch.io upload
    PackageItch,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { debug } => build_web(debug),
        Commands::PackageItch => package_itch(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

fn build_web(debug: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");
    let profile = if debug { "debug" } else { "release" };

    println!("Building WASM ({})...", profile);
    let mut cargo = Command::new("cargo");
    cargo
        .current_dir(&root)
        .args(["build", "--target", "wasm32-unknown-unknown", "--bin", CRATE_NAME]);
    if !debug {
        cargo.arg("--release");
    }
    run_cmd(&mut cargo)?;

    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    let wasm = format!("{}.wasm", CRATE_NAME);
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown").join(profile).join(&wasm),
        dist.join(&wasm),
    )
    .with_context(|| format!("copying {}", wasm))?;

    std::fs::copy(root.join("web/index.html"), dist.join("index.html"))
        .context("copying web/index.html")?;

    println!("Downloading {}...", MQ_JS_BUNDLE);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dist.join("mq_js_bundle.js"))
            .arg(MQ_JS_BUNDLE),
    )?;

    println!("Web build complete: dist/web/");
    Ok(())
}

fn package_itch() -> Result<()> {
    build_web(false)?;

    let root = project_root()?;
    let zip_name = format!("{}-itch.zip", CRATE_NAME);
    let zip_path = root.join("dist").join(&zip_name);

    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating itch.io zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(root.join("dist/web"))
            .arg("-r")
            .arg(Path::new("..").join(&zip_name))
            .arg("."),
    )?;

    println!("itch.io package ready: dist/{}", zip_name);
    Ok(())
}
