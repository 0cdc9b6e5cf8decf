use anyhow::{Context, Result};
use markdown_telegraph_cli::{TelegraphClient, github::GitHubClient, sync};
use markdown_telegraph_config::Config;
use markdown_telegraph_engine::{convert, find_markdown_files};
use std::{env, path::PathBuf, process};

const ENV_WORKSPACE: &str = "GITHUB_WORKSPACE";

struct Args {
    dry_run: bool,
    workspace_root: PathBuf,
}

fn parse_args() -> Result<Args, String> {
    let mut dry_run = false;
    let mut workspace_root = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dry-run" => dry_run = true,
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {flag}")),
            path if workspace_root.is_none() => workspace_root = Some(PathBuf::from(path)),
            extra => return Err(format!("Unexpected argument: {extra}")),
        }
    }

    let workspace_root = match workspace_root {
        Some(path) => path,
        None => match env::var(ENV_WORKSPACE) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => env::current_dir().map_err(|e| format!("No working directory: {e}"))?,
        },
    };

    Ok(Args {
        dry_run,
        workspace_root,
    })
}

/// Prints the HTML each document would be published as.
fn preview(config: &Config, args: &Args) -> Result<()> {
    let files = find_markdown_files(
        &args.workspace_root,
        &config.include_patterns,
        &config.exclude_patterns,
    )
    .context("Failed to discover markdown files")?;

    for file in &files {
        println!("==> {} ({})", file.relative_path(), file.title());
        println!("{}", convert(file.content()).to_html());
    }
    Ok(())
}

fn publish(config: &Config, args: &Args) -> Result<()> {
    let mut client = TelegraphClient::new().context("Failed to build Telegraph client")?;
    let report = sync(config, &args.workspace_root, &mut client, GitHubClient::from_env)?;

    log::info!("Pages created: {}", report.pages_created);
    log::info!("Mapping file: {}", report.mapping_file.display());
    println!("pages-created={}", report.pages_created);
    println!("mapping-file={}", report.mapping_file.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: markdown-telegraph [--dry-run] [workspace-root]");
            process::exit(1);
        }
    };
    log::info!("Workspace: {}", args.workspace_root.display());

    let config = match Config::resolve(&args.workspace_root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let result = if args.dry_run {
        preview(&config, &args)
    } else {
        publish(&config, &args)
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
