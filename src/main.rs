mod cli;
mod config;
mod domain;
mod infra;
mod workflows;

use anyhow::{Context, Result};
use clap::Parser;
use thiserror::Error;

use cli::Cli;
use config::Config;
use domain::models::EpisodeDescriptor;
use infra::fs::MoveError;
use infra::tvdb::TvdbClient;
use workflows::matchers;
use workflows::renamer;
use workflows::resolver::{ConsoleSelector, Resolution, ResolveError, Resolver, SkipReason};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    println!("Running renamer...");
    let config = config::load(cli.config.as_deref())?;

    let mut client = TvdbClient::new(config.tvdb.clone());
    client.login().context("TVDB login failed")?;

    println!("Checking for files in {}", config.source_dir.display());
    let file_names = infra::fs::list_video_files(&config.source_dir)
        .with_context(|| format!("failed to list {}", config.source_dir.display()))?;

    let mut found = Vec::new();
    for file_name in &file_names {
        match matchers::parse_filename(file_name) {
            Ok(descriptor) => found.push(descriptor),
            Err(e) => println!("{file_name}: {e}"),
        }
    }
    if found.is_empty() {
        println!("No files found");
        return Ok(());
    }

    let mut resolver = Resolver::new(client, ConsoleSelector);
    for descriptor in &found {
        match process_file(descriptor, &config, &mut resolver, cli.dry_run) {
            Ok(()) => {}
            // A catalog failure poisons every later lookup too, so it ends
            // the batch; everything else is reported and skipped.
            Err(ProcessError::Resolve(ResolveError::Catalog(e))) => return Err(e.into()),
            Err(e) => eprintln!("{}: {e}", descriptor.file_name),
        }
    }

    Ok(())
}

#[derive(Debug, Error)]
enum ProcessError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Move(#[from] MoveError),
}

fn process_file(
    descriptor: &EpisodeDescriptor,
    config: &Config,
    resolver: &mut Resolver<TvdbClient, ConsoleSelector>,
    dry_run: bool,
) -> Result<(), ProcessError> {
    let matched = match resolver.resolve(descriptor)? {
        Resolution::Matched(matched) => matched,
        Resolution::Skipped(reason) => {
            report_skip(descriptor, reason);
            return Ok(());
        }
    };

    let new_filename = renamer::generate_filename(descriptor, &matched.episode_title);
    println!("Current: {}", descriptor.file_name);
    println!("New: {new_filename}");

    if dry_run {
        println!(
            "[DRYRUN] Skipping rename from {} to {}",
            descriptor.file_name, new_filename
        );
        return Ok(());
    }

    let target_dir = renamer::target_directory(&config.dest_dir, &matched.series, descriptor.season);
    infra::fs::move_file(
        &config.source_dir,
        &descriptor.file_name,
        &target_dir,
        &new_filename,
    )?;
    println!("Successfully moved.");
    Ok(())
}

fn report_skip(descriptor: &EpisodeDescriptor, reason: SkipReason) {
    match reason {
        SkipReason::NoSeriesMatch => println!("No series matches for {}", descriptor.raw_name),
        SkipReason::Ignored => println!("Ignoring {}", descriptor.raw_name),
        SkipReason::NoEpisodeMatch => println!(
            "No episode found for {} S{}E{}",
            descriptor.raw_name, descriptor.season, descriptor.episode
        ),
    }
}
