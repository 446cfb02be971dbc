use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use shape_dsl::{
    Compilation, Outcome,
    constants::SCRIPT_COMMENT,
    process_canonical_command, process_command,
    render::{RenderError, save_preview},
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Script '{path}' could not be read: {source}")]
    Script { path: String, source: io::Error },
    #[error("Failed to read stdin: {0}")]
    Stdin(io::Error),
    #[error("Failed to write '{path}': {source}")]
    Write { path: String, source: io::Error },
    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "shape-dsl", about = "Compile spoken-style drawing commands into SVG")]
struct Cli {
    /// Commands to compile, e.g. "draw a circle at 100 50 radius 25 color red".
    commands: Vec<String>,

    /// Script with one command per line; `//` starts a comment line.
    #[arg(long = "script", value_name = "FILE")]
    scripts: Vec<PathBuf>,

    /// Input is already canonical, skip normalization.
    #[arg(long)]
    canonical: bool,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Write the SVG of the last successful command to this file.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Write a PNG preview of the last successful command to this file.
    #[arg(long, value_name = "FILE")]
    png: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "shape-dsl failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every command compiled.
fn run(cli: &Cli) -> Result<bool, CliError> {
    let inputs = collect_inputs(cli)?;
    let mut last_success: Option<Compilation> = None;
    let mut all_ok = true;

    for (line_info, text) in inputs {
        let outcome = if cli.canonical { process_canonical_command(&text) } else { process_command(&text) };

        match cli.format {
            Format::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
            Format::Svg => match &outcome {
                Outcome::Success(compilation) => println!("{}", compilation.output),
                Outcome::Failure { error } => eprintln!("{line_info} -> {error}"),
            },
        }

        match outcome {
            Outcome::Success(compilation) => last_success = Some(compilation),
            Outcome::Failure { .. } => all_ok = false,
        }
    }

    if let Some(compilation) = &last_success {
        if let Some(path) = &cli.out {
            fs::write(path, &compilation.output)
                .map_err(|source| CliError::Write { path: path.display().to_string(), source })?;
            tracing::info!(path = %path.display(), "svg saved");
        }

        if let Some(path) = &cli.png {
            save_preview(&compilation.command, &path.to_string_lossy())?;
        }
    } else if cli.out.is_some() || cli.png.is_some() {
        tracing::warn!("no command compiled, nothing written");
    }

    Ok(all_ok)
}

// (where the command came from, command text)
fn collect_inputs(cli: &Cli) -> Result<Vec<(String, String)>, CliError> {
    let mut inputs: Vec<(String, String)> = cli
        .commands
        .iter()
        .enumerate()
        .map(|(i, text)| (format!("argument {}", i + 1), text.clone()))
        .collect();

    for path in &cli.scripts {
        let lines = read_lines(path)
            .map_err(|source| CliError::Script { path: path.display().to_string(), source })?;

        for (line_number, line) in lines.map_while(Result::ok).enumerate() {
            if let Some(text) = script_command(&line) {
                inputs.push((format!("{}:{}", path.display(), line_number + 1), text.to_string()));
            }
        }
    }

    if cli.commands.is_empty() && cli.scripts.is_empty() {
        for (line_number, line) in io::stdin().lock().lines().enumerate() {
            let line = line.map_err(CliError::Stdin)?;
            if let Some(text) = script_command(&line) {
                inputs.push((format!("stdin:{}", line_number + 1), text.to_string()));
            }
        }
    }

    Ok(inputs)
}

fn script_command(line: &str) -> Option<&str> {
    let line = line.trim();

    if line.is_empty() || line.starts_with(SCRIPT_COMMENT) {
        None
    } else {
        Some(line)
    }
}

fn read_lines<P>(file_path: P) -> io::Result<io::Lines<BufReader<File>>>
where P: AsRef<Path> {
    let file = File::open(file_path)?;
    Ok(BufReader::new(file).lines())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
