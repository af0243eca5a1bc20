//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "datagen",
    bin_name = "datagen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Embed project scaffold files and the repository version into data.rs",
    long_about = "datagen reads the scaffold files under data/generate, fingerprints \
                  them, looks up the nearest git tag and HEAD commit, and writes a \
                  Rust source file exposing everything as string constants.",
    after_help = "EXAMPLES:\n\
        \x20 datagen                      # same as `datagen generate`\n\
        \x20 datagen generate --dry-run   # print instead of writing\n\
        \x20 datagen check                # exit 5 if data.rs is stale\n\
        \x20 datagen completions bash > /usr/share/bash-completion/completions/datagen",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute (defaults to `generate`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Regenerate the artifact from the scaffold sources.
    #[command(
        visible_alias = "gen",
        about = "Generate the embedded data file",
        after_help = "EXAMPLES:\n\
            \x20 datagen generate\n\
            \x20 datagen generate --source-dir assets/scaffold --output src/data.rs\n\
            \x20 datagen gen --dry-run | less"
    )]
    Generate(GenerateArgs),

    /// Compare the artifact's recorded fingerprints against the sources.
    #[command(
        about = "Check whether the embedded data file is up to date",
        after_help = "EXAMPLES:\n\
            \x20 datagen check\n\
            \x20 datagen check --output-format json"
    )]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 datagen completions bash > ~/.local/share/bash-completion/completions/datagen\n\
            \x20 datagen completions zsh  > ~/.zfunc/_datagen\n\
            \x20 datagen completions fish > ~/.config/fish/completions/datagen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared paths ──────────────────────────────────────────────────────────────

/// Location overrides shared by `generate` and `check`.
#[derive(Debug, Default, Clone, Args)]
pub struct PathArgs {
    /// Directory holding the scaffold sources.
    #[arg(
        short = 's',
        long = "source-dir",
        value_name = "DIR",
        help = "Scaffold source directory (default: data/generate)"
    )]
    pub source_dir: Option<PathBuf>,

    /// Artifact path.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Generated file (default: data.rs)"
    )]
    pub output: Option<PathBuf>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `datagen generate`.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub paths: PathArgs,

    /// Print the artifact to stdout instead of writing it.
    #[arg(long = "dry-run", help = "Print the generated file instead of writing it")]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `datagen check`.
#[derive(Debug, Default, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub paths: PathArgs,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `datagen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
