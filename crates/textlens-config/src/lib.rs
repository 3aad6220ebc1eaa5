//! # textlens-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and configuration file structures.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Analysis logic
//! * I/O operations (config file loading lives in the binary crate)

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Default cap for nearest-neighbor suggestions per lemma.
pub const DEFAULT_MAXIMUM_ALTERNATIVES: usize = 10;

/// Language assumed when detection is disabled or inconclusive.
pub const DEFAULT_LANGUAGE: &str = "en";

/// `textlens` — report language, sentiment, lemmas, word alternatives, and
/// named entities for a piece of text.
///
/// Default mode (no subcommand) analyzes the given text with whichever
/// feature flags are enabled.
#[derive(Parser, Debug)]
#[command(name = "textlens", version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(flatten)]
    pub analyze: CliAnalyzeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration profile to use (e.g., "default", "ci").
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Diagnostic notes on stderr (provider choices, timings).
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliAnalyzeArgs {
    /// Text to analyze. Multiple tokens are joined with single spaces.
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,

    /// Print the detected language tag.
    #[arg(short = 'd', long)]
    pub detect_language: bool,

    /// Print the sentiment score.
    #[arg(short = 's', long)]
    pub sentiment_analysis: bool,

    /// Print the lemma list.
    #[arg(short = 'l', long)]
    pub lemmatize: bool,

    /// Print nearest-neighbor alternatives per lemma.
    #[arg(short = 'v', long)]
    pub alternatives: bool,

    /// Print place entities.
    #[arg(short = 'p', long)]
    pub places: bool,

    /// Print person entities.
    #[arg(short = 'e', long)]
    pub people: bool,

    /// Print organization entities.
    #[arg(short = 'o', long)]
    pub organizations: bool,

    /// Force-enable every feature flag.
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Cap neighbors per lemma [default: 10].
    #[arg(short = 'm', long, value_name = "N")]
    pub maximum_alternatives: Option<usize>,

    /// Output format [default: text].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Directory holding per-language embedding spaces (`<tag>.vec` files).
    #[arg(long, value_name = "DIR")]
    pub embeddings_dir: Option<PathBuf>,

    /// Language assumed when detection is disabled or inconclusive.
    #[arg(long, value_name = "TAG")]
    pub default_language: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Plain labeled sections on stdout.
    #[default]
    Text,
    /// JSON receipt with envelope metadata.
    Json,
}

impl OutputFormat {
    pub fn parse_name(name: &str) -> Option<Self> {
        Self::from_str(name, true).ok()
    }
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

/// User configuration file: `<config_dir>/textlens/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    pub profiles: BTreeMap<String, Profile>,
}

/// A named set of defaults. Explicit CLI flags always win over a profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Profile {
    pub format: Option<String>, // "text" or "json"
    pub maximum_alternatives: Option<usize>,
    pub default_language: Option<String>,
    pub embeddings_dir: Option<PathBuf>,
}
