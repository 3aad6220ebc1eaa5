//! # textlens
//!
//! **CLI Binary**
//!
//! This is the entry point for the `textlens` command-line application.
//! It orchestrates the other crates to perform the requested analyses.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration
//! * Dispatch enabled features against the engine, in fixed order
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};

use textlens_config as cli;
use textlens_engine::{Engine, EngineOptions, StackEngine};
use textlens_format as format;
use textlens_types::{
    AnalysisReport, AnalyzeArgsMeta, EntityFilter, LemmaAlternatives, UNDETERMINED_LANGUAGE,
};

use cli::{Cli, Commands, UserConfig};

mod error_hints;

/// Render an error chain with contextual hints for the terminal.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

fn load_config() -> Option<UserConfig> {
    let config_dir = dirs::config_dir()?.join("textlens");
    let config_path = config_dir.join("config.json");

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&content).ok()
    } else {
        None
    }
}

pub fn resolve_profile<'a>(
    config: &'a Option<UserConfig>,
    name: Option<&String>,
) -> Option<&'a cli::Profile> {
    config.as_ref().and_then(|c| {
        let key = name.map(|s| s.as_str()).unwrap_or("default");
        c.profiles.get(key)
    })
}

/// Effective options for one analysis run, after applying `--all` and the
/// flag > profile > default precedence.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub text: String,
    pub detect_language: bool,
    pub sentiment_analysis: bool,
    pub lemmatize: bool,
    pub alternatives: bool,
    pub people: bool,
    pub places: bool,
    pub organizations: bool,
    pub maximum_alternatives: usize,
    pub default_language: String,
    pub embeddings_dir: Option<PathBuf>,
    pub format: cli::OutputFormat,
}

impl AnalyzeOptions {
    pub fn entity_filter(&self) -> EntityFilter {
        EntityFilter {
            people: self.people,
            places: self.places,
            organizations: self.organizations,
        }
    }

    pub fn meta(&self) -> AnalyzeArgsMeta {
        AnalyzeArgsMeta {
            detect_language: self.detect_language,
            sentiment_analysis: self.sentiment_analysis,
            lemmatize: self.lemmatize,
            alternatives: self.alternatives,
            people: self.people,
            places: self.places,
            organizations: self.organizations,
            maximum_alternatives: self.maximum_alternatives,
            default_language: self.default_language.clone(),
        }
    }
}

pub fn resolve_analyze(
    args: &cli::CliAnalyzeArgs,
    profile: Option<&cli::Profile>,
) -> AnalyzeOptions {
    let all = args.all;
    AnalyzeOptions {
        text: args.text.join(" "),
        detect_language: args.detect_language || all,
        sentiment_analysis: args.sentiment_analysis || all,
        lemmatize: args.lemmatize || all,
        alternatives: args.alternatives || all,
        people: args.people || all,
        places: args.places || all,
        organizations: args.organizations || all,
        maximum_alternatives: args
            .maximum_alternatives
            .or_else(|| profile.and_then(|p| p.maximum_alternatives))
            .unwrap_or(cli::DEFAULT_MAXIMUM_ALTERNATIVES),
        default_language: args
            .default_language
            .clone()
            .or_else(|| profile.and_then(|p| p.default_language.clone()))
            .unwrap_or_else(|| cli::DEFAULT_LANGUAGE.to_string()),
        embeddings_dir: args
            .embeddings_dir
            .clone()
            .or_else(|| profile.and_then(|p| p.embeddings_dir.clone())),
        format: args
            .format
            .or_else(|| {
                profile
                    .and_then(|p| p.format.as_deref())
                    .and_then(cli::OutputFormat::parse_name)
            })
            .unwrap_or_default(),
    }
}

/// Run every enabled feature against the engine. Features are stateless,
/// independent passes; the report field order mirrors the printing order.
pub fn run_analysis(engine: &dyn Engine, opts: &AnalyzeOptions) -> AnalysisReport {
    let mut report = AnalysisReport::default();

    let detected = if opts.detect_language {
        engine.detect_language(&opts.text)
    } else {
        None
    };
    if opts.detect_language {
        report.language = Some(
            detected
                .clone()
                .unwrap_or_else(|| UNDETERMINED_LANGUAGE.to_string()),
        );
    }

    // Lemmas and embedding spaces follow the detected language when
    // detection ran and was conclusive, the configured default otherwise.
    let effective_language = detected.unwrap_or_else(|| opts.default_language.clone());

    if opts.sentiment_analysis {
        report.sentiment = Some(engine.sentiment(&opts.text).unwrap_or(0.0));
    }

    if opts.lemmatize || opts.alternatives {
        let lemmas = engine.lemmas(&opts.text, &effective_language);
        if opts.alternatives {
            report.alternatives = Some(
                lemmas
                    .iter()
                    .map(|lemma| LemmaAlternatives {
                        lemma: lemma.clone(),
                        neighbors: engine.neighbors(
                            lemma,
                            &effective_language,
                            opts.maximum_alternatives,
                        ),
                    })
                    .collect(),
            );
        }
        if opts.lemmatize {
            report.lemmas = Some(lemmas);
        }
    }

    if opts.entity_filter().any() {
        report.entities = Some(engine.entities(&opts.text, opts.entity_filter()));
    }

    report
}

fn analyze(cli: &Cli, profile: Option<&cli::Profile>) -> Result<()> {
    let opts = resolve_analyze(&cli.analyze, profile);

    if opts.text.trim().is_empty() {
        bail!("input text is empty");
    }

    // An explicitly given embeddings directory that does not exist is a
    // user error; a profile-sourced one degrades like any missing space.
    if opts.alternatives
        && let Some(dir) = &cli.analyze.embeddings_dir
        && !dir.is_dir()
    {
        bail!("embeddings directory not found: {}", dir.display());
    }

    let engine = StackEngine::new(EngineOptions {
        embeddings_dir: opts.embeddings_dir.clone(),
    });

    if cli.verbose {
        eprintln!(
            "textlens: features[d={} s={} l={} v={} p={} e={} o={}] max_alternatives={} default_language={}",
            opts.detect_language,
            opts.sentiment_analysis,
            opts.lemmatize,
            opts.alternatives,
            opts.places,
            opts.people,
            opts.organizations,
            opts.maximum_alternatives,
            opts.default_language,
        );
        match &opts.embeddings_dir {
            Some(dir) => eprintln!("textlens: embeddings from {}", dir.display()),
            None => eprintln!("textlens: no embeddings directory configured"),
        }
    }

    let report = run_analysis(&engine, &opts);
    format::print_report(&report, &opts.meta(), opts.format)
        .context("failed to write analysis output")
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let user_config = load_config();
    let profile = resolve_profile(&user_config, cli.profile.as_ref());

    match &cli.command {
        Some(Commands::Completions(args)) => {
            use clap_complete::generate;
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            let shell = match args.shell {
                cli::Shell::Bash => clap_complete::Shell::Bash,
                cli::Shell::Elvish => clap_complete::Shell::Elvish,
                cli::Shell::Fish => clap_complete::Shell::Fish,
                cli::Shell::Powershell => clap_complete::Shell::PowerShell,
                cli::Shell::Zsh => clap_complete::Shell::Zsh,
            };
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => analyze(&cli, profile),
    }
}
