//! CLI surface contract tests: flag names, defaults, and the `--all` shape.

use clap::Parser;
use textlens_config::{Cli, Commands, OutputFormat, Shell};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("args should parse")
}

#[test]
fn positional_text_tokens_collect_in_order() {
    let cli = parse(&["textlens", "Paris", "is", "beautiful"]);
    assert_eq!(cli.analyze.text, vec!["Paris", "is", "beautiful"]);
    assert!(!cli.analyze.detect_language);
    assert!(cli.command.is_none());
}

#[test]
fn missing_text_is_a_parse_error() {
    assert!(Cli::try_parse_from(["textlens"]).is_err());
    assert!(Cli::try_parse_from(["textlens", "-d"]).is_err());
}

#[test]
fn short_flags_map_to_features() {
    let cli = parse(&["textlens", "-d", "-s", "-l", "-v", "-p", "-e", "-o", "hello"]);
    assert!(cli.analyze.detect_language);
    assert!(cli.analyze.sentiment_analysis);
    assert!(cli.analyze.lemmatize);
    assert!(cli.analyze.alternatives);
    assert!(cli.analyze.places);
    assert!(cli.analyze.people);
    assert!(cli.analyze.organizations);
    assert!(!cli.analyze.all);
}

#[test]
fn long_flags_match_the_documented_surface() {
    let cli = parse(&[
        "textlens",
        "--detect-language",
        "--sentiment-analysis",
        "--lemmatize",
        "--alternatives",
        "--places",
        "--people",
        "--organizations",
        "--maximum-alternatives",
        "3",
        "some",
        "text",
    ]);
    assert!(cli.analyze.detect_language);
    assert_eq!(cli.analyze.maximum_alternatives, Some(3));
}

#[test]
fn all_flag_parses_without_individual_flags() {
    let cli = parse(&["textlens", "-a", "hello"]);
    assert!(cli.analyze.all);
    assert!(!cli.analyze.detect_language);
}

#[test]
fn maximum_alternatives_rejects_non_numeric() {
    assert!(Cli::try_parse_from(["textlens", "-m", "lots", "hello"]).is_err());
}

#[test]
fn format_and_overrides_parse() {
    let cli = parse(&[
        "textlens",
        "--format",
        "json",
        "--embeddings-dir",
        "/tmp/vec",
        "--default-language",
        "fr",
        "--profile",
        "ci",
        "--verbose",
        "bonjour",
    ]);
    assert_eq!(cli.analyze.format, Some(OutputFormat::Json));
    assert_eq!(
        cli.analyze.embeddings_dir.as_deref(),
        Some(std::path::Path::new("/tmp/vec"))
    );
    assert_eq!(cli.analyze.default_language.as_deref(), Some("fr"));
    assert_eq!(cli.profile.as_deref(), Some("ci"));
    assert!(cli.verbose);
}

#[test]
fn completions_subcommand_needs_no_text() {
    let cli = parse(&["textlens", "completions", "bash"]);
    match cli.command {
        Some(Commands::Completions(args)) => assert_eq!(args.shell, Shell::Bash),
        other => panic!("expected completions subcommand, got {other:?}"),
    }
}

#[test]
fn output_format_parses_by_name() {
    assert_eq!(OutputFormat::parse_name("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::parse_name("TEXT"), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::parse_name("yaml"), None);
}
