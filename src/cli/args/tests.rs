use clap::{CommandFactory, FromArgMatches};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
    let command = CliArgs::command();
    command.clone().debug_assert();
    assert!(command.get_about().is_some());
}

#[test]
fn parse_cli_accepts_default_arguments() {
    let command = CliArgs::command();
    let mut matches = command.get_matches_from(vec!["elpick"]);
    let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
    assert_eq!(parsed.output, OutputFormat::Plain);
    assert!(parsed.config.is_empty());
    assert!(!parsed.never_resolve);
}

#[test]
fn source_flags_are_parsed() {
    let command = CliArgs::command();
    let mut matches = command.get_matches_from(vec![
        "elpick",
        "--count",
        "40",
        "--fail-with",
        "offline",
        "--filter",
        ">100",
        "--output",
        "json",
    ]);
    let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
    assert_eq!(parsed.count, Some(40));
    assert_eq!(parsed.fail_with.as_deref(), Some("offline"));
    assert_eq!(parsed.filter.as_deref(), Some(">100"));
    assert_eq!(parsed.output, OutputFormat::Json);
}
