use clap::Parser;

use crate::cli::Args;
use crate::config::ExecutionMode;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("bounce-trigger").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_mode_flag_selects_either_mode() {
    assert_eq!(
        parse(&["--mode", "background"]).overrides().execution_mode,
        Some(ExecutionMode::Background)
    );
    assert_eq!(
        parse(&["--mode", "blocking"]).overrides().execution_mode,
        Some(ExecutionMode::Blocking)
    );
}

#[test]
fn test_mode_left_to_config_when_absent() {
    assert_eq!(parse(&[]).overrides().execution_mode, None);
}

#[test]
fn test_unknown_mode_rejected() {
    assert!(Args::try_parse_from(["bounce-trigger", "--mode", "detached"]).is_err());
}
