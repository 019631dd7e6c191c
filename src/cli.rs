use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::check_coverage::CheckCoverageArgs;
use crate::commands::config::ConfigCommands;
use crate::commands::run_script::RunScriptArgs;

#[derive(Parser)]
#[command(
    name = "ci-guard",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Verify the branch is rebased on its base branch and has linear history
    CheckBranch,

    /// Check line coverage in a coverage summary against a minimum
    CheckCoverage(CheckCoverageArgs),

    /// Run a script declared in package.json and exit with its status
    RunScript(RunScriptArgs),

    /// Configuration file tools
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Launcher;
    use clap::CommandFactory;
    use rstest::rstest;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Result<Commands, clap::Error> {
        Cli::try_parse_from(std::iter::once("ci-guard").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_branch_takes_no_arguments() {
        assert!(matches!(parse(&["check-branch"]), Ok(Commands::CheckBranch)));
        assert!(parse(&["check-branch", "main"]).is_err());
    }

    #[test]
    fn check_coverage_defaults_to_config() {
        let Ok(Commands::CheckCoverage(args)) = parse(&["check-coverage"]) else {
            panic!("expected check-coverage");
        };
        assert_eq!(args.file, None);
        assert_eq!(args.min, None);
    }

    #[test]
    fn check_coverage_accepts_file_and_min() {
        let Ok(Commands::CheckCoverage(args)) =
            parse(&["check-coverage", "--file", "cov/summary.json", "--min", "72.5"])
        else {
            panic!("expected check-coverage");
        };
        assert_eq!(args.file, Some(PathBuf::from("cov/summary.json")));
        assert_eq!(args.min, Some(72.5));
    }

    #[rstest]
    #[case::missing_value(&["check-coverage", "--min"])]
    #[case::non_numeric(&["check-coverage", "--min", "abc"])]
    #[case::nan(&["check-coverage", "--min", "NaN"])]
    #[case::unknown_flag(&["check-coverage", "--max", "90"])]
    fn check_coverage_rejects_invalid_arguments(#[case] args: &[&str]) {
        let err = parse(args).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn run_script_requires_a_name() {
        let err = parse(&["run-script"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn run_script_parses_name_and_options() {
        let Ok(Commands::RunScript(args)) = parse(&[
            "run-script",
            "test:tdd",
            "--manifest",
            "web/package.json",
            "--launcher",
            "shell",
        ]) else {
            panic!("expected run-script");
        };
        assert_eq!(args.script_name, "test:tdd");
        assert_eq!(args.manifest, Some(PathBuf::from("web/package.json")));
        assert_eq!(args.launcher, Some(Launcher::Shell));
    }

    #[test]
    fn help_is_not_an_error() {
        let err = parse(&["--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
