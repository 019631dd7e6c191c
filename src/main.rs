mod cli;
mod commands;
mod infra;
mod shared;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use shared::config::load_config;
use shared::env_var::EnvVars;

fn main() -> ExitCode {
    let Cli { command } = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1 like every other failure; --help/--version exit 0.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let env = EnvVars::load();
    shared::logging::init(&env);

    match run(command, &env) {
        Ok(code) => code,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, env: &EnvVars) -> anyhow::Result<ExitCode> {
    match command {
        Commands::CheckBranch => {
            let config = load_config()?;
            commands::check_branch::run(env, &config.branch)?;
        }
        Commands::CheckCoverage(args) => {
            let config = load_config()?;
            commands::check_coverage::run(&args, &config.coverage)?;
        }
        Commands::RunScript(args) => {
            let config = load_config()?;
            return commands::run_script::run(&args, &config.scripts);
        }
        Commands::Config(config_cmd) => config_cmd.run()?,
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "ci-guard",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print the error and each underlying cause on its own line.
fn report(err: &anyhow::Error) {
    for cause in err.chain() {
        eprintln!("{cause}");
    }
}
