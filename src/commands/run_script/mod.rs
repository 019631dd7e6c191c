mod error;
mod manifest;

pub use error::{Result, RunScriptError};
pub use manifest::PackageManifest;

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, ExitStatus};

use clap::Args;
use serde_json::Value;

use crate::shared::config::{Launcher, ScriptsConfig};

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RunScriptArgs {
    /// Script to run, as declared under "scripts" (e.g. test:tdd)
    pub script_name: String,

    /// Package manifest declaring the scripts [default: package.json]
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// How to launch the script [default: npm]
    #[arg(long, value_enum)]
    pub launcher: Option<Launcher>,
}

/// Run the declared script and mirror its exit status.
pub fn run(args: &RunScriptArgs, config: &ScriptsConfig) -> Result<ExitCode> {
    let (manifest, launcher) = invocation(args, config);
    let code = execute(manifest, &args.script_name, launcher)?;
    Ok(ExitCode::from(code))
}

/// Flags win over the project config.
fn invocation<'a>(args: &'a RunScriptArgs, config: &'a ScriptsConfig) -> (&'a Path, Launcher) {
    let manifest = args.manifest.as_deref().unwrap_or(config.manifest.as_path());
    let launcher = args.launcher.unwrap_or(config.launcher);
    (manifest, launcher)
}

/// Look up `name` in the manifest and run it, returning the exit code to mirror.
pub fn execute(manifest_path: &Path, name: &str, launcher: Launcher) -> Result<u8> {
    let manifest = PackageManifest::load(manifest_path)?;
    let Some(declared) = manifest.script(name) else {
        return Err(RunScriptError::MissingScript {
            name: name.to_string(),
            manifest: manifest_path.to_path_buf(),
        }
        .into());
    };

    let mut command = launch_command(launcher, name, declared)?;
    let rendered = describe(&command);
    tracing::info!(command = %rendered, "running package script");

    let status = command
        .status()
        .map_err(|source| RunScriptError::Launch {
            command: rendered,
            source,
        })?;
    tracing::debug!(%status, "package script finished");

    Ok(mirrored_exit_code(status))
}

fn launch_command(
    launcher: Launcher,
    name: &str,
    declared: &Value,
) -> std::result::Result<Command, RunScriptError> {
    match launcher {
        Launcher::Npm => {
            let mut command = Command::new("npm");
            command.args(["run", name]);
            Ok(command)
        }
        Launcher::Shell => {
            let script = declared.as_str().ok_or_else(|| RunScriptError::NotACommand {
                name: name.to_string(),
            })?;
            let mut command = Command::new("sh");
            command.args(["-c", script]);
            Ok(command)
        }
    }
}

fn describe(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Child's exit code, or 1 when it has none (killed by a signal) or it does
/// not fit a process exit code.
fn mirrored_exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}
