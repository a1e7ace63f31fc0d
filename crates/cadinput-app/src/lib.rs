//! CadInput Application
//!
//! Replays recorded digitizing input through the constraint engine and
//! reports the vertices a host would have received.

pub mod config;
pub mod error;
pub mod replay;
pub mod script;
pub mod shortcuts;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use replay::{ReplayReport, replay};
pub use script::{Script, ScriptEvent};
pub use shortcuts::ShortcutRegistry;

use std::path::PathBuf;

pub const USAGE: &str = "cadinput <script.json> [--config <config.json>] [--shortcuts]";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub script: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub shortcuts: bool,
}

impl Args {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> AppResult<Self> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::Usage(format!("--config needs a path\n{USAGE}")))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--shortcuts" => parsed.shortcuts = true,
                flag if flag.starts_with("--") => {
                    return Err(AppError::Usage(format!("unknown flag {flag}\n{USAGE}")));
                }
                _ if parsed.script.is_some() => {
                    return Err(AppError::Usage(format!("unexpected argument {arg}\n{USAGE}")));
                }
                _ => parsed.script = Some(PathBuf::from(&arg)),
            }
        }
        if parsed.script.is_none() && !parsed.shortcuts {
            return Err(AppError::Usage(USAGE.to_string()));
        }
        Ok(parsed)
    }
}

/// Load the config and script named by `args`, replay it and render the
/// report as JSON.
pub fn run(args: &Args) -> AppResult<Option<String>> {
    if args.shortcuts {
        ShortcutRegistry::print_all();
    }
    let Some(script_path) = &args.script else {
        return Ok(None);
    };

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let script = Script::load(script_path)?;
    log::info!("Replaying {} events from {}", script.events.len(), script_path.display());

    let report = replay(&script, &config.session);
    let json = if config.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(Some(json))
}
