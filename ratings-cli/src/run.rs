//! Run command implementation for the food ratings CLI.

use std::io::{self, BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use ratings_core::{DEFAULT_LIST, DEMO_FOODS, ListRegistry};
use serde::{Deserialize, Serialize};

use crate::session::{Operation, Outcome, SessionRunner};
use crate::{ARG_DEFAULT_LIST, ARG_SEED_DEMO, ARG_SESSION, CliError, ENV_SESSION};

/// CLI arguments for the `run` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "run",
    long_about = "Replay a JSON session of list and food operations against \
                 an in-memory registry and print one JSON outcome per \
                 operation. Options can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Replay a session of rating operations"
)]
#[ortho_config(prefix = "FOOD_RATINGS")]
pub(crate) struct RunArgs {
    /// Path to a JSON file containing an array of operations.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) session_path: Option<Utf8PathBuf>,
    /// Fill the default list with the demonstration foods before replaying.
    #[arg(
        long = ARG_SEED_DEMO,
        value_name = "bool",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) seed_demo: Option<bool>,
    /// List used by operations that do not name one.
    #[arg(long = ARG_DEFAULT_LIST, value_name = "name")]
    #[serde(default)]
    pub(crate) default_list: Option<String>,
}

impl RunArgs {
    pub(crate) fn into_config(self) -> Result<RunConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RunConfig::try_from(merged)
    }
}

/// Resolved `run` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunConfig {
    /// Path to the JSON session file.
    pub(crate) session_path: Utf8PathBuf,
    /// Whether the default list starts with the demonstration foods.
    pub(crate) seed_demo: bool,
    /// List used by operations that do not name one.
    pub(crate) default_list: String,
}

impl RunConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.session_path, ARG_SESSION)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Build the registry the session runs against.
    pub(crate) fn registry(&self) -> ListRegistry {
        if self.seed_demo {
            info!("seeding list {} with demo foods", self.default_list);
            ListRegistry::with_seed(&self.default_list, &DEMO_FOODS)
        } else {
            ListRegistry::new()
        }
    }
}

impl TryFrom<RunArgs> for RunConfig {
    type Error = CliError;

    fn try_from(args: RunArgs) -> Result<Self, Self::Error> {
        let session_path = args.session_path.ok_or(CliError::MissingArgument {
            field: ARG_SESSION,
            env: ENV_SESSION,
        })?;
        Ok(Self {
            session_path,
            seed_demo: args.seed_demo.unwrap_or(false),
            default_list: args
                .default_list
                .unwrap_or_else(|| DEFAULT_LIST.to_owned()),
        })
    }
}

/// Report whether `path` exists and is a regular file, using capability-based IO.
fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("session path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

pub(super) fn run_session(args: RunArgs) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    run_session_with(args, &mut stdout)
}

pub(super) fn run_session_with(args: RunArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_run_config(args)?;
    let outcomes = execute_session(&config)?;
    write_outcomes(writer, &outcomes)
}

pub(super) fn resolve_run_config(args: RunArgs) -> Result<RunConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_session(config: &RunConfig) -> Result<Vec<Outcome>, CliError> {
    let operations = load_session(&config.session_path)?;
    let registry = config.registry();
    let runner = SessionRunner::new(&registry, &config.default_list);
    Ok(runner.replay(&operations))
}

/// Loads a JSON-encoded session from disk.
pub(super) fn load_session(path: &Utf8Path) -> Result<Vec<Operation>, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenSession {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseSession {
        path: path.to_path_buf(),
        source,
    })
}

fn write_outcomes(writer: &mut dyn Write, outcomes: &[Outcome]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(outcomes).map_err(CliError::SerialiseOutcomes)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RunConfig, CliError> {
    let merged = RunArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RunConfig::try_from(merged)
}
