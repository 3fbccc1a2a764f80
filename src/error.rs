//! Gitz error types and formatting
//!
//! **`GitzError`** is a typed enum for every fatal condition. Use `.into()` to
//! convert to `anyhow::Error` while preserving the type for pattern matching;
//! `Display` produces the styled message shown to users.
//!
//! Anomalies inside a status report are never errors: the parser absorbs them.

use std::path::PathBuf;

use color_print::{cformat, cwrite};

use crate::styling::{ERROR_EMOJI, HINT_EMOJI, format_path_for_display, format_with_gutter};

/// Fatal errors raised before or after the table is rendered.
///
/// ```ignore
/// return Err(GitzError::UnknownRepository { name: "dotfiles".into() }.into());
///
/// if let Some(GitzError::PickerFailed { code, .. }) = err.downcast_ref() {
///     std::process::exit(*code);
/// }
/// ```
#[derive(Debug, Clone)]
pub enum GitzError {
    // Configuration
    ConfigNotFound {
        searched: Vec<PathBuf>,
    },
    ConfigInvalid {
        path: PathBuf,
        error: String,
    },
    DuplicateRepository {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
    DiscoveryFailed {
        dir: PathBuf,
        error: String,
    },

    // Status reports
    ReportFailed {
        name: String,
        path: PathBuf,
        error: String,
    },
    EmptyReport {
        name: String,
        path: PathBuf,
    },

    // Picker
    PickerUnavailable {
        program: String,
    },
    PickerFailed {
        program: String,
        code: i32,
        error: String,
    },
    UnknownRepository {
        name: String,
    },
}

impl std::error::Error for GitzError {}

impl std::fmt::Display for GitzError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitzError::ConfigNotFound { searched } => {
                cwrite!(f, "{ERROR_EMOJI} <red>No configuration file found</>\n")?;
                let tried = searched
                    .iter()
                    .map(|p| format_path_for_display(p))
                    .collect::<Vec<_>>()
                    .join("\n");
                if !tried.is_empty() {
                    write!(f, "{}", format_with_gutter(&tried))?;
                }
                cwrite!(
                    f,
                    "\n{HINT_EMOJI} <dim>Create one of these files or pass </>--config"
                )
            }

            GitzError::ConfigInvalid { path, error } => {
                let path_display = format_path_for_display(path);
                let header =
                    cformat!("{ERROR_EMOJI} <red>Invalid configuration in <bold>{path_display}</></>");
                write!(f, "{}", format_error_block(header, error))
            }

            GitzError::DuplicateRepository {
                name,
                first,
                second,
            } => {
                let first = format_path_for_display(first);
                let second = format_path_for_display(second);
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>Repository name <bold>{name}</> is used twice</>\n\n{HINT_EMOJI} <dim>{first} and {second} need distinct names</>"
                )
            }

            GitzError::DiscoveryFailed { dir, error } => {
                let dir_display = format_path_for_display(dir);
                let header =
                    cformat!("{ERROR_EMOJI} <red>Cannot scan <bold>{dir_display}</> for repositories</>");
                write!(f, "{}", format_error_block(header, error))
            }

            GitzError::ReportFailed { name, path, error } => {
                let path_display = format_path_for_display(path);
                let header = cformat!(
                    "{ERROR_EMOJI} <red>Failed to read status of <bold>{name}</> at {path_display}</>"
                );
                write!(f, "{}", format_error_block(header, error))
            }

            GitzError::EmptyReport { name, path } => {
                let path_display = format_path_for_display(path);
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>Empty status report for <bold>{name}</> at {path_display}</>\n\n{HINT_EMOJI} <dim>Check that the path is a git repository</>"
                )
            }

            GitzError::PickerUnavailable { program } => {
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>Picker <bold>{program}</> is not installed</>\n\n{HINT_EMOJI} <dim>Install it or set </>picker.backend<dim> in the configuration</>"
                )
            }

            GitzError::PickerFailed {
                program,
                code,
                error,
            } => {
                let header =
                    cformat!("{ERROR_EMOJI} <red>Picker <bold>{program}</> exited with code {code}</>");
                write!(f, "{}", format_error_block(header, error))
            }

            GitzError::UnknownRepository { name } => {
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>No repository named <bold>{name}</></>"
                )
            }
        }
    }
}

/// Exit code for a failed run: the picker's own code when it failed, else 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<GitzError>() {
        Some(GitzError::PickerFailed { code, .. }) => *code,
        _ => 1,
    }
}

/// Format an error with header and gutter content
fn format_error_block(header: String, error: &str) -> String {
    let trimmed = error.trim();
    if trimmed.is_empty() {
        header
    } else {
        format!("{header}\n{}", format_with_gutter(trimmed))
    }
}
