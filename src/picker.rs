//! Interactive selection of one table row.
//!
//! Pickers receive the rendered table (header rows first) and hand back the
//! selected line verbatim; mapping it to a repository is the collection's job.

use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::Context;

use crate::config::{PickerBackend, PickerConfig};
use crate::error::GitzError;
use crate::render::{HEADER_LINES, Table};
use crate::shell_exec;

/// fzf's exit code when the user aborts with Esc or Ctrl-C
const FZF_CANCELLED: i32 = 130;

/// Shell command the picker runs for its preview window; `{}` is the
/// focused line.
///
/// The configuration file in use is passed along so the preview resolves
/// rows against the same repositories as the table.
pub fn preview_command(config_path: Option<&Path>) -> String {
    match config_path {
        Some(path) => format!(
            "gitz --config {} preview {{}}",
            shell_escape::escape(path.to_string_lossy())
        ),
        None => "gitz preview {}".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The chosen line, ANSI codes possibly included
    Selected(String),
    Cancelled,
}

pub trait Picker {
    fn pick(&self, table: &Table) -> anyhow::Result<PickOutcome>;
}

/// Build the picker named in the configuration.
pub fn from_config(config: &PickerConfig, config_path: Option<&Path>) -> Box<dyn Picker> {
    match config.backend {
        PickerBackend::Fzf => Box::new(FzfPicker::new(config, config_path)),
        #[cfg(unix)]
        PickerBackend::Skim => Box::new(SkimPicker::new(config, config_path)),
        #[cfg(not(unix))]
        PickerBackend::Skim => {
            log::warn!("skim is unavailable on this platform, using fzf");
            Box::new(FzfPicker::new(config, config_path))
        }
    }
}

/// Runs the external `fzf` binary.
#[derive(Debug, Clone)]
pub struct FzfPicker {
    program: String,
    /// Arguments placed before fzf's own, e.g. `-u30%` for `fzf-tmux`
    leading_args: Vec<String>,
    height: String,
    /// Preview command, when the preview window is enabled
    preview: Option<String>,
}

impl FzfPicker {
    pub fn new(config: &PickerConfig, config_path: Option<&Path>) -> Self {
        Self {
            program: "fzf".to_string(),
            leading_args: Vec::new(),
            height: config.height.clone(),
            preview: config.preview.then(|| preview_command(config_path)),
        }
    }

    /// Use a different executable speaking fzf's protocol, such as `fzf-tmux`.
    pub fn with_command(mut self, program: impl Into<String>, leading_args: &[&str]) -> Self {
        self.program = program.into();
        self.leading_args = leading_args.iter().map(|a| a.to_string()).collect();
        self
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--height={}", self.height),
            "--min-height=15".to_string(),
            format!("--header-lines={HEADER_LINES}"),
            "--ansi".to_string(),
            "--no-border".to_string(),
            "--margin=1".to_string(),
            "--nth=1".to_string(),
        ];
        if let Some(command) = &self.preview {
            args.push("--preview".to_string());
            args.push(command.clone());
        }
        args
    }
}

impl Picker for FzfPicker {
    fn pick(&self, table: &Table) -> anyhow::Result<PickOutcome> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        log::debug!("$ {}", shell_exec::describe(&cmd));

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(GitzError::PickerUnavailable {
                    program: self.program.clone(),
                }
                .into());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to start {}", self.program));
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            let input = table.to_ansi();
            // The picker may exit before reading everything
            if let Err(e) = writeln!(stdin, "{input}")
                && e.kind() != ErrorKind::BrokenPipe
            {
                return Err(e).context("Failed to write to picker");
            }
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for {}", self.program))?;

        match output.status.code() {
            Some(0) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let line = stdout.lines().next().unwrap_or_default().to_string();
                Ok(PickOutcome::Selected(line))
            }
            Some(FZF_CANCELLED) => Ok(PickOutcome::Cancelled),
            code => Err(GitzError::PickerFailed {
                program: self.program.clone(),
                code: code.unwrap_or(1),
                error: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into()),
        }
    }
}

#[cfg(unix)]
pub use skim_picker::SkimPicker;

#[cfg(unix)]
mod skim_picker {
    use std::borrow::Cow;
    use std::path::Path;
    use std::sync::Arc;

    use skim::prelude::*;

    use super::{PickOutcome, Picker, preview_command};
    use crate::config::PickerConfig;
    use crate::render::{HEADER_LINES, Table};

    /// One table line; header lines included so skim can pin them.
    struct TableLineItem {
        plain: String,
        ansi: String,
    }

    impl SkimItem for TableLineItem {
        fn text(&self) -> Cow<'_, str> {
            Cow::Borrowed(&self.plain)
        }

        fn display<'a>(&'a self, _context: DisplayContext<'a>) -> AnsiString<'a> {
            AnsiString::parse(&self.ansi)
        }

        fn output(&self) -> Cow<'_, str> {
            Cow::Borrowed(&self.plain)
        }
    }

    /// In-process selector built on skim.
    #[derive(Debug, Clone)]
    pub struct SkimPicker {
        height: String,
        preview: Option<String>,
    }

    impl SkimPicker {
        pub fn new(config: &PickerConfig, config_path: Option<&Path>) -> Self {
            Self {
                height: config.height.clone(),
                preview: config.preview.then(|| preview_command(config_path)),
            }
        }
    }

    impl Picker for SkimPicker {
        fn pick(&self, table: &Table) -> anyhow::Result<PickOutcome> {
            let options = SkimOptionsBuilder::default()
                .height(self.height.clone())
                .layout("reverse".to_string())
                .header_lines(HEADER_LINES)
                .multi(false)
                .no_info(true)
                .preview(self.preview.clone())
                .color(Some("fg:-1,bg:-1,header:-1".to_string()))
                .build()
                .map_err(|e| anyhow::anyhow!(format!("Failed to build skim options: {}", e)))?;

            let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();
            for line in table.header.iter().chain(&table.rows) {
                let item = TableLineItem {
                    plain: line.plain_text(),
                    ansi: line.render(),
                };
                tx.send(Arc::new(item) as Arc<dyn SkimItem>)
                    .map_err(|e| anyhow::anyhow!(format!("Failed to send item to skim: {}", e)))?;
            }
            drop(tx);

            let output = Skim::run_with(&options, Some(rx));
            match output {
                Some(out) if !out.is_abort => Ok(out
                    .selected_items
                    .first()
                    .map(|item| PickOutcome::Selected(item.output().into_owned()))
                    .unwrap_or(PickOutcome::Cancelled)),
                _ => Ok(PickOutcome::Cancelled),
            }
        }
    }

}
