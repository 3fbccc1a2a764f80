use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use anstream::ColorChoice;
use clap::{Parser, Subcommand};
use color_print::cformat;
use gitz::GitzError;
use gitz::error::exit_code;
use gitz::styling::{ERROR_EMOJI, eprintln};

mod commands;
mod output;

use commands::{LoadedConfig, handle_list, handle_preview, handle_select};
use output::StreamOutput;

#[derive(Parser)]
#[command(name = "gitz")]
#[command(about = "Jump between git repositories, ranked by what needs attention", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Enable verbose output (show git commands and debug info)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Configuration file to use instead of the default lookup
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also scan `repos-under` directories
    #[arg(long, short = 'a')]
    all: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a repository and print `cd:<path>` for the shell wrapper (default)
    Start {
        /// Also scan `repos-under` directories
        #[arg(long, short = 'a')]
        all: bool,
    },

    /// Print the status table
    List {
        /// Also scan `repos-under` directories
        #[arg(long, short = 'a')]
        all: bool,
    },

    /// Show the path and short status of the repository on a table row
    #[command(hide = true)]
    Preview {
        /// A row of the status table, as passed by `fzf --preview`
        line: String,
    },
}

fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "off" }),
    )
    .format(|buf, record| {
        use anstyle::Style;
        use std::io::Write;

        let msg = record.args().to_string();
        let severity = match record.level() {
            log::Level::Error => 'E',
            log::Level::Warn => 'W',
            log::Level::Info => 'I',
            log::Level::Debug => 'D',
            log::Level::Trace => 'T',
        };
        let dim = Style::new().dimmed();
        let prefix = format!("{severity}|{}]", record.target());

        // Commands start with $, make only the command bold (not $ or [repo])
        if let Some(rest) = msg.strip_prefix("$ ") {
            let bold = Style::new().bold();
            if let Some(bracket_pos) = rest.rfind(" [") {
                let command = &rest[..bracket_pos];
                let context = &rest[bracket_pos..];
                writeln!(buf, "{dim}{prefix}{dim:#} $ {bold}{command}{bold:#}{context}")
            } else {
                writeln!(buf, "{dim}{prefix}{dim:#} $ {bold}{rest}{bold:#}")
            }
        } else if msg.starts_with("  ! ") {
            use anstyle::{AnsiColor, Color};
            let red = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
            writeln!(buf, "{dim}{prefix}{dim:#} {red}{msg}{red:#}")
        } else {
            writeln!(buf, "{dim}{prefix}{dim:#} {msg}")
        }
    })
    .init();
}

/// Colors for preview text: fzf's preview window isn't a terminal but renders ANSI.
fn preview_wants_color() -> bool {
    std::io::stdout().is_terminal() || std::env::var_os("FZF_PREVIEW_COLUMNS").is_some()
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Start { all: cli.all });

    let result = LoadedConfig::load(cli.config.as_deref()).and_then(|loaded| match command {
        Commands::Start { all } => {
            let mut output = StreamOutput::stdio(ColorChoice::Auto);
            handle_select(&loaded, all || cli.all, &mut output)
        }
        Commands::List { all } => {
            let mut output = StreamOutput::stdio(ColorChoice::Auto);
            handle_list(&loaded, all || cli.all, &mut output)
        }
        Commands::Preview { line } => {
            let color = preview_wants_color();
            let choice = if color {
                ColorChoice::Always
            } else {
                ColorChoice::Auto
            };
            let mut output = StreamOutput::stdio(choice);
            handle_preview(&loaded, &line, color, &mut output)
        }
    });

    if let Err(e) = result {
        // Typed errors are already formatted with emoji and colors
        if let Some(gitz_err) = e.downcast_ref::<GitzError>() {
            eprintln!("{}", gitz_err);
        } else {
            let message = format!("{e:#}");
            eprintln!("{}", cformat!("{ERROR_EMOJI} <red>{message}</>"));
        }
        process::exit(exit_code(&e));
    }
}
