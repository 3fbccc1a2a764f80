//! External command execution with timing and debug logging.

use std::process::{Command, Output};
use std::time::Instant;

/// Render a command line for logs and error messages.
pub fn describe(cmd: &Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Execute a command, capturing its output.
///
/// Every external command in gitz goes through here so that `--verbose`
/// shows what was run and how long it took:
///
/// ```text
/// $ git -C /home/me/src/dotfiles status --porcelain=v2 ... [dotfiles]
/// [gitz-trace] context=dotfiles dur=4.1ms ok=true
/// ```
///
/// `context` is usually the repository name.
pub fn run(cmd: &mut Command, context: Option<&str>) -> std::io::Result<Output> {
    let cmd_str = describe(cmd);

    match context {
        Some(ctx) => log::debug!("$ {} [{}]", cmd_str, ctx),
        None => log::debug!("$ {}", cmd_str),
    }

    let t0 = Instant::now();
    let result = cmd.output();
    let duration_ms = t0.elapsed().as_secs_f64() * 1000.0;
    let ctx = context.unwrap_or("-");

    match &result {
        Ok(output) => {
            log::debug!(
                "[gitz-trace] context={} dur={:.1}ms ok={}",
                ctx,
                duration_ms,
                output.status.success()
            );
            if !output.status.success() {
                for line in String::from_utf8_lossy(&output.stderr).lines() {
                    log::debug!("  ! {}", line);
                }
            }
        }
        Err(e) => {
            log::debug!(
                "[gitz-trace] context={} dur={:.1}ms err=\"{}\"",
                ctx,
                duration_ms,
                e
            );
        }
    }

    result
}
