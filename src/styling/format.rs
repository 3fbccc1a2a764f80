//! Block and path formatting for messages.

use std::path::Path;

use anstyle::{AnsiColor, Color, Style};

/// Prefix every line of `content` with a dark gutter bar.
///
/// Used for quoting output of external commands inside error messages.
pub fn format_with_gutter(content: &str) -> String {
    let gutter = Style::new().bg_color(Some(Color::Ansi(AnsiColor::Black)));
    let mut output = String::new();
    for line in content.lines() {
        output.push_str(&format!("{gutter} {gutter:#}  {line}\n"));
    }
    output
}

/// Show a path with the home directory collapsed to `~`.
pub fn format_path_for_display(path: &Path) -> String {
    if let Ok(home) = etcetera::home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }
    path.display().to_string()
}
