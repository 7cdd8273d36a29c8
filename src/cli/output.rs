//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: sections, commands, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::{style, StyledObject};
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

fn colors_enabled_stderr() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

fn paint<D>(value: D) -> StyledObject<D> {
    style(value).force_styling(colors_enabled())
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ vault created`
pub fn success(msg: &str) {
    println!("{} {}", paint("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ invalid passphrase`
pub fn error(msg: &str) {
    let mark = style("✗").red().force_styling(colors_enabled_stderr());
    eprintln!("{} {}", mark, msg);
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    println!("{} {}", paint("⚠").yellow(), msg);
}

/// Print a warning to stderr (yellow), keeping stdout clean for `--json`.
pub fn caution(msg: &str) {
    let mark = style("⚠").yellow().force_styling(colors_enabled_stderr());
    eprintln!("{} {}", mark, msg);
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: keepsake init`
pub fn hint(msg: &str) {
    let enabled = colors_enabled_stderr();
    eprintln!(
        "{} {}",
        style("→").cyan().force_styling(enabled),
        style(msg).cyan().force_styling(enabled)
    );
}

/// Print a bold header.
pub fn header(title: &str) {
    println!("{}", paint(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  status:  alive`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", paint(label).dim(), paint(value.to_string()).bold());
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", paint("─".repeat(RULE_WIDTH)).dim());
}

/// Format a command string in green for inline use.
pub fn cmd(c: &str) -> String {
    paint(c).green().to_string()
}

/// Format a section or title in cyan for inline use.
pub fn name(n: &str) -> String {
    paint(n).cyan().to_string()
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", paint(msg).dim());
}

/// Print a header with a separator line.
///
/// ```text
/// Passwords
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}
