//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, and raw-mode friendly frame printing.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
pub const REVERSE: &str = "\x1b[7m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Print a full frame from the home position with explicit carriage
/// returns, so output stays aligned while raw mode is active. Each line is
/// cleared to its end and leftovers below the frame are erased.
pub fn draw_frame(lines: &[String]) {
    let mut out = String::from("\x1b[H");
    for line in lines {
        out.push_str(line);
        out.push_str("\x1b[K\r\n");
    }
    out.push_str("\x1b[J");
    print!("{out}");
    flush();
}

// ============================================================================
// Box Drawing (66 char width: fits "Copied: " plus a max-length password)
// ============================================================================

pub const BOX_WIDTH: usize = 66;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let width = display_width(content);

    if width <= inner_width {
        format!("│ {}{} │", content, " ".repeat(inner_width - width))
    } else {
        format!("│ {} │", content)
    }
}

/// Centered box content line: │          content          │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let width = display_width(content);

    if width <= inner_width {
        let total = inner_width - width;
        let left = total / 2;
        format!(
            "│ {}{}{} │",
            " ".repeat(left),
            content,
            " ".repeat(total - left)
        )
    } else {
        format!("│ {} │", content)
    }
}

/// Flag/description line for help output.
pub fn box_opt(flag: &str, description: &str) -> String {
    box_line(&format!("{flag:<22}{description}"))
}

/// Box bottom: └──────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Printable width of a string, skipping ANSI escape sequences.
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for e in chars.by_ref() {
                if e == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ignores_ansi_sequences() {
        assert_eq!(display_width("plain"), 5);
        assert_eq!(display_width(&format!("{RED}ab{RESET}")), 2);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn box_lines_have_uniform_width() {
        let lines = [
            box_top("title"),
            box_top(""),
            box_line("content"),
            box_line(&format!("{DIM}styled{RESET}")),
            box_line_center("mid"),
            box_bottom(),
        ];
        for line in &lines {
            assert_eq!(display_width(line), BOX_WIDTH, "line: {line}");
        }
    }
}
