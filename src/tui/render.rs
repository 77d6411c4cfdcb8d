//! Panel rendering and click-target layout.

use crate::app::{App, SlotContent};
use crate::clipboard::Clipboard;
use crate::terminal::{
    DIM, GREEN, RED, RESET, REVERSE, box_bottom, box_line, box_line_center, box_top, draw_frame,
};

use super::Focus;

/// Screen rows and columns of the clickable controls, valid for the frame
/// that was just drawn.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub length_row: u16,
    pub toggle_row: u16,
    pub generate_row: u16,
    pub first_slot_row: u16,
    pub slot_count: usize,
    /// Inclusive start, exclusive end.
    pub minus_cols: (u16, u16),
    pub plus_cols: (u16, u16),
}

// Column spans of the stepper buttons inside the length line. The line is
// built as `│ Length: [-] NNNN [+]`, so these are fixed.
const MINUS_COLS: (u16, u16) = (10, 13);
const PLUS_COLS: (u16, u16) = (19, 22);

/// Draw the whole panel and report where the controls landed.
pub fn draw<C: Clipboard>(app: &App<C>, focus: Focus) -> Layout {
    let slot_count = app.slots().len();
    let mut lines: Vec<String> = Vec::with_capacity(10 + slot_count);

    lines.push(box_top("passpanel"));
    lines.push(box_line(&length_line(app, focus == Focus::Length)));
    lines.push(box_line(&toggle_line(app, focus == Focus::Toggle)));
    lines.push(box_line(&generate_line(focus == Focus::Generate)));
    lines.push(box_line(""));

    for (index, slot) in app.slots().iter().enumerate() {
        lines.push(box_line(&slot_line(
            index,
            slot.content(),
            focus == Focus::Slot(index),
        )));
    }

    lines.push(box_line(""));
    lines.push(box_line(&tooltip_line(app)));
    lines.push(box_line_center(&format!(
        "{DIM}non-cryptographic RNG · casual use only{RESET}"
    )));
    lines.push(box_bottom());
    lines.push(format!(
        "{DIM}Tab move · +/- length · Space act · Enter generate · c copy · q quit{RESET}"
    ));
    if focus == Focus::Length {
        lines.push(format!(
            "{DIM}Set password length between {} and {}{RESET}",
            app.settings().min_length(),
            app.settings().max_length()
        ));
    }

    draw_frame(&lines);

    Layout {
        length_row: 1,
        toggle_row: 2,
        generate_row: 3,
        first_slot_row: 5,
        slot_count,
        minus_cols: MINUS_COLS,
        plus_cols: PLUS_COLS,
    }
}

fn length_line<C: Clipboard>(app: &App<C>, focused: bool) -> String {
    let buf = app.length_display();
    let field = if focused {
        format!("{REVERSE}{buf:^4}{RESET}")
    } else {
        format!("{buf:^4}")
    };
    format!(
        "Length: [-] {field} [+]  {DIM}{}-{}{RESET}",
        app.settings().min_length(),
        app.settings().max_length()
    )
}

fn toggle_line<C: Clipboard>(app: &App<C>, focused: bool) -> String {
    let mark = if app.settings().include_num_sym() {
        'x'
    } else {
        ' '
    };
    let label = format!("[{mark}] Numbers & symbols");
    if focused {
        format!("{REVERSE}{label}{RESET}")
    } else {
        label
    }
}

fn generate_line(focused: bool) -> String {
    if focused {
        format!("{REVERSE}[ Generate ]{RESET}")
    } else {
        "[ Generate ]".to_string()
    }
}

fn slot_line(index: usize, content: &SlotContent, focused: bool) -> String {
    let body = match content {
        SlotContent::Empty => format!("{DIM}(press Generate){RESET}"),
        SlotContent::Password(pwd) => pwd.clone(),
        SlotContent::Error(msg) => format!("{RED}{msg}{RESET}"),
    };
    if focused {
        format!("{REVERSE}{}){RESET} {body}", index + 1)
    } else {
        format!("{}) {body}", index + 1)
    }
}

fn tooltip_line<C: Clipboard>(app: &App<C>) -> String {
    let tooltip = app.tooltip();
    if !tooltip.visible() {
        return format!("{DIM}{}{RESET}", tooltip.text());
    }
    if tooltip.failed() {
        format!("{RED}{}{RESET}", tooltip.text())
    } else {
        format!("{GREEN}{}{RESET}", tooltip.text())
    }
}
