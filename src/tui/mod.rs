//! Interactive terminal panel.
//!
//! Translates crossterm key and mouse events into controller events and
//! redraws the panel. The poll timeout doubles as the tooltip revert tick.

mod render;

pub use render::Layout;

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::{App, UiEvent};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::terminal::{ScreenGuard, clear};

/// Number of password display slots on the panel.
pub const SLOT_COUNT: usize = 2;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Panel controls in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Length,
    Toggle,
    Generate,
    Slot(usize),
}

impl Focus {
    fn next(self, slots: usize) -> Self {
        match self {
            Focus::Length => Focus::Toggle,
            Focus::Toggle => Focus::Generate,
            Focus::Generate if slots > 0 => Focus::Slot(0),
            Focus::Generate => Focus::Length,
            Focus::Slot(i) if i + 1 < slots => Focus::Slot(i + 1),
            Focus::Slot(_) => Focus::Length,
        }
    }

    fn prev(self, slots: usize) -> Self {
        match self {
            Focus::Length if slots > 0 => Focus::Slot(slots - 1),
            Focus::Length => Focus::Generate,
            Focus::Toggle => Focus::Length,
            Focus::Generate => Focus::Toggle,
            Focus::Slot(0) => Focus::Generate,
            Focus::Slot(i) => Focus::Slot(i - 1),
        }
    }
}

/// Run the interactive panel until the user quits.
pub fn run() -> Result<()> {
    let mut app = App::new(SystemClipboard::new(), SLOT_COUNT);
    let mut focus = Focus::Length;
    let mut guard = ScreenGuard::new()?;
    clear();

    loop {
        let layout = render::draw(&app, focus);

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !handle_key(key, &mut app, &mut focus) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse(mouse, &layout, &mut app, &mut focus),
                _ => {}
            }
        }

        app.handle(UiEvent::Tick, Instant::now());
    }

    guard.restore();
    clear();
    Ok(())
}

/// Returns false when the user asked to quit.
fn handle_key<C: Clipboard>(key: KeyEvent, app: &mut App<C>, focus: &mut Focus) -> bool {
    let now = Instant::now();
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
        KeyCode::Char('q') | KeyCode::Esc => return false,
        KeyCode::Tab | KeyCode::Down => {
            let to = focus.next(app.slots().len());
            set_focus(to, app, focus);
        }
        KeyCode::BackTab | KeyCode::Up => {
            let to = focus.prev(app.slots().len());
            set_focus(to, app, focus);
        }
        KeyCode::Char('+') => app.handle(UiEvent::Increment, now),
        KeyCode::Char('-') => app.handle(UiEvent::Decrement, now),
        KeyCode::Right if *focus == Focus::Length => app.handle(UiEvent::Increment, now),
        KeyCode::Left if *focus == Focus::Length => app.handle(UiEvent::Decrement, now),
        KeyCode::Char(c) if c.is_ascii_digit() && *focus == Focus::Length => {
            let mut buf = app.length_display().to_owned();
            buf.push(c);
            app.handle(UiEvent::LengthInput(buf), now);
        }
        KeyCode::Backspace if *focus == Focus::Length => {
            let mut buf = app.length_display().to_owned();
            buf.pop();
            app.handle(UiEvent::LengthInput(buf), now);
        }
        KeyCode::Char(' ') => match *focus {
            Focus::Length => {}
            Focus::Toggle => app.handle(UiEvent::ToggleNumSym, now),
            Focus::Generate => app.handle(UiEvent::Generate, now),
            Focus::Slot(i) => app.handle(UiEvent::Copy(i), now),
        },
        KeyCode::Enter => {
            if *focus == Focus::Length {
                app.handle(UiEvent::LengthBlur(app.length_display().to_owned()), now);
            }
            match *focus {
                Focus::Slot(i) => app.handle(UiEvent::Copy(i), now),
                _ => app.handle(UiEvent::Generate, now),
            }
        }
        KeyCode::Char('c') => {
            if let Focus::Slot(i) = *focus {
                app.handle(UiEvent::Copy(i), now);
            }
        }
        _ => {}
    }
    true
}

fn handle_mouse<C: Clipboard>(
    mouse: MouseEvent,
    layout: &Layout,
    app: &mut App<C>,
    focus: &mut Focus,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let now = Instant::now();
    let (col, row) = (mouse.column, mouse.row);

    if row == layout.length_row {
        set_focus(Focus::Length, app, focus);
        if col >= layout.minus_cols.0 && col < layout.minus_cols.1 {
            app.handle(UiEvent::Decrement, now);
        } else if col >= layout.plus_cols.0 && col < layout.plus_cols.1 {
            app.handle(UiEvent::Increment, now);
        }
    } else if row == layout.toggle_row {
        set_focus(Focus::Toggle, app, focus);
        app.handle(UiEvent::ToggleNumSym, now);
    } else if row == layout.generate_row {
        set_focus(Focus::Generate, app, focus);
        app.handle(UiEvent::Generate, now);
    } else if row >= layout.first_slot_row
        && ((row - layout.first_slot_row) as usize) < layout.slot_count
    {
        let index = (row - layout.first_slot_row) as usize;
        set_focus(Focus::Slot(index), app, focus);
        app.handle(UiEvent::Copy(index), now);
    }
}

/// Move focus, committing the length field whenever focus leaves it.
fn set_focus<C: Clipboard>(to: Focus, app: &mut App<C>, focus: &mut Focus) {
    if *focus == Focus::Length && to != Focus::Length {
        app.handle(
            UiEvent::LengthBlur(app.length_display().to_owned()),
            Instant::now(),
        );
    }
    *focus = to;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_controls() {
        let mut focus = Focus::Length;
        let mut seen = vec![focus];
        for _ in 0..(3 + SLOT_COUNT) {
            focus = focus.next(SLOT_COUNT);
            seen.push(focus);
        }
        // Full cycle lands back on the length field.
        assert_eq!(*seen.last().unwrap(), Focus::Length);
        assert!(seen.contains(&Focus::Toggle));
        assert!(seen.contains(&Focus::Generate));
        assert!(seen.contains(&Focus::Slot(0)));
        assert!(seen.contains(&Focus::Slot(SLOT_COUNT - 1)));
    }

    #[test]
    fn prev_undoes_next() {
        for start in [
            Focus::Length,
            Focus::Toggle,
            Focus::Generate,
            Focus::Slot(0),
            Focus::Slot(1),
        ] {
            assert_eq!(start.next(SLOT_COUNT).prev(SLOT_COUNT), start);
        }
    }
}
