//! End-to-end panel flow driven with a recording clipboard and a simulated
//! clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use passpanel::app::{App, PLACEHOLDER, UiEvent};
use passpanel::clipboard::Clipboard;
use passpanel::error::ClipboardError;
use passpanel::pass::Charset;

#[derive(Default, Clone)]
struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
    fail: Rc<RefCell<bool>>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if *self.fail.borrow() {
            return Err(ClipboardError::Write("denied".to_string()));
        }
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[test]
fn generate_toggle_and_copy_flow() {
    let clipboard = RecordingClipboard::default();
    let mut app = App::new(clipboard.clone(), 2);
    let t0 = Instant::now();

    // Defaults: length 12, numbers and symbols on.
    app.handle(UiEvent::Generate, t0);
    let full_pool = Charset::new(true);
    assert_eq!(full_pool.len(), 92);
    for slot in app.slots() {
        let pwd = slot.password().expect("generated slot");
        assert_eq!(pwd.len(), 12);
        assert!(pwd.bytes().all(|b| full_pool.snapshot().contains(&b)));
    }

    // Toggling extras off strips digits and symbols from the next batch.
    app.handle(UiEvent::ToggleNumSym, t0);
    app.handle(UiEvent::Generate, t0);
    for slot in app.slots() {
        let pwd = slot.password().unwrap();
        assert_eq!(pwd.len(), 12);
        assert!(pwd.bytes().all(|b| b.is_ascii_alphabetic()));
    }

    // Copying a slot lands the exact text on the clipboard and confirms it.
    let pwd = app.slots()[0].password().unwrap().to_string();
    app.handle(UiEvent::Copy(0), t0);
    assert_eq!(clipboard.writes.borrow().as_slice(), [pwd.clone()]);
    assert!(app.tooltip().visible());
    assert_eq!(app.tooltip().text(), format!("Copied: {pwd}"));

    // The tooltip reverts 2000ms later on the simulated clock.
    app.handle(UiEvent::Tick, t0 + Duration::from_millis(1999));
    assert!(app.tooltip().visible());
    app.handle(UiEvent::Tick, t0 + Duration::from_millis(2000));
    assert!(!app.tooltip().visible());
    assert_eq!(app.tooltip().text(), PLACEHOLDER);
}

#[test]
fn length_editing_flow_matches_field_behavior() {
    let mut app = App::new(RecordingClipboard::default(), 2);
    let t0 = Instant::now();

    // Typing "999" clamps the stored value and the display to the max.
    app.handle(UiEvent::LengthInput("9".to_string()), t0);
    app.handle(UiEvent::LengthInput("99".to_string()), t0);
    app.handle(UiEvent::LengthInput("999".to_string()), t0);
    assert_eq!(app.length_display(), "52");
    assert_eq!(app.settings().length(), 52);

    // Clearing the field keeps it visibly empty but stores the minimum.
    app.handle(UiEvent::LengthInput(String::new()), t0);
    assert_eq!(app.length_display(), "");
    assert_eq!(app.settings().length(), 4);

    // Blur commits the full clamp and rewrites the display.
    app.handle(UiEvent::LengthBlur(String::new()), t0);
    assert_eq!(app.length_display(), "4");
    assert_eq!(app.settings().length(), 4);

    app.handle(UiEvent::Generate, t0);
    assert_eq!(app.slots()[0].password().unwrap().len(), 4);
}

#[test]
fn failed_copy_reverts_without_claiming_success() {
    let clipboard = RecordingClipboard::default();
    let mut app = App::new(clipboard.clone(), 1);
    let t0 = Instant::now();

    app.handle(UiEvent::Generate, t0);
    *clipboard.fail.borrow_mut() = true;
    app.handle(UiEvent::Copy(0), t0);

    assert_eq!(app.tooltip().text(), "Copy failed");
    assert!(app.tooltip().failed());

    app.handle(UiEvent::Tick, t0 + Duration::from_millis(2000));
    assert_eq!(app.tooltip().text(), PLACEHOLDER);
    assert!(!app.tooltip().visible());

    // The widget stays interactive after the failure.
    *clipboard.fail.borrow_mut() = false;
    app.handle(UiEvent::Copy(0), t0 + Duration::from_millis(2100));
    assert!(app.tooltip().visible());
    assert!(!app.tooltip().failed());
}
