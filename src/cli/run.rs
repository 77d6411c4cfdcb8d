//! Non-interactive generation: print passwords (or copy them) and exit.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use zeroize::Zeroize;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::pass::{Charset, generate};
use crate::settings::Settings;

use super::{parse, print_help};

pub fn run(args: &[String]) -> Result<()> {
    let flags = parse(args)?;

    if flags.help {
        print_help();
        return Ok(());
    }
    if flags.version {
        println!("passpanel {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut settings = Settings::default();
    settings.set_include_num_sym(!flags.no_extras);
    if let Some(length) = flags.length {
        // Out-of-range requests clamp rather than error, same as the panel.
        settings.set_length(length);
    }

    let charset = Charset::new(settings.include_num_sym());
    let mut rng = SmallRng::from_entropy();
    let count = flags.number.unwrap_or(1).max(1);

    let mut out = String::new();
    for _ in 0..count {
        out.push_str(&generate(settings.length(), charset.snapshot(), &mut rng)?);
        out.push('\n');
    }

    if flags.board {
        let mut clipboard = SystemClipboard::new();
        match clipboard.write_text(out.trim_end()) {
            Ok(()) => println!("*** -COPIED TO CLIPBOARD- ***"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed, printing instead");
                eprintln!("Clipboard error: {e}");
                print!("{out}");
            }
        }
    } else {
        print!("{out}");
    }

    out.zeroize();
    Ok(())
}
