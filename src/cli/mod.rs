//! Non-interactive command-line mode.

mod parse;
mod run;

pub use parse::{CliFlags, ParseError, parse};
pub use run::run;

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    let lines = [
        box_top("passpanel"),
        box_line_center("Casual-use password generator"),
        box_line(""),
        box_line("Generates random passwords from letters, digits, and symbols."),
        box_line("Built on a fast NON-cryptographic RNG: fine for throwaway"),
        box_line("accounts, wrong for anything you care about."),
        box_line(""),
        box_line("USAGE:"),
        box_line("  passpanel             Interactive panel"),
        box_line("  passpanel [OPTIONS]   Print passwords and exit"),
        box_line(""),
        box_line("OPTIONS:"),
        box_opt("  -l, --length <N>", "Characters per password (4-52, default: 12)"),
        box_opt("  -n, --number <N>", "How many to generate (default: 1)"),
        box_opt("      --no-extras", "Letters only, no digits or symbols"),
        box_opt("  -b, --board", "Copy to clipboard instead of printing"),
        box_opt("  -h, --help", "Display this help message"),
        box_opt("  -v, --version", "Display version"),
        box_line(""),
        box_line("EXAMPLES:"),
        box_line("  passpanel -l 16          One password, 16 characters"),
        box_line("  passpanel -l 20 -n 3     Three passwords, 20 characters each"),
        box_line("  passpanel --no-extras    Letters only"),
        box_line("  passpanel -b             Straight to the clipboard"),
        box_bottom(),
    ];
    for line in lines {
        println!("{line}");
    }
}
