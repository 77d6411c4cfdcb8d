//! Command-line flag parsing.

use thiserror::Error;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub board: bool,
    pub no_extras: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-b" | "--board" => flags.board = true,
            "--no-extras" => flags.no_extras = true,
            "-l" | "--length" => flags.length = Some(numeric_value(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(numeric_value(args, &mut i)?),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn numeric_value(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    let flag = args[*i].clone();
    *i += 1;
    let Some(value) = args.get(*i) else {
        return Err(ParseError::MissingValue(flag));
    };
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passpanel")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_number_and_switches() {
        let flags = parse(&args(&["-l", "20", "-n", "3", "--no-extras", "-b"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_extras);
        assert!(flags.board);
        assert!(!flags.help);
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert_eq!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg("--bogus".to_string()))
        );
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(
            parse(&args(&["-l", "abc"])),
            Err(ParseError::InvalidNumber("abc".to_string()))
        );
    }

    #[test]
    fn rejects_trailing_value_flags() {
        assert_eq!(
            parse(&args(&["-n"])),
            Err(ParseError::MissingValue("-n".to_string()))
        );
    }
}
