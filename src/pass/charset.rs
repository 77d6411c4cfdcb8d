//! Character set building for password generation.

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"~`!@#$%^&*()_-+={[}],|:;<>.?/\\";

/// The character pool passwords are sampled from.
///
/// Letters are always present. Digits and symbols come and go with the
/// numbers-and-symbols flag: appended in a fixed order, removed by value,
/// never duplicated.
#[derive(Debug, Clone)]
pub struct Charset {
    bytes: Vec<u8>,
}

impl Charset {
    pub fn new(include_num_sym: bool) -> Self {
        let mut set = Self {
            bytes: Vec::with_capacity(
                UPPERCASE.len() + LOWERCASE.len() + DIGITS.len() + SYMBOLS.len(),
            ),
        };
        set.bytes.extend_from_slice(UPPERCASE);
        set.bytes.extend_from_slice(LOWERCASE);
        set.sync(include_num_sym);
        set
    }

    /// Bring the pool in line with the flag. Idempotent: repeated syncs with
    /// the same value never duplicate or drop bytes.
    pub fn sync(&mut self, include_num_sym: bool) {
        if include_num_sym {
            for &b in DIGITS.iter().chain(SYMBOLS) {
                if !self.bytes.contains(&b) {
                    self.bytes.push(b);
                }
            }
        } else {
            self.bytes.retain(|&b| !is_extended(b));
        }
    }

    /// Read-only view for sampling.
    pub fn snapshot(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn is_extended(b: u8) -> bool {
    b.is_ascii_digit() || SYMBOLS.contains(&b)
}
