//! Password generation settings.

/// Length bounds, current length, and the numbers-and-symbols flag.
///
/// Every mutation leaves `min_length <= password_length <= max_length`
/// intact, so readers never see an out-of-range length.
#[derive(Debug, Clone)]
pub struct Settings {
    password_length: usize,
    include_num_sym: bool,
    min_length: usize,
    max_length: usize,
}

impl Settings {
    pub fn new(
        min_length: usize,
        max_length: usize,
        password_length: usize,
        include_num_sym: bool,
    ) -> Self {
        debug_assert!(min_length < max_length);
        let mut settings = Self {
            password_length: min_length,
            include_num_sym,
            min_length,
            max_length,
        };
        settings.password_length = settings.clamp(password_length);
        settings
    }

    pub fn length(&self) -> usize {
        self.password_length
    }

    pub fn include_num_sym(&self) -> bool {
        self.include_num_sym
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Set the length from an already-numeric source (stepper, CLI flag).
    /// Returns the clamped value that was stored.
    pub fn set_length(&mut self, value: usize) -> usize {
        self.password_length = self.clamp(value);
        self.password_length
    }

    /// Keystroke-time validation. The stored length is always fully clamped,
    /// but the returned display text only corrects the upper bound, so a
    /// value still being typed is not rewritten under the user. An empty
    /// field stays empty on screen; other unparseable input falls back to
    /// the minimum.
    pub fn set_length_live(&mut self, raw: &str) -> String {
        let raw = raw.trim();
        match parse_length(raw) {
            Some(value) => {
                self.password_length = self.clamp(value);
                if value > self.max_length {
                    self.max_length.to_string()
                } else {
                    value.to_string()
                }
            }
            None => {
                self.password_length = self.min_length;
                if raw.is_empty() {
                    String::new()
                } else {
                    self.min_length.to_string()
                }
            }
        }
    }

    /// Focus-loss validation: clamp both bounds, store, and return the value
    /// the input field must now display.
    pub fn set_length_commit(&mut self, raw: &str) -> usize {
        let value = parse_length(raw.trim()).unwrap_or(self.min_length);
        self.password_length = self.clamp(value);
        self.password_length
    }

    pub fn increment(&mut self) {
        if self.password_length < self.max_length {
            self.password_length += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.password_length > self.min_length {
            self.password_length -= 1;
        }
    }

    pub fn set_include_num_sym(&mut self, flag: bool) {
        self.include_num_sym = flag;
    }

    fn clamp(&self, value: usize) -> usize {
        value.clamp(self.min_length, self.max_length)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(4, 52, 12, true)
    }
}

/// Parse a user-typed length. Values too large for usize still count as
/// numeric (and clamp to the maximum later) instead of failing like junk.
fn parse_length(raw: &str) -> Option<usize> {
    match raw.parse::<usize>() {
        Ok(value) => Some(value),
        Err(e) if matches!(e.kind(), std::num::IntErrorKind::PosOverflow) => Some(usize::MAX),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_satisfy_bounds() {
        let settings = Settings::default();
        assert_eq!(settings.length(), 12);
        assert_eq!(settings.min_length(), 4);
        assert_eq!(settings.max_length(), 52);
        assert!(settings.include_num_sym());
    }

    #[test]
    fn constructor_clamps_initial_length() {
        assert_eq!(Settings::new(4, 52, 99, true).length(), 52);
        assert_eq!(Settings::new(4, 52, 1, true).length(), 4);
    }

    #[test]
    fn live_unparseable_falls_back_to_min() {
        let mut settings = Settings::default();
        assert_eq!(settings.set_length_live("abc"), "4");
        assert_eq!(settings.length(), 4);
    }

    #[test]
    fn live_empty_field_stays_empty_on_screen() {
        let mut settings = Settings::default();
        assert_eq!(settings.set_length_live(""), "");
        assert_eq!(settings.length(), 4);
    }

    #[test]
    fn live_clamps_upper_bound_only_in_display() {
        let mut settings = Settings::default();
        assert_eq!(settings.set_length_live("999"), "52");
        assert_eq!(settings.length(), 52);

        // Below-minimum input is stored clamped but displayed as typed.
        assert_eq!(settings.set_length_live("2"), "2");
        assert_eq!(settings.length(), 4);
    }

    #[test]
    fn overflowing_input_clamps_to_max_not_min() {
        let mut settings = Settings::default();
        assert_eq!(settings.set_length_live("99999999999999999999999999"), "52");
        assert_eq!(settings.length(), 52);
        assert_eq!(settings.set_length_commit("99999999999999999999999999"), 52);
    }

    #[test]
    fn commit_clamps_both_bounds() {
        let mut settings = Settings::default();
        assert_eq!(settings.set_length_commit("2"), 4);
        assert_eq!(settings.set_length_commit("999"), 52);
        assert_eq!(settings.set_length_commit(""), 4);
        assert_eq!(settings.set_length_commit("17"), 17);
        assert_eq!(settings.length(), 17);
    }

    #[test]
    fn stepper_saturates_at_bounds() {
        let mut settings = Settings::default();
        settings.set_length(52);
        settings.increment();
        assert_eq!(settings.length(), 52);

        settings.set_length(4);
        settings.decrement();
        assert_eq!(settings.length(), 4);

        settings.increment();
        assert_eq!(settings.length(), 5);
        settings.decrement();
        assert_eq!(settings.length(), 4);
    }
}
