/// Commands submitted during this run, with a recall cursor.
///
/// The cursor lives in `[0, len]`; `len` means nothing is being recalled and
/// the input holds fresh text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the trimmed line and parks the cursor past the end.
    /// Blank lines are dropped.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
    }

    /// Steps back one entry. Returns `None` at the oldest entry (no wraparound).
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Steps forward one entry. Past the newest entry the cursor resets and
    /// the empty string is returned so the caller clears the input.
    pub fn recall_next(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            &self.entries[self.cursor]
        } else {
            self.cursor = self.entries.len();
            ""
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
