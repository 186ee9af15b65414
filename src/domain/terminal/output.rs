/// One rendered block in the overlay log. Embedded newlines are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub is_error: bool,
}

impl OutputLine {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Append-only log behind the overlay. Lines are never edited, only dropped
/// all at once by `clear`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSink {
    lines: Vec<OutputLine>,
}

impl OutputSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: impl Into<String>, is_error: bool) {
        self.lines.push(if is_error {
            OutputLine::error(text)
        } else {
            OutputLine::normal(text)
        });
    }

    pub fn print(&mut self, text: impl Into<String>) {
        self.write(text, false);
    }

    pub fn print_error(&mut self, text: impl Into<String>) {
        self.write(text, true);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
