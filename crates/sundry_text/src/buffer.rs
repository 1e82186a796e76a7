//! In-place trimming for growable character buffers.
//!
//! [`CharBuffer`] covers `String` and `Vec<char>`. Every operation mutates
//! the buffer it is called on and only ever removes trailing content.

/// A growable character buffer that can be trimmed from the end.
///
/// # Examples
///
/// ```
/// use sundry_text::CharBuffer;
///
/// let mut line = String::from("total;;;");
/// line.trim_end_char(Some(';'));
/// assert_eq!(line, "total");
///
/// let mut chars: Vec<char> = "ok \t\n".chars().collect();
/// chars.trim_end_whitespace();
/// assert_eq!(chars, vec!['o', 'k']);
/// ```
pub trait CharBuffer {
    /// Borrowed, read-only view of the buffer's contents.
    type View<'a>
    where
        Self: 'a;

    /// Removes all trailing whitespace.
    fn trim_end_whitespace(&mut self) -> &mut Self;

    /// Removes every trailing occurrence of `ch`.
    ///
    /// `None` trims whitespace instead.
    fn trim_end_char(&mut self, ch: Option<char>) -> &mut Self;

    /// Repeatedly removes `pattern` from the end of the buffer.
    ///
    /// Returns `true` if anything was removed. An empty pattern is a no-op,
    /// and a pattern made only of whitespace trims all trailing whitespace.
    fn trim_end_str(&mut self, pattern: &str) -> bool;

    /// Returns the contents without copying.
    fn as_char_view(&self) -> Self::View<'_>;
}

impl CharBuffer for String {
    type View<'a> = &'a str;

    fn trim_end_whitespace(&mut self) -> &mut Self {
        let kept = self.trim_end().len();
        self.truncate(kept);
        self
    }

    fn trim_end_char(&mut self, ch: Option<char>) -> &mut Self {
        match ch {
            None => self.trim_end_whitespace(),
            Some(ch) => {
                let kept = self.trim_end_matches(ch).len();
                self.truncate(kept);
                self
            }
        }
    }

    fn trim_end_str(&mut self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return false;
        }
        let before = self.len();
        if pattern.trim().is_empty() {
            self.trim_end_whitespace();
        } else {
            let kept = self.trim_end_matches(pattern).len();
            self.truncate(kept);
        }
        self.len() != before
    }

    fn as_char_view(&self) -> &str {
        self.as_str()
    }
}

impl CharBuffer for Vec<char> {
    type View<'a> = &'a [char];

    fn trim_end_whitespace(&mut self) -> &mut Self {
        while self.last().is_some_and(|c| c.is_whitespace()) {
            self.pop();
        }
        self
    }

    fn trim_end_char(&mut self, ch: Option<char>) -> &mut Self {
        match ch {
            None => self.trim_end_whitespace(),
            Some(ch) => {
                while self.last() == Some(&ch) {
                    self.pop();
                }
                self
            }
        }
    }

    fn trim_end_str(&mut self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return false;
        }
        let before = self.len();
        if pattern.trim().is_empty() {
            self.trim_end_whitespace();
        } else {
            let suffix: Vec<char> = pattern.chars().collect();
            while self.ends_with(&suffix) {
                self.truncate(self.len() - suffix.len());
            }
        }
        self.len() != before
    }

    fn as_char_view(&self) -> &[char] {
        self.as_slice()
    }
}
