use thiserror::Error;

/// A cursor operation addressed an offset outside the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("cursor at byte {index} cannot move by {delta} characters in a source of {len} bytes")]
pub struct OutOfRange {
    /// The byte index the cursor was at.
    pub index: usize,
    /// The signed character count the operation tried to move or look.
    pub delta: isize,
    /// The byte length of the source.
    pub len: usize,
}

/// A bidirectional character scanner over an immutable source text.
///
/// The position is a byte index that always lies on a character boundary in `[0, len]`. Operations
/// which would leave that range fail with [`OutOfRange`] instead of clamping.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The byte index position.
    index: usize,
    /// The source str.
    source: &'a str,
    /// Whether [`Cursor::read_until`] drops `//` line comments.
    skip_comments: bool,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`, skipping comments on scans.
    pub const fn new(source: &'a str) -> Self {
        Self {
            index: 0,
            source,
            skip_comments: true,
        }
    }

    /// Sets whether [`Cursor::read_until`] drops `//` line comments.
    #[must_use]
    pub const fn with_comment_skipping(mut self, skip_comments: bool) -> Self {
        self.skip_comments = skip_comments;
        self
    }

    /// Returns the current byte index in the source string.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns whether the cursor reached the end of the source.
    pub const fn is_end(&self) -> bool {
        self.index == self.source.len()
    }

    fn rest(&self) -> &'a str {
        &self.source[self.index..]
    }

    const fn out_of_range(&self, delta: isize) -> OutOfRange {
        OutOfRange {
            index: self.index,
            delta,
            len: self.source.len(),
        }
    }

    /// Returns the character `k` characters away from the cursor without moving. Negative `k` looks back.
    pub fn peek(&self, k: isize) -> Result<char, OutOfRange> {
        let found = if k >= 0 {
            self.rest().chars().nth(k.unsigned_abs())
        } else {
            self.source[..self.index]
                .chars()
                .rev()
                .nth(k.unsigned_abs() - 1)
        };
        found.ok_or_else(|| self.out_of_range(k))
    }

    /// Returns the next character if the cursor is not at the end.
    pub fn peek_next(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character under the cursor and moves past it.
    pub fn read_char(&mut self) -> Result<char, OutOfRange> {
        let c = self.peek(0)?;
        self.index += c.len_utf8();
        Ok(c)
    }

    /// Moves the cursor by `n` characters. Negative `n` walks backward.
    pub fn skip(&mut self, n: isize) -> Result<(), OutOfRange> {
        let target = if n >= 0 {
            let rest = self.rest();
            rest.char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(rest.len()))
                .nth(n.unsigned_abs())
                .map(|i| self.index + i)
        } else {
            self.source[..self.index]
                .char_indices()
                .rev()
                .map(|(i, _)| i)
                .nth(n.unsigned_abs() - 1)
        };
        self.index = target.ok_or_else(|| self.out_of_range(n))?;
        Ok(())
    }

    /// Accumulates characters until the next one is in `stop` or the source ends. The stop character is
    /// not consumed.
    ///
    /// When comment skipping is enabled, a `//` sequence and everything through the next line feed (or the
    /// end) is consumed without being accumulated.
    pub fn read_until(&mut self, stop: &[char]) -> String {
        let mut read = String::new();
        while let Some(c) = self.peek_next() {
            if self.skip_comments && self.rest().starts_with("//") {
                self.index = self
                    .rest()
                    .find('\n')
                    .map_or(self.source.len(), |line_feed| self.index + line_feed + 1);
                continue;
            }
            if stop.contains(&c) {
                break;
            }
            read.push(c);
            self.index += c.len_utf8();
        }
        read
    }
}
