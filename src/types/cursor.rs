//! A forward-only cursor over signature text.

use std::fmt;

use super::errors::SignatureError;

/// The deepest nesting of type-argument lists and inner-class suffixes a signature may have.
pub const MAX_NESTING_DEPTH: usize = 128;

/// A read position over a descriptor or signature string.
///
/// The cursor only moves forward. Productions that need lookahead call [`ParseCursor::peek`]
/// before committing with [`ParseCursor::advance`].
///
/// The cursor also tracks how deeply the productions have nested, so that hostile input fails
/// with [`SignatureError::Malformed`] instead of exhausting the stack.
#[derive(Debug, Clone)]
pub struct ParseCursor<'s> {
    input: &'s str,
    position: usize,
    depth: usize,
}

impl<'s> ParseCursor<'s> {
    /// Creates a cursor positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'s str) -> Self {
        Self {
            input,
            position: 0,
            depth: 0,
        }
    }

    /// The byte offset of the next unconsumed character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Checks whether all the input has been consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.position >= self.input.len()
    }

    /// The unconsumed part of the input.
    #[must_use]
    pub fn remaining(&self) -> &'s str {
        &self.input[self.position..]
    }

    /// Returns the next character without consuming it.
    ///
    /// # Errors
    /// [`SignatureError::EndOfInput`] if the input is exhausted.
    pub fn peek(&self) -> Result<char, SignatureError> {
        self.remaining()
            .chars()
            .next()
            .ok_or_else(|| self.end_of_input())
    }

    /// Consumes and returns the next character.
    ///
    /// # Errors
    /// [`SignatureError::EndOfInput`] if the input is exhausted.
    pub fn advance(&mut self) -> Result<char, SignatureError> {
        let next = self.peek()?;
        self.position += next.len_utf8();
        Ok(next)
    }

    /// Consumes the next character, which must be `expected`.
    ///
    /// # Errors
    /// - [`SignatureError::EndOfInput`] if the input is exhausted.
    /// - [`SignatureError::Malformed`] if the next character is not `expected`.
    pub fn expect(&mut self, expected: char) -> Result<(), SignatureError> {
        match self.peek()? {
            c if c == expected => {
                self.position += c.len_utf8();
                Ok(())
            }
            c => Err(self.malformed(format!("expected {expected:?} but found {c:?}"))),
        }
    }

    /// Consumes `expected` if it is the next character.
    pub(crate) fn advance_if(&mut self, expected: char) -> bool {
        if self.remaining().starts_with(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes the longest prefix whose characters satisfy `predicate`.
    pub fn take_while<P>(&mut self, mut predicate: P) -> &'s str
    where
        P: FnMut(char) -> bool,
    {
        let rest = self.remaining();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(rest.len(), |(idx, _)| idx);
        self.position += len;
        &rest[..len]
    }

    /// Enters one more level of nesting.
    ///
    /// # Errors
    /// [`SignatureError::Malformed`] if the nesting exceeds [`MAX_NESTING_DEPTH`].
    pub(crate) fn nest(&mut self) -> Result<(), SignatureError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.malformed(format!(
                "nesting exceeds the limit of {MAX_NESTING_DEPTH} levels"
            )));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves `levels` levels of nesting entered with [`ParseCursor::nest`].
    pub(crate) fn unnest(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    pub(crate) fn end_of_input(&self) -> SignatureError {
        SignatureError::EndOfInput {
            position: self.input.len(),
        }
    }

    pub(crate) fn malformed(&self, message: impl fmt::Display) -> SignatureError {
        SignatureError::Malformed {
            position: self.position,
            message: message.to_string(),
        }
    }

    /// Fails with [`SignatureError::TrailingInput`] unless the input is exhausted.
    pub(crate) fn finish(&self) -> Result<(), SignatureError> {
        if self.is_exhausted() {
            Ok(())
        } else {
            Err(SignatureError::TrailingInput {
                position: self.position,
                remaining: self.remaining().to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let cursor = ParseCursor::new("IJ");
        assert_eq!(cursor.peek(), Ok('I'));
        assert_eq!(cursor.peek(), Ok('I'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn advance_consumes() {
        let mut cursor = ParseCursor::new("IJ");
        assert_eq!(cursor.advance(), Ok('I'));
        assert_eq!(cursor.advance(), Ok('J'));
        assert!(cursor.is_exhausted());
        assert_eq!(
            cursor.advance(),
            Err(SignatureError::EndOfInput { position: 2 })
        );
    }

    #[test]
    fn peek_on_empty_input() {
        let cursor = ParseCursor::new("");
        assert_eq!(cursor.peek(), Err(SignatureError::EndOfInput { position: 0 }));
    }

    #[test]
    fn expect_mismatch() {
        let mut cursor = ParseCursor::new("<");
        let err = cursor.expect(';').unwrap_err();
        assert!(matches!(err, SignatureError::Malformed { position: 0, .. }));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn take_while_stops_at_delimiter() {
        let mut cursor = ParseCursor::new("java/lang/String;");
        assert_eq!(cursor.take_while(|c| c != ';'), "java/lang/String");
        assert_eq!(cursor.remaining(), ";");
    }

    #[test]
    fn take_while_multibyte() {
        let mut cursor = ParseCursor::new("Ünïcode;");
        assert_eq!(cursor.take_while(|c| c != ';'), "Ünïcode");
        assert_eq!(cursor.advance(), Ok(';'));
        assert!(cursor.finish().is_ok());
    }

    #[test]
    fn nesting_limit() {
        let mut cursor = ParseCursor::new("<");
        for _ in 0..MAX_NESTING_DEPTH {
            cursor.nest().unwrap();
        }
        assert!(matches!(
            cursor.nest(),
            Err(SignatureError::Malformed { position: 0, .. })
        ));
        cursor.unnest(1);
        assert!(cursor.nest().is_ok());
    }

    #[test]
    fn finish_reports_trailing_input() {
        let mut cursor = ParseCursor::new("IJ");
        cursor.advance().unwrap();
        assert_eq!(
            cursor.finish(),
            Err(SignatureError::TrailingInput {
                position: 1,
                remaining: "J".to_owned()
            })
        );
    }
}
