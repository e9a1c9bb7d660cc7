use std::{collections::BTreeSet, fmt};

use crate::types::{Signature, cursor::ParseCursor, errors::SignatureError};

use super::parse_identifier;

/// A reference to a type variable declared by an enclosing generic class or method.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct TypeVariableSignature {
    /// The name of the type variable.
    pub identifier: String,
}

impl TypeVariableSignature {
    /// Creates a reference to the type variable `identifier`.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// Parses a type variable at the cursor.
    ///
    /// Returns `Ok(None)` without consuming anything if the next character is not `T`.
    ///
    /// # Errors
    /// See [`SignatureError`].
    pub fn parse(cursor: &mut ParseCursor<'_>) -> Result<Option<Self>, SignatureError> {
        if !cursor.advance_if('T') {
            return Ok(None);
        }
        let identifier = parse_identifier(cursor, "a type variable name")?;
        cursor.expect(';')?;
        Ok(Some(Self::new(identifier)))
    }
}

impl fmt::Display for TypeVariableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{};", self.identifier)
    }
}

impl Signature for TypeVariableSignature {
    fn collect_class_names(&self, _names: &mut BTreeSet<String>) {}

    fn equals_ignoring_type_params(&self, other: &Self) -> bool {
        self == other
    }

    fn fmt_java(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}
