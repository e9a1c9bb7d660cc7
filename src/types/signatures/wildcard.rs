use std::{collections::BTreeSet, fmt};

use crate::types::{Signature, cursor::ParseCursor, errors::SignatureError};

use super::TypeSignature;

/// A wildcard type argument.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum WildcardTypeSignature {
    /// `?`, written `*`.
    Unbounded,
    /// `? extends T`, written `+T`.
    Extends(Box<TypeSignature>),
    /// `? super T`, written `-T`.
    Super(Box<TypeSignature>),
}

impl WildcardTypeSignature {
    /// The bound of the wildcard, if any.
    #[must_use]
    pub fn bound(&self) -> Option<&TypeSignature> {
        match self {
            Self::Unbounded => None,
            Self::Extends(bound) | Self::Super(bound) => Some(bound),
        }
    }

    /// Parses a wildcard at the cursor.
    ///
    /// Returns `Ok(None)` without consuming anything if the next character is not one of `*`,
    /// `+`, or `-`.
    ///
    /// # Errors
    /// See [`SignatureError`].
    pub fn parse(cursor: &mut ParseCursor<'_>) -> Result<Option<Self>, SignatureError> {
        let wildcard = match cursor.peek()? {
            '*' => {
                cursor.advance()?;
                Self::Unbounded
            }
            '+' => {
                cursor.advance()?;
                Self::Extends(Box::new(TypeSignature::parse_reference(cursor)?))
            }
            '-' => {
                cursor.advance()?;
                Self::Super(Box::new(TypeSignature::parse_reference(cursor)?))
            }
            _ => return Ok(None),
        };
        Ok(Some(wildcard))
    }
}

impl fmt::Display for WildcardTypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "*"),
            Self::Extends(bound) => write!(f, "+{bound}"),
            Self::Super(bound) => write!(f, "-{bound}"),
        }
    }
}

impl Signature for WildcardTypeSignature {
    fn collect_class_names(&self, names: &mut BTreeSet<String>) {
        if let Some(bound) = self.bound() {
            bound.collect_class_names(names);
        }
    }

    fn equals_ignoring_type_params(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unbounded, Self::Unbounded) => true,
            (Self::Extends(lhs), Self::Extends(rhs)) | (Self::Super(lhs), Self::Super(rhs)) => {
                lhs.equals_ignoring_type_params(rhs)
            }
            _ => false,
        }
    }

    fn fmt_java(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "?"),
            Self::Extends(bound) => write!(f, "? extends {}", bound.java_syntax()),
            Self::Super(bound) => write!(f, "? super {}", bound.java_syntax()),
        }
    }
}
