use std::{collections::BTreeSet, fmt};

use crate::types::{
    Signature,
    base_type::BaseType,
    cursor::ParseCursor,
    errors::{InvalidArrayType, SignatureError},
};

use super::{ClassRefTypeSignature, TypeSignature, TypeVariableSignature, unexpected};

/// An array type with one or more dimensions.
///
/// Nested arrays are flattened, so the element type is never an array itself.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ArrayTypeSignature {
    element: Box<TypeSignature>,
    dimensions: u8,
}

impl ArrayTypeSignature {
    /// Creates an array of `element` with the given number of dimensions.
    /// If `element` is an array, its dimensions are added to `dimensions`.
    ///
    /// # Errors
    /// [`InvalidArrayType`] if `dimensions` is zero, the total number of dimensions exceeds 255,
    /// or `element` is `void` or a wildcard.
    pub fn new(element: TypeSignature, dimensions: u8) -> Result<Self, InvalidArrayType> {
        if dimensions == 0 {
            return Err(InvalidArrayType("an array must have at least one dimension"));
        }
        match element {
            TypeSignature::Array(inner) => {
                let dimensions = inner
                    .dimensions
                    .checked_add(dimensions)
                    .ok_or(InvalidArrayType("an array can have at most 255 dimensions"))?;
                Ok(Self {
                    element: inner.element,
                    dimensions,
                })
            }
            TypeSignature::Base(BaseType::Void) => {
                Err(InvalidArrayType("the element type cannot be void"))
            }
            TypeSignature::Wildcard(_) => {
                Err(InvalidArrayType("the element type cannot be a wildcard"))
            }
            element => Ok(Self {
                element: Box::new(element),
                dimensions,
            }),
        }
    }

    /// The element type.
    #[must_use]
    pub fn element(&self) -> &TypeSignature {
        &self.element
    }

    /// The number of dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> u8 {
        self.dimensions
    }

    /// Parses an array type at the cursor, folding consecutive `[` into one dimension count.
    ///
    /// Returns `Ok(None)` without consuming anything if the next character is not `[`.
    ///
    /// # Errors
    /// See [`SignatureError`].
    pub fn parse(cursor: &mut ParseCursor<'_>) -> Result<Option<Self>, SignatureError> {
        let start = cursor.position();
        let brackets = cursor.take_while(|c| c == '[');
        if brackets.is_empty() {
            return Ok(None);
        }
        let dimensions = u8::try_from(brackets.len()).map_err(|_| SignatureError::Malformed {
            position: start,
            message: "an array can have at most 255 dimensions".to_owned(),
        })?;
        let element = if cursor.peek()? == 'V' {
            return Err(cursor.malformed("the element type cannot be void"));
        } else if let Some(base_type) = BaseType::parse(cursor)? {
            TypeSignature::Base(base_type)
        } else if let Some(class_ref) = ClassRefTypeSignature::parse(cursor)? {
            TypeSignature::Class(class_ref)
        } else if let Some(type_variable) = TypeVariableSignature::parse(cursor)? {
            TypeSignature::TypeVariable(type_variable)
        } else {
            return Err(unexpected(cursor, "an array element type"));
        };
        Ok(Some(Self {
            element: Box::new(element),
            dimensions,
        }))
    }
}

impl fmt::Display for ArrayTypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.dimensions {
            write!(f, "[")?;
        }
        self.element.fmt(f)
    }
}

impl Signature for ArrayTypeSignature {
    fn collect_class_names(&self, names: &mut BTreeSet<String>) {
        self.element.collect_class_names(names);
    }

    fn equals_ignoring_type_params(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions
            && self.element.equals_ignoring_type_params(&other.element)
    }

    fn fmt_java(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.element.fmt_java(f)?;
        for _ in 0..self.dimensions {
            write!(f, "[]")?;
        }
        Ok(())
    }
}
