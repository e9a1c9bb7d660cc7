//! Base types: the primitive types and `void`.

use std::{collections::BTreeSet, fmt, str::FromStr};

use crate::macros::see_jvm_spec;

use super::{Signature, cursor::ParseCursor, errors::SignatureError, errors::UnknownBaseType};

/// A primitive type in Java, or `void`.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum BaseType {
    /// The `byte` type.
    #[display("B")]
    Byte,
    /// The `char` type.
    #[display("C")]
    Char,
    /// The `double` type.
    #[display("D")]
    Double,
    /// The `float` type.
    #[display("F")]
    Float,
    /// The `int` type.
    #[display("I")]
    Int,
    /// The `long` type.
    #[display("J")]
    Long,
    /// The `short` type.
    #[display("S")]
    Short,
    /// The `boolean` type.
    #[display("Z")]
    Boolean,
    /// The `void` pseudo-type, only valid as a method return type.
    #[display("V")]
    Void,
}

impl BaseType {
    /// All the base types, in descriptor tag order.
    pub const ALL: [BaseType; 9] = [
        Self::Byte,
        Self::Char,
        Self::Double,
        Self::Float,
        Self::Int,
        Self::Long,
        Self::Short,
        Self::Boolean,
        Self::Void,
    ];

    /// The Java keyword of the type, such as `"int"` or `"void"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Boolean => "boolean",
            Self::Void => "void",
        }
    }

    /// The single-character descriptor tag of the type.
    #[must_use]
    pub const fn descriptor_char(self) -> char {
        match self {
            Self::Byte => 'B',
            Self::Char => 'C',
            Self::Double => 'D',
            Self::Float => 'F',
            Self::Int => 'I',
            Self::Long => 'J',
            Self::Short => 'S',
            Self::Boolean => 'Z',
            Self::Void => 'V',
        }
    }

    /// Parses a base type at the cursor.
    ///
    /// Returns `Ok(None)` without consuming anything if the next character is not a base type tag,
    /// so that the caller can try another production.
    ///
    /// # Errors
    /// [`SignatureError::EndOfInput`] if the input is exhausted.
    pub fn parse(cursor: &mut ParseCursor<'_>) -> Result<Option<Self>, SignatureError> {
        match Self::try_from(cursor.peek()?) {
            Ok(base_type) => {
                cursor.advance()?;
                Ok(Some(base_type))
            }
            Err(_) => Ok(None),
        }
    }
}

impl TryFrom<char> for BaseType {
    type Error = char;

    fn try_from(descriptor: char) -> Result<Self, Self::Error> {
        match descriptor {
            'B' => Ok(Self::Byte),
            'C' => Ok(Self::Char),
            'D' => Ok(Self::Double),
            'F' => Ok(Self::Float),
            'I' => Ok(Self::Int),
            'J' => Ok(Self::Long),
            'S' => Ok(Self::Short),
            'Z' => Ok(Self::Boolean),
            'V' => Ok(Self::Void),
            other => Err(other),
        }
    }
}

impl FromStr for BaseType {
    type Err = UnknownBaseType;

    /// Converts a Java keyword such as `"int"` into a [`BaseType`].
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|it| it.name() == name)
            .ok_or_else(|| UnknownBaseType(name.to_owned()))
    }
}

impl Signature for BaseType {
    fn collect_class_names(&self, _names: &mut BTreeSet<String>) {}

    fn equals_ignoring_type_params(&self, other: &Self) -> bool {
        self == other
    }

    fn fmt_java(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
