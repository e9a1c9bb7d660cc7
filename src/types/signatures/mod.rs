//! Generic type signatures in the JVM.
//!
//! A [`TypeSignature`] covers both plain field descriptors (e.g., `[Ljava/lang/String;`) and
//! generic signatures with type arguments, type variables, and wildcards.
//!
//! See the [JVM Specification §4.7.9.1](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-4.html#jvms-4.7.9.1) for more information.

use std::{collections::BTreeSet, fmt, str::FromStr};

use super::{
    Signature, base_type::BaseType, cursor::ParseCursor, errors::SignatureError,
};

mod array;
mod class;
mod class_ref;
mod method;
mod type_parameter;
mod type_variable;
mod wildcard;

pub use array::ArrayTypeSignature;
pub use class::ClassSignature;
pub use class_ref::ClassRefTypeSignature;
pub use method::MethodSignature;
pub use type_parameter::TypeParameter;
pub use type_variable::TypeVariableSignature;
pub use wildcard::WildcardTypeSignature;

/// The signature of a type.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, derive_more::From)]
pub enum TypeSignature {
    /// A primitive type or `void`.
    Base(BaseType),
    /// A class or interface type, possibly with type arguments.
    Class(ClassRefTypeSignature),
    /// An array type.
    Array(ArrayTypeSignature),
    /// A type variable, e.g., `T`.
    TypeVariable(TypeVariableSignature),
    /// A wildcard type argument, e.g., `? extends T`.
    Wildcard(WildcardTypeSignature),
}

impl TypeSignature {
    /// Parses a type at the cursor, trying a base type, a class type, an array type, and a type
    /// variable in that order.
    ///
    /// # Errors
    /// See [`SignatureError`].
    pub fn parse(cursor: &mut ParseCursor<'_>) -> Result<Self, SignatureError> {
        if let Some(base_type) = BaseType::parse(cursor)? {
            return Ok(Self::Base(base_type));
        }
        Self::parse_reference(cursor)
    }

    /// Parses a reference type (class, array, or type variable) at the cursor.
    ///
    /// # Errors
    /// See [`SignatureError`].
    pub fn parse_reference(cursor: &mut ParseCursor<'_>) -> Result<Self, SignatureError> {
        if let Some(class_ref) = ClassRefTypeSignature::parse(cursor)? {
            Ok(Self::Class(class_ref))
        } else if let Some(array) = ArrayTypeSignature::parse(cursor)? {
            Ok(Self::Array(array))
        } else if let Some(type_variable) = TypeVariableSignature::parse(cursor)? {
            Ok(Self::TypeVariable(type_variable))
        } else {
            Err(unexpected(cursor, "a reference type"))
        }
    }

    /// Parses a class type or a type variable, the types allowed in a `throws` clause.
    pub(crate) fn parse_class_or_type_variable(
        cursor: &mut ParseCursor<'_>,
    ) -> Result<Self, SignatureError> {
        if let Some(class_ref) = ClassRefTypeSignature::parse(cursor)? {
            Ok(Self::Class(class_ref))
        } else if let Some(type_variable) = TypeVariableSignature::parse(cursor)? {
            Ok(Self::TypeVariable(type_variable))
        } else {
            Err(unexpected(cursor, "a class type or a type variable"))
        }
    }

    /// Parses a type argument of a parameterized class type.
    pub(crate) fn parse_type_argument(
        cursor: &mut ParseCursor<'_>,
    ) -> Result<Self, SignatureError> {
        match WildcardTypeSignature::parse(cursor)? {
            Some(wildcard) => Ok(Self::Wildcard(wildcard)),
            None => Self::parse_reference(cursor),
        }
    }

    /// Checks if this is a primitive type or `void`.
    #[must_use]
    pub const fn is_base_type(&self) -> bool {
        matches!(self, Self::Base(_))
    }

    /// Checks if this is the `void` pseudo-type.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Base(BaseType::Void))
    }
}

impl FromStr for TypeSignature {
    type Err = SignatureError;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        parse_complete(signature, Self::parse)
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(it) => it.fmt(f),
            Self::Class(it) => it.fmt(f),
            Self::Array(it) => it.fmt(f),
            Self::TypeVariable(it) => it.fmt(f),
            Self::Wildcard(it) => it.fmt(f),
        }
    }
}

impl Signature for TypeSignature {
    fn collect_class_names(&self, names: &mut BTreeSet<String>) {
        match self {
            Self::Base(it) => it.collect_class_names(names),
            Self::Class(it) => it.collect_class_names(names),
            Self::Array(it) => it.collect_class_names(names),
            Self::TypeVariable(it) => it.collect_class_names(names),
            Self::Wildcard(it) => it.collect_class_names(names),
        }
    }

    fn equals_ignoring_type_params(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Base(lhs), Self::Base(rhs)) => lhs.equals_ignoring_type_params(rhs),
            (Self::Class(lhs), Self::Class(rhs)) => lhs.equals_ignoring_type_params(rhs),
            (Self::Array(lhs), Self::Array(rhs)) => lhs.equals_ignoring_type_params(rhs),
            (Self::TypeVariable(lhs), Self::TypeVariable(rhs)) => {
                lhs.equals_ignoring_type_params(rhs)
            }
            (Self::Wildcard(lhs), Self::Wildcard(rhs)) => lhs.equals_ignoring_type_params(rhs),
            _ => false,
        }
    }

    fn fmt_java(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(it) => it.fmt_java(f),
            Self::Class(it) => it.fmt_java(f),
            Self::Array(it) => it.fmt_java(f),
            Self::TypeVariable(it) => it.fmt_java(f),
            Self::Wildcard(it) => it.fmt_java(f),
        }
    }
}

/// Runs `production` over the whole of `input`, which must be non-empty and fully consumed.
pub(crate) fn parse_complete<T, F>(input: &str, production: F) -> Result<T, SignatureError>
where
    F: FnOnce(&mut ParseCursor<'_>) -> Result<T, SignatureError>,
{
    let result = if input.is_empty() {
        Err(SignatureError::Malformed {
            position: 0,
            message: "empty signature".to_owned(),
        })
    } else {
        let mut cursor = ParseCursor::new(input);
        production(&mut cursor).and_then(|parsed| cursor.finish().map(|()| parsed))
    };
    if let Err(error) = &result {
        tracing::debug!(signature = input, %error, "Failed to parse signature");
    }
    result
}

/// Parses an identifier, i.e., an unqualified name as defined in JVMS §4.2.2.
pub(crate) fn parse_identifier<'s>(
    cursor: &mut ParseCursor<'s>,
    what: &str,
) -> Result<&'s str, SignatureError> {
    let identifier =
        cursor.take_while(|c| !matches!(c, '.' | ';' | '[' | '/' | '<' | '>' | ':'));
    if identifier.is_empty() {
        Err(unexpected(cursor, what))
    } else {
        Ok(identifier)
    }
}

/// Reports the character at the cursor as not matching any production.
pub(crate) fn unexpected(cursor: &ParseCursor<'_>, expected: &str) -> SignatureError {
    match cursor.peek() {
        Ok(c) => cursor.malformed(format!("expected {expected} but found {c:?}")),
        Err(end_of_input) => end_of_input,
    }
}
