//! Module containing the APIs for the JVM type system.
use std::{borrow::Cow, collections::BTreeSet, fmt, str::FromStr};

pub mod base_type;
pub mod cursor;
pub mod errors;
pub mod signatures;

pub use errors::SignatureError;

/// Common behaviour of descriptors and signatures.
///
/// The [`Display`](fmt::Display) implementation renders the JVM encoding, so parsing the rendered
/// text yields an equal value.
pub trait Signature: fmt::Display {
    /// Adds the fully-qualified names of all classes mentioned by `self` into `names`.
    fn collect_class_names(&self, names: &mut BTreeSet<String>);

    /// Checks equality while ignoring the type arguments of class references,
    /// e.g., `java.util.List<java.lang.String>` equals the raw `java.util.List`.
    fn equals_ignoring_type_params(&self, other: &Self) -> bool;

    /// Formats `self` in Java source notation.
    ///
    /// # Errors
    /// Returns an error if the formatter does.
    fn fmt_java(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Returns the fully-qualified names of all classes mentioned by `self`.
    fn referenced_class_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_class_names(&mut names);
        names
    }

    /// Returns a value that displays `self` in Java source notation.
    fn java_syntax(&self) -> JavaSyntax<'_, Self> {
        JavaSyntax(self)
    }
}

/// Displays a [`Signature`] in Java source notation, e.g., `java.util.Map<K, ? extends V>`.
#[derive(Debug, Clone, Copy)]
pub struct JavaSyntax<'a, S: ?Sized>(&'a S);

impl<S: Signature + ?Sized> fmt::Display for JavaSyntax<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_java(f)
    }
}

/// Parses a signature from modified UTF-8 bytes, the encoding used in the constant pool of a
/// class file.
///
/// # Errors
/// - [`SignatureError::InvalidEncoding`] if the bytes are not valid modified UTF-8.
/// - Otherwise, see the [`FromStr`] implementation of `S`.
pub fn parse_modified_utf8<S>(bytes: &[u8]) -> Result<S, SignatureError>
where
    S: FromStr<Err = SignatureError>,
{
    let text: Cow<'_, str> =
        cesu8::from_java_cesu8(bytes).map_err(|_| SignatureError::InvalidEncoding)?;
    text.parse()
}
