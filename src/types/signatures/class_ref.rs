use std::{collections::BTreeSet, fmt};

use itertools::Itertools;

use crate::types::{Signature, cursor::ParseCursor, errors::SignatureError};

use super::{TypeSignature, parse_identifier};

/// A reference to a class or interface type, possibly parameterized.
///
/// An inner class of a parameterized class is written `Outer<T>.Inner<U>` and is represented
/// with `Inner` as the [`identifier`](Self::identifier) and `Outer<T>` as the
/// [`outer`](Self::outer) type.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ClassRefTypeSignature {
    /// The enclosing class type, present only for the `Outer.Inner` notation.
    pub outer: Option<Box<ClassRefTypeSignature>>,
    /// The fully-qualified name (e.g., `java.util.Map$Entry`) if [`outer`](Self::outer) is
    /// [`None`], otherwise the simple name of the inner class.
    pub identifier: String,
    /// The type arguments.
    pub type_arguments: Vec<TypeSignature>,
}

impl ClassRefTypeSignature {
    /// Creates a reference to a raw class type from its fully-qualified name.
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self::with_type_arguments(class_name, Vec::new())
    }

    /// Creates a reference to a parameterized class type.
    #[must_use]
    pub fn with_type_arguments(
        class_name: impl Into<String>,
        type_arguments: Vec<TypeSignature>,
    ) -> Self {
        Self {
            outer: None,
            identifier: class_name.into(),
            type_arguments,
        }
    }

    /// Creates a reference to the inner class `identifier` of `self`.
    #[must_use]
    pub fn inner(
        self,
        identifier: impl Into<String>,
        type_arguments: Vec<TypeSignature>,
    ) -> Self {
        Self {
            outer: Some(Box::new(self)),
            identifier: identifier.into(),
            type_arguments,
        }
    }

    /// The fully-qualified name of the class, e.g., `java.util.Map$Entry`.
    #[must_use]
    pub fn class_name(&self) -> String {
        match &self.outer {
            Some(outer) => format!("{}${}", outer.class_name(), self.identifier),
            None => self.identifier.clone(),
        }
    }

    /// Checks if this type or any of its enclosing types has type arguments.
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        !self.type_arguments.is_empty()
            || self.outer.as_ref().is_some_and(|it| it.is_parameterized())
    }

    /// Parses a class type at the cursor.
    ///
    /// Returns `Ok(None)` without consuming anything if the next character is not `L`.
    ///
    /// # Errors
    /// See [`SignatureError`].
    pub fn parse(cursor: &mut ParseCursor<'_>) -> Result<Option<Self>, SignatureError> {
        if !cursor.advance_if('L') {
            return Ok(None);
        }
        let mut segments = vec![parse_identifier(cursor, "a class name")?];
        while cursor.advance_if('/') {
            segments.push(parse_identifier(cursor, "a class name")?);
        }
        let mut class_ref = Self::with_type_arguments(
            segments.join("."),
            Self::parse_type_arguments(cursor)?,
        );
        let mut inner_levels = 0;
        while cursor.advance_if('.') {
            cursor.nest()?;
            inner_levels += 1;
            let identifier = parse_identifier(cursor, "an inner class name")?;
            let type_arguments = Self::parse_type_arguments(cursor)?;
            class_ref = class_ref.inner(identifier, type_arguments);
        }
        cursor.unnest(inner_levels);
        cursor.expect(';')?;
        Ok(Some(class_ref))
    }

    fn parse_type_arguments(
        cursor: &mut ParseCursor<'_>,
    ) -> Result<Vec<TypeSignature>, SignatureError> {
        let mut type_arguments = Vec::new();
        if cursor.advance_if('<') {
            cursor.nest()?;
            if cursor.peek()? == '>' {
                return Err(cursor.malformed("empty type argument list"));
            }
            while !cursor.advance_if('>') {
                type_arguments.push(TypeSignature::parse_type_argument(cursor)?);
                // Surface a truncated list as end of input.
                cursor.peek()?;
            }
            cursor.unnest(1);
        }
        Ok(type_arguments)
    }

    /// Writes the signature without the terminating `;`.
    fn fmt_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outer {
            Some(outer) => {
                outer.fmt_body(f)?;
                write!(f, ".{}", self.identifier)?;
            }
            None => write!(f, "L{}", self.identifier.replace('.', "/"))?,
        }
        if !self.type_arguments.is_empty() {
            write!(f, "<")?;
            for type_argument in &self.type_arguments {
                write!(f, "{type_argument}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

impl fmt::Display for ClassRefTypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_body(f)?;
        write!(f, ";")
    }
}

impl Signature for ClassRefTypeSignature {
    fn collect_class_names(&self, names: &mut BTreeSet<String>) {
        if let Some(outer) = &self.outer {
            outer.collect_class_names(names);
        }
        names.insert(self.class_name());
        for type_argument in &self.type_arguments {
            type_argument.collect_class_names(names);
        }
    }

    fn equals_ignoring_type_params(&self, other: &Self) -> bool {
        self.class_name() == other.class_name()
    }

    fn fmt_java(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(outer) = &self.outer {
            outer.fmt_java(f)?;
            write!(f, ".")?;
        }
        write!(f, "{}", self.identifier)?;
        if !self.type_arguments.is_empty() {
            write!(
                f,
                "<{}>",
                self.type_arguments.iter().map(Signature::java_syntax).join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::types::{
        cursor::MAX_NESTING_DEPTH,
        signatures::{TypeVariableSignature, WildcardTypeSignature},
    };

    fn parse(input: &str) -> Result<Option<ClassRefTypeSignature>, SignatureError> {
        let mut cursor = ParseCursor::new(input);
        let result = ClassRefTypeSignature::parse(&mut cursor)?;
        cursor.finish()?;
        Ok(result)
    }

    #[test]
    fn path_separators_are_normalized() {
        let class_ref = parse("Ljava/lang/String;").unwrap().unwrap();
        assert_eq!(class_ref.identifier, "java.lang.String");
        assert!(class_ref.outer.is_none());
        assert!(!class_ref.is_parameterized());
    }

    #[test]
    fn not_a_class_type() {
        let mut cursor = ParseCursor::new("TT;");
        assert_eq!(ClassRefTypeSignature::parse(&mut cursor), Ok(None));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn default_package() {
        let class_ref = parse("LFoo;").unwrap().unwrap();
        assert_eq!(class_ref.class_name(), "Foo");
    }

    #[test]
    fn dollar_inner_class() {
        let class_ref = parse("Ljava/util/Map$Entry<TK;TV;>;").unwrap().unwrap();
        assert_eq!(class_ref.class_name(), "java.util.Map$Entry");
        assert_eq!(class_ref.type_arguments.len(), 2);
        assert_eq!(
            class_ref.java_syntax().to_string(),
            "java.util.Map$Entry<K, V>"
        );
    }

    #[test]
    fn inner_class_of_parameterized_type() {
        let input = "Lcom/example/Outer<TT;>.Inner<*>;";
        let class_ref = parse(input).unwrap().unwrap();
        let expected = ClassRefTypeSignature::with_type_arguments(
            "com.example.Outer",
            vec![TypeVariableSignature::new("T").into()],
        )
        .inner("Inner", vec![WildcardTypeSignature::Unbounded.into()]);
        assert_eq!(class_ref, expected);
        assert_eq!(class_ref.class_name(), "com.example.Outer$Inner");
        assert!(class_ref.is_parameterized());
        assert_eq!(class_ref.to_string(), input);
        assert_eq!(
            class_ref.java_syntax().to_string(),
            "com.example.Outer<T>.Inner<?>"
        );
        assert_eq!(
            class_ref.referenced_class_names().into_iter().collect::<Vec<_>>(),
            vec!["com.example.Outer", "com.example.Outer$Inner"]
        );
    }

    #[test]
    fn inner_class_ignoring_type_params() {
        let generic = parse("Lcom/example/Outer<TT;>.Inner<TU;>;").unwrap().unwrap();
        let raw = parse("Lcom/example/Outer.Inner;").unwrap().unwrap();
        assert_ne!(generic, raw);
        assert!(generic.equals_ignoring_type_params(&raw));
        let flat = parse("Lcom/example/Outer$Inner;").unwrap().unwrap();
        assert!(generic.equals_ignoring_type_params(&flat));
    }

    #[test]
    fn missing_terminator() {
        assert!(matches!(
            parse("Ljava/lang/String"),
            Err(SignatureError::EndOfInput { .. })
        ));
        assert!(matches!(
            parse("Ljava/lang/String>"),
            Err(SignatureError::Malformed { position: 17, .. })
        ));
    }

    #[test]
    fn empty_segments() {
        for input in ["L;", "L/a;", "La//b;", "La/;", "La.;"] {
            assert!(
                matches!(parse(input), Err(SignatureError::Malformed { .. })),
                "{input} should be malformed"
            );
        }
    }

    #[test]
    fn deeply_nested_type_arguments() {
        let nested = |levels: usize| format!("{}LZ;{}", "La<".repeat(levels), ">;".repeat(levels));
        let shallow = parse(&nested(MAX_NESTING_DEPTH)).unwrap().unwrap();
        assert_eq!(shallow.to_string(), nested(MAX_NESTING_DEPTH));
        assert!(matches!(
            parse(&nested(MAX_NESTING_DEPTH + 1)),
            Err(SignatureError::Malformed { .. })
        ));
        assert!(matches!(
            parse(&nested(12_000)),
            Err(SignatureError::Malformed { .. })
        ));
    }

    #[test]
    fn long_inner_class_chain() {
        let chain = |levels: usize| format!("La{};", ".b".repeat(levels));
        let class_ref = parse(&chain(MAX_NESTING_DEPTH)).unwrap().unwrap();
        assert_eq!(class_ref.to_string(), chain(MAX_NESTING_DEPTH));
        assert!(matches!(
            parse(&chain(30_000)),
            Err(SignatureError::Malformed { .. })
        ));
    }

    #[test]
    fn empty_type_arguments() {
        assert!(matches!(
            parse("Ljava/util/List<>;"),
            Err(SignatureError::Malformed { position: 16, .. })
        ));
    }

    #[test]
    fn from_type_signature() {
        let sig = TypeSignature::from_str("Ljava/util/List<+Ljava/lang/Number;>;").unwrap();
        assert_eq!(
            sig,
            TypeSignature::Class(ClassRefTypeSignature::with_type_arguments(
                "java.util.List",
                vec![TypeSignature::Wildcard(WildcardTypeSignature::Extends(
                    Box::new(ClassRefTypeSignature::new("java.lang.Number").into())
                ))]
            ))
        );
    }
}
