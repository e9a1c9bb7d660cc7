use std::{collections::BTreeSet, fmt};

use itertools::Itertools;

use crate::types::{Signature, cursor::ParseCursor, errors::SignatureError};

use super::{ClassRefTypeSignature, TypeSignature, parse_identifier, unexpected};

/// A formal type parameter of a generic class or method, e.g., `T extends Comparable<T>`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct TypeParameter {
    /// The name of the type parameter.
    pub identifier: String,
    /// The class bound, absent when only interface bounds are declared.
    pub class_bound: Option<TypeSignature>,
    /// The interface bounds.
    pub interface_bounds: Vec<TypeSignature>,
}

impl TypeParameter {
    /// Creates a type parameter with `java.lang.Object` as its class bound.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            class_bound: Some(ClassRefTypeSignature::new("java.lang.Object").into()),
            interface_bounds: Vec::new(),
        }
    }

    /// The leftmost bound, which is the erasure of the type parameter.
    #[must_use]
    pub fn first_bound(&self) -> Option<&TypeSignature> {
        self.class_bound
            .as_ref()
            .or_else(|| self.interface_bounds.first())
    }

    /// All the bounds, the class bound first.
    pub fn bounds(&self) -> impl Iterator<Item = &TypeSignature> {
        self.class_bound.iter().chain(&self.interface_bounds)
    }

    /// Parses a type parameter at the cursor.
    ///
    /// # Errors
    /// See [`SignatureError`].
    pub fn parse(cursor: &mut ParseCursor<'_>) -> Result<Self, SignatureError> {
        let identifier = parse_identifier(cursor, "a type parameter name")?.to_owned();
        cursor.expect(':')?;
        let class_bound = match cursor.peek()? {
            'L' | 'T' | '[' => {
                // The class bound may be absent and followed by the next parameter's name.
                let mut lookahead = cursor.clone();
                match TypeSignature::parse_reference(&mut lookahead) {
                    Ok(class_bound) => {
                        *cursor = lookahead;
                        Some(class_bound)
                    }
                    Err(_) => None,
                }
            }
            _ => None,
        };
        let mut interface_bounds = Vec::new();
        while cursor.advance_if(':') {
            interface_bounds.push(TypeSignature::parse_reference(cursor)?);
        }
        Ok(Self {
            identifier,
            class_bound,
            interface_bounds,
        })
    }

    /// Parses an optional list of type parameters enclosed in `<` and `>`.
    pub(crate) fn parse_list(cursor: &mut ParseCursor<'_>) -> Result<Vec<Self>, SignatureError> {
        let mut type_parameters = Vec::new();
        if cursor.advance_if('<') {
            if cursor.peek()? == '>' {
                return Err(unexpected(cursor, "a type parameter"));
            }
            while !cursor.advance_if('>') {
                type_parameters.push(Self::parse(cursor)?);
                cursor.peek()?;
            }
        }
        Ok(type_parameters)
    }
}

/// Writes a list of type parameters in the JVM encoding.
pub(crate) fn fmt_type_parameters(
    type_parameters: &[TypeParameter],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if !type_parameters.is_empty() {
        write!(f, "<")?;
        for type_parameter in type_parameters {
            write!(f, "{type_parameter}")?;
        }
        write!(f, ">")?;
    }
    Ok(())
}

/// Writes a list of type parameters in Java source notation.
pub(crate) fn fmt_java_type_parameters(
    type_parameters: &[TypeParameter],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if !type_parameters.is_empty() {
        write!(
            f,
            "<{}>",
            type_parameters.iter().map(Signature::java_syntax).join(", ")
        )?;
    }
    Ok(())
}

impl fmt::Display for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.identifier)?;
        if let Some(class_bound) = &self.class_bound {
            write!(f, "{class_bound}")?;
        }
        for interface_bound in &self.interface_bounds {
            write!(f, ":{interface_bound}")?;
        }
        Ok(())
    }
}

impl Signature for TypeParameter {
    fn collect_class_names(&self, names: &mut BTreeSet<String>) {
        for bound in self.bounds() {
            bound.collect_class_names(names);
        }
    }

    fn equals_ignoring_type_params(&self, other: &Self) -> bool {
        let class_bounds_match = match (&self.class_bound, &other.class_bound) {
            (Some(lhs), Some(rhs)) => lhs.equals_ignoring_type_params(rhs),
            (None, None) => true,
            _ => false,
        };
        self.identifier == other.identifier
            && class_bounds_match
            && self.interface_bounds.len() == other.interface_bounds.len()
            && self
                .interface_bounds
                .iter()
                .zip(&other.interface_bounds)
                .all(|(lhs, rhs)| lhs.equals_ignoring_type_params(rhs))
    }

    fn fmt_java(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        let mut bounds = self.bounds().peekable();
        if bounds.peek().is_some() {
            write!(
                f,
                " extends {}",
                bounds.map(Signature::java_syntax).join(" & ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::signatures::TypeVariableSignature;

    #[test]
    fn class_bound_only() {
        let mut cursor = ParseCursor::new("T:Ljava/lang/Object;");
        let type_parameter = TypeParameter::parse(&mut cursor).unwrap();
        assert_eq!(type_parameter, TypeParameter::new("T"));
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn interface_bounds_only() {
        let input = "T::Ljava/lang/Comparable<-TT;>;:Ljava/io/Serializable;";
        let mut cursor = ParseCursor::new(input);
        let type_parameter = TypeParameter::parse(&mut cursor).unwrap();
        assert!(type_parameter.class_bound.is_none());
        assert_eq!(type_parameter.interface_bounds.len(), 2);
        assert_eq!(
            type_parameter.first_bound(),
            type_parameter.interface_bounds.first()
        );
        assert_eq!(type_parameter.to_string(), input);
        assert_eq!(
            type_parameter.java_syntax().to_string(),
            "T extends java.lang.Comparable<? super T> & java.io.Serializable"
        );
        assert_eq!(
            type_parameter
                .referenced_class_names()
                .into_iter()
                .collect::<Vec<_>>(),
            vec!["java.io.Serializable", "java.lang.Comparable"]
        );
    }

    #[test]
    fn type_variable_bound() {
        let mut cursor = ParseCursor::new("U:TT;");
        let type_parameter = TypeParameter::parse(&mut cursor).unwrap();
        assert_eq!(
            type_parameter.first_bound(),
            Some(&TypeSignature::from(TypeVariableSignature::new("T")))
        );
    }

    #[test]
    fn no_bounds() {
        let mut cursor = ParseCursor::new("T:>");
        let type_parameter = TypeParameter::parse(&mut cursor).unwrap();
        assert_eq!(type_parameter.first_bound(), None);
        assert_eq!(type_parameter.java_syntax().to_string(), "T");
        assert_eq!(cursor.remaining(), ">");
    }

    #[test]
    fn absent_class_bound_before_next_parameter() {
        let mut cursor = ParseCursor::new("<K:V::Ljava/lang/Runnable;>");
        let type_parameters = TypeParameter::parse_list(&mut cursor).unwrap();
        assert_eq!(type_parameters.len(), 2);
        assert_eq!(type_parameters[0].first_bound(), None);
        assert_eq!(type_parameters[1].identifier, "V");
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn absent_class_bound_before_parameter_named_like_a_type() {
        for input in ["<K:T:Ljava/lang/Object;>", "<K:Lock::Ljava/lang/Runnable;>"] {
            let mut cursor = ParseCursor::new(input);
            let type_parameters = TypeParameter::parse_list(&mut cursor).unwrap();
            assert_eq!(type_parameters.len(), 2, "{input}");
            assert_eq!(type_parameters[0].first_bound(), None);
            assert!(type_parameters[1].first_bound().is_some());
            assert!(cursor.is_exhausted());
        }
    }

    #[test]
    fn class_bound_is_not_an_interface_bound() {
        let class_bound = TypeParameter::parse(&mut ParseCursor::new("T:Ljava/lang/Runnable;")).unwrap();
        let interface_bound =
            TypeParameter::parse(&mut ParseCursor::new("T::Ljava/lang/Runnable;")).unwrap();
        assert_ne!(class_bound, interface_bound);
        assert!(!class_bound.equals_ignoring_type_params(&interface_bound));
        assert!(!interface_bound.equals_ignoring_type_params(&class_bound));
    }

    #[test]
    fn missing_colon() {
        let mut cursor = ParseCursor::new("TLjava/lang/Object;");
        assert!(matches!(
            TypeParameter::parse(&mut cursor),
            Err(SignatureError::Malformed { .. })
        ));
    }

    #[test]
    fn empty_list() {
        let mut cursor = ParseCursor::new("<>");
        assert!(matches!(
            TypeParameter::parse_list(&mut cursor),
            Err(SignatureError::Malformed { position: 1, .. })
        ));
    }

    #[test]
    fn absent_list() {
        let mut cursor = ParseCursor::new("(I)V");
        assert_eq!(TypeParameter::parse_list(&mut cursor), Ok(Vec::new()));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn bounds_ignoring_type_params() {
        let mut cursor = ParseCursor::new("T:Ljava/util/List<TU;>;");
        let generic = TypeParameter::parse(&mut cursor).unwrap();
        let raw = TypeParameter {
            identifier: "T".to_owned(),
            class_bound: Some(ClassRefTypeSignature::new("java.util.List").into()),
            interface_bounds: Vec::new(),
        };
        assert_ne!(generic, raw);
        assert!(generic.equals_ignoring_type_params(&raw));
    }
}
