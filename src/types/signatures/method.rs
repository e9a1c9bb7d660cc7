use std::{collections::BTreeSet, fmt, str::FromStr};

use itertools::Itertools;

use crate::{
    macros::see_jvm_spec,
    types::{Signature, base_type::BaseType, cursor::ParseCursor, errors::SignatureError},
};

use super::{
    TypeParameter, TypeSignature, parse_complete,
    type_parameter::{fmt_java_type_parameters, fmt_type_parameters},
};

/// The generic signature, or the plain descriptor, of a method.
/// Consists of the type parameters, the parameter types, the return type, and the thrown types.
#[doc = see_jvm_spec!(4, 7, 9, 1)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct MethodSignature {
    /// The formal type parameters.
    pub type_parameters: Vec<TypeParameter>,
    /// The types of the parameters.
    pub parameter_types: Vec<TypeSignature>,
    /// The return type, which may be `void`.
    pub return_type: TypeSignature,
    /// The declared thrown types, each a class type or a type variable.
    pub throws: Vec<TypeSignature>,
}

impl MethodSignature {
    /// Creates a signature without type parameters or thrown types.
    #[must_use]
    pub fn new(parameter_types: Vec<TypeSignature>, return_type: TypeSignature) -> Self {
        Self {
            type_parameters: Vec::new(),
            parameter_types,
            return_type,
            throws: Vec::new(),
        }
    }

    /// Parses a method signature at the cursor.
    ///
    /// # Errors
    /// See [`SignatureError`].
    pub fn parse(cursor: &mut ParseCursor<'_>) -> Result<Self, SignatureError> {
        let type_parameters = TypeParameter::parse_list(cursor)?;
        cursor.expect('(')?;
        let mut parameter_types = Vec::new();
        while cursor.peek()? != ')' {
            if cursor.peek()? == BaseType::Void.descriptor_char() {
                return Err(cursor.malformed("a parameter cannot be void"));
            }
            parameter_types.push(TypeSignature::parse(cursor)?);
        }
        cursor.expect(')')?;
        let return_type = TypeSignature::parse(cursor)?;
        let mut throws = Vec::new();
        while cursor.advance_if('^') {
            throws.push(TypeSignature::parse_class_or_type_variable(cursor)?);
        }
        Ok(Self {
            type_parameters,
            parameter_types,
            return_type,
            throws,
        })
    }

    /// Checks if the signature mentions any type parameter, type argument, or type variable,
    /// i.e., it cannot be written as a plain method descriptor.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        fn is_generic_type(sig: &TypeSignature) -> bool {
            match sig {
                TypeSignature::Base(_) => false,
                TypeSignature::Class(class_ref) => class_ref.is_parameterized(),
                TypeSignature::Array(array) => is_generic_type(array.element()),
                TypeSignature::TypeVariable(_) | TypeSignature::Wildcard(_) => true,
            }
        }
        !self.type_parameters.is_empty()
            || self
                .parameter_types
                .iter()
                .chain(std::iter::once(&self.return_type))
                .chain(&self.throws)
                .any(is_generic_type)
    }
}

impl FromStr for MethodSignature {
    type Err = SignatureError;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        parse_complete(signature, Self::parse)
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_type_parameters(&self.type_parameters, f)?;
        write!(f, "(")?;
        for param in &self.parameter_types {
            write!(f, "{param}")?;
        }
        write!(f, "){}", self.return_type)?;
        for thrown in &self.throws {
            write!(f, "^{thrown}")?;
        }
        Ok(())
    }
}

impl Signature for MethodSignature {
    fn collect_class_names(&self, names: &mut BTreeSet<String>) {
        for type_parameter in &self.type_parameters {
            type_parameter.collect_class_names(names);
        }
        for sig in self
            .parameter_types
            .iter()
            .chain(std::iter::once(&self.return_type))
            .chain(&self.throws)
        {
            sig.collect_class_names(names);
        }
    }

    fn equals_ignoring_type_params(&self, other: &Self) -> bool {
        fn all_equal(lhs: &[TypeSignature], rhs: &[TypeSignature]) -> bool {
            lhs.len() == rhs.len()
                && lhs
                    .iter()
                    .zip(rhs)
                    .all(|(l, r)| l.equals_ignoring_type_params(r))
        }
        all_equal(&self.parameter_types, &other.parameter_types)
            && self
                .return_type
                .equals_ignoring_type_params(&other.return_type)
            && all_equal(&self.throws, &other.throws)
    }

    fn fmt_java(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.type_parameters.is_empty() {
            fmt_java_type_parameters(&self.type_parameters, f)?;
            write!(f, " ")?;
        }
        write!(
            f,
            "{} ({})",
            self.return_type.java_syntax(),
            self.parameter_types
                .iter()
                .map(Signature::java_syntax)
                .join(", ")
        )?;
        if !self.throws.is_empty() {
            write!(
                f,
                " throws {}",
                self.throws.iter().map(Signature::java_syntax).join(", ")
            )?;
        }
        Ok(())
    }
}
