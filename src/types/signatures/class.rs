use std::{collections::BTreeSet, fmt, str::FromStr};

use itertools::Itertools;

use crate::{
    macros::see_jvm_spec,
    types::{Signature, cursor::ParseCursor, errors::SignatureError},
};

use super::{
    ClassRefTypeSignature, TypeParameter, parse_complete,
    type_parameter::{fmt_java_type_parameters, fmt_type_parameters},
    unexpected,
};

/// The generic signature of a class or interface declaration.
#[doc = see_jvm_spec!(4, 7, 9, 1)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ClassSignature {
    /// The formal type parameters.
    pub type_parameters: Vec<TypeParameter>,
    /// The direct superclass.
    pub superclass: ClassRefTypeSignature,
    /// The direct superinterfaces.
    pub superinterfaces: Vec<ClassRefTypeSignature>,
}

impl ClassSignature {
    /// Parses a class signature at the cursor.
    ///
    /// # Errors
    /// See [`SignatureError`].
    pub fn parse(cursor: &mut ParseCursor<'_>) -> Result<Self, SignatureError> {
        let type_parameters = TypeParameter::parse_list(cursor)?;
        let superclass = ClassRefTypeSignature::parse(cursor)?
            .ok_or_else(|| unexpected(cursor, "a superclass type"))?;
        let mut superinterfaces = Vec::new();
        while let Some(superinterface) = Self::parse_superinterface(cursor)? {
            superinterfaces.push(superinterface);
        }
        Ok(Self {
            type_parameters,
            superclass,
            superinterfaces,
        })
    }

    fn parse_superinterface(
        cursor: &mut ParseCursor<'_>,
    ) -> Result<Option<ClassRefTypeSignature>, SignatureError> {
        if cursor.is_exhausted() {
            Ok(None)
        } else {
            ClassRefTypeSignature::parse(cursor)
        }
    }
}

impl FromStr for ClassSignature {
    type Err = SignatureError;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        parse_complete(signature, Self::parse)
    }
}

impl fmt::Display for ClassSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_type_parameters(&self.type_parameters, f)?;
        write!(f, "{}", self.superclass)?;
        for superinterface in &self.superinterfaces {
            write!(f, "{superinterface}")?;
        }
        Ok(())
    }
}

impl Signature for ClassSignature {
    fn collect_class_names(&self, names: &mut BTreeSet<String>) {
        for type_parameter in &self.type_parameters {
            type_parameter.collect_class_names(names);
        }
        self.superclass.collect_class_names(names);
        for superinterface in &self.superinterfaces {
            superinterface.collect_class_names(names);
        }
    }

    fn equals_ignoring_type_params(&self, other: &Self) -> bool {
        self.superclass
            .equals_ignoring_type_params(&other.superclass)
            && self.superinterfaces.len() == other.superinterfaces.len()
            && self
                .superinterfaces
                .iter()
                .zip(&other.superinterfaces)
                .all(|(lhs, rhs)| lhs.equals_ignoring_type_params(rhs))
    }

    fn fmt_java(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_java_type_parameters(&self.type_parameters, f)?;
        if !self.type_parameters.is_empty() {
            write!(f, " ")?;
        }
        write!(f, "extends {}", self.superclass.java_syntax())?;
        if !self.superinterfaces.is_empty() {
            write!(
                f,
                " implements {}",
                self.superinterfaces
                    .iter()
                    .map(Signature::java_syntax)
                    .join(", ")
            )?;
        }
        Ok(())
    }
}
