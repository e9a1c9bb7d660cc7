//! Resolving signatures into runtime types.
//!
//! Resolution is lazy and delegated: the caller supplies a [`ClassResolver`] that maps a
//! fully-qualified class name to a handle of a loaded class, and [`TypeSignature::instantiate`](crate::types::signatures::TypeSignature::instantiate)
//! turns a signature into a [`RuntimeType`] over those handles.

use std::ops::Deref;

use crate::types::{
    base_type::BaseType,
    signatures::{ClassSignature, MethodSignature, TypeParameter},
};

mod instantiate;
pub mod registry;

pub use registry::{ClassRegistry, NopResolver};

/// The name of the class that unbounded type variables and wildcards erase to.
pub const OBJECT_CLASS_NAME: &str = "java.lang.Object";

/// An error that can occur while resolving a signature.
#[derive(thiserror::Error, Debug)]
pub enum ResolutionError {
    /// The class could not be found.
    #[error("Class not found: {0}")]
    ClassNotFound(String),
    /// The type variable is not declared in the scope, or its bounds form a cycle.
    #[error("Unresolvable type variable: {0}")]
    UnresolvableTypeVariable(String),
    /// Other error occurred.
    #[error("Cause: {0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// A service that resolves classes by their fully-qualified names.
pub trait ClassResolver {
    /// The handle of a resolved class.
    type Class;

    /// Resolves a class by its fully-qualified name, e.g., `java.util.Map$Entry`.
    ///
    /// # Errors
    /// See [`ResolutionError`].
    fn resolve_class(&self, class_name: &str) -> Result<Self::Class, ResolutionError>;
}

impl<T> ClassResolver for T
where
    T: Deref,
    <T as Deref>::Target: ClassResolver,
{
    type Class = <<T as Deref>::Target as ClassResolver>::Class;

    fn resolve_class(&self, class_name: &str) -> Result<Self::Class, ResolutionError> {
        self.deref().resolve_class(class_name)
    }
}

/// A resolver that tries a list of resolvers in order.
#[derive(Debug)]
pub struct ResolverChain<R> {
    resolvers: Vec<R>,
}

impl<R> ResolverChain<R> {
    /// Creates a chain of the given resolvers.
    #[must_use]
    pub fn new(resolvers: impl Into<Vec<R>>) -> Self {
        Self {
            resolvers: resolvers.into(),
        }
    }
}

impl<R: ClassResolver> ClassResolver for ResolverChain<R> {
    type Class = R::Class;

    fn resolve_class(&self, class_name: &str) -> Result<Self::Class, ResolutionError> {
        for resolver in &self.resolvers {
            match resolver.resolve_class(class_name) {
                Ok(class) => return Ok(class),
                Err(ResolutionError::ClassNotFound(_)) => {}
                Err(err) => return Err(err),
            }
        }
        tracing::debug!(class_name, "Class not found in any resolver");
        Err(ResolutionError::ClassNotFound(class_name.to_owned()))
    }
}

/// A type resolved against a [`ClassResolver`].
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum RuntimeType<C> {
    /// A primitive type or `void`.
    Primitive(BaseType),
    /// A class or interface.
    Class(C),
    /// An array type. The element type is never an array.
    Array {
        /// The element type.
        element: Box<RuntimeType<C>>,
        /// The number of dimensions.
        dimensions: u8,
    },
}

impl<C> RuntimeType<C> {
    /// Creates an array of `element`, flattening nested arrays.
    ///
    /// # Errors
    /// [`ResolutionError::Other`] if the total number of dimensions exceeds 255.
    pub fn array_of(element: Self, dimensions: u8) -> Result<Self, ResolutionError> {
        let (element, dimensions) = match element {
            Self::Array {
                element,
                dimensions: inner,
            } => (
                element,
                inner.checked_add(dimensions).ok_or_else(|| {
                    ResolutionError::Other("an array can have at most 255 dimensions".into())
                })?,
            ),
            element => (Box::new(element), dimensions),
        };
        Ok(Self::Array {
            element,
            dimensions,
        })
    }
}

/// The type parameters visible at a point of use, innermost declaration first.
///
/// A method's type parameters shadow those of its declaring class.
#[derive(Debug, Clone, Default)]
pub struct TypeScope<'a> {
    declarations: Vec<&'a [TypeParameter]>,
}

impl<'a> TypeScope<'a> {
    /// A scope without any type parameter.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// A scope with the type parameters of a single declaration.
    #[must_use]
    pub fn new(type_parameters: &'a [TypeParameter]) -> Self {
        Self {
            declarations: vec![type_parameters],
        }
    }

    /// Adds the type parameters of an enclosing declaration, which are looked up after those
    /// already in the scope.
    #[must_use]
    pub fn enclosed_by(mut self, type_parameters: &'a [TypeParameter]) -> Self {
        self.declarations.push(type_parameters);
        self
    }

    /// Finds the innermost type parameter named `identifier`.
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<&'a TypeParameter> {
        self.declarations
            .iter()
            .flat_map(|it| it.iter())
            .find(|it| it.identifier == identifier)
    }
}

impl<'a> From<&'a MethodSignature> for TypeScope<'a> {
    fn from(method: &'a MethodSignature) -> Self {
        Self::new(&method.type_parameters)
    }
}

impl<'a> From<&'a ClassSignature> for TypeScope<'a> {
    fn from(class: &'a ClassSignature) -> Self {
        Self::new(&class.type_parameters)
    }
}
