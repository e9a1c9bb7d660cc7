use crate::types::{
    base_type::BaseType,
    signatures::{
        ArrayTypeSignature, ClassRefTypeSignature, TypeSignature, TypeVariableSignature,
        WildcardTypeSignature,
    },
};

use super::{ClassResolver, OBJECT_CLASS_NAME, ResolutionError, RuntimeType, TypeScope};

impl BaseType {
    /// Converts the base type into a [`RuntimeType`]. Base types need no resolution.
    #[must_use]
    pub fn instantiate<C>(self) -> RuntimeType<C> {
        RuntimeType::Primitive(self)
    }
}

impl TypeSignature {
    /// Resolves the type with `resolver`, looking up type variables in `scope`.
    ///
    /// Type variables and wildcards are erased to their leftmost bound.
    ///
    /// # Errors
    /// See [`ResolutionError`].
    pub fn instantiate<R>(
        &self,
        resolver: &R,
        scope: &TypeScope<'_>,
    ) -> Result<RuntimeType<R::Class>, ResolutionError>
    where
        R: ClassResolver + ?Sized,
    {
        self.instantiate_with(resolver, scope, &mut Vec::new())
    }

    /// `resolving` holds the type variables whose bounds are being resolved, outermost first.
    fn instantiate_with<R>(
        &self,
        resolver: &R,
        scope: &TypeScope<'_>,
        resolving: &mut Vec<String>,
    ) -> Result<RuntimeType<R::Class>, ResolutionError>
    where
        R: ClassResolver + ?Sized,
    {
        match self {
            Self::Base(it) => Ok(it.instantiate()),
            Self::Class(it) => it.instantiate(resolver),
            Self::Array(it) => it.instantiate_with(resolver, scope, resolving),
            Self::TypeVariable(it) => it.instantiate_with(resolver, scope, resolving),
            Self::Wildcard(it) => it.instantiate_with(resolver, scope, resolving),
        }
    }
}

impl ClassRefTypeSignature {
    /// Resolves the referenced class. Type arguments are ignored.
    ///
    /// # Errors
    /// See [`ResolutionError`].
    pub fn instantiate<R>(&self, resolver: &R) -> Result<RuntimeType<R::Class>, ResolutionError>
    where
        R: ClassResolver + ?Sized,
    {
        let class_name = self.class_name();
        tracing::trace!(%class_name, "Resolving class");
        resolver.resolve_class(&class_name).map(RuntimeType::Class)
    }
}

impl ArrayTypeSignature {
    /// Resolves the element type and wraps it into an array type.
    ///
    /// # Errors
    /// See [`ResolutionError`].
    pub fn instantiate<R>(
        &self,
        resolver: &R,
        scope: &TypeScope<'_>,
    ) -> Result<RuntimeType<R::Class>, ResolutionError>
    where
        R: ClassResolver + ?Sized,
    {
        self.instantiate_with(resolver, scope, &mut Vec::new())
    }

    fn instantiate_with<R>(
        &self,
        resolver: &R,
        scope: &TypeScope<'_>,
        resolving: &mut Vec<String>,
    ) -> Result<RuntimeType<R::Class>, ResolutionError>
    where
        R: ClassResolver + ?Sized,
    {
        let element = self
            .element()
            .instantiate_with(resolver, scope, resolving)?;
        RuntimeType::array_of(element, self.dimensions())
    }
}

impl TypeVariableSignature {
    /// Resolves the type variable to the erasure of its declaration in `scope`.
    ///
    /// # Errors
    /// - [`ResolutionError::UnresolvableTypeVariable`] if the variable is not declared in `scope`
    ///   or its bounds refer back to itself, directly or through arrays.
    /// - Otherwise, see [`ResolutionError`].
    pub fn instantiate<R>(
        &self,
        resolver: &R,
        scope: &TypeScope<'_>,
    ) -> Result<RuntimeType<R::Class>, ResolutionError>
    where
        R: ClassResolver + ?Sized,
    {
        self.instantiate_with(resolver, scope, &mut Vec::new())
    }

    fn instantiate_with<R>(
        &self,
        resolver: &R,
        scope: &TypeScope<'_>,
        resolving: &mut Vec<String>,
    ) -> Result<RuntimeType<R::Class>, ResolutionError>
    where
        R: ClassResolver + ?Sized,
    {
        if resolving.contains(&self.identifier) {
            tracing::debug!(
                type_variable = %self.identifier,
                "Cyclic bounds of type variable"
            );
            return Err(ResolutionError::UnresolvableTypeVariable(
                self.identifier.clone(),
            ));
        }
        let type_parameter = scope.lookup(&self.identifier).ok_or_else(|| {
            ResolutionError::UnresolvableTypeVariable(self.identifier.clone())
        })?;
        resolving.push(self.identifier.clone());
        let erasure = match type_parameter.first_bound() {
            Some(bound) => bound.instantiate_with(resolver, scope, resolving),
            None => resolver
                .resolve_class(OBJECT_CLASS_NAME)
                .map(RuntimeType::Class),
        };
        resolving.pop();
        erasure
    }
}

impl WildcardTypeSignature {
    /// Resolves the wildcard to its upper bound, which is `java.lang.Object` unless declared
    /// with `extends`.
    ///
    /// # Errors
    /// See [`ResolutionError`].
    pub fn instantiate<R>(
        &self,
        resolver: &R,
        scope: &TypeScope<'_>,
    ) -> Result<RuntimeType<R::Class>, ResolutionError>
    where
        R: ClassResolver + ?Sized,
    {
        self.instantiate_with(resolver, scope, &mut Vec::new())
    }

    fn instantiate_with<R>(
        &self,
        resolver: &R,
        scope: &TypeScope<'_>,
        resolving: &mut Vec<String>,
    ) -> Result<RuntimeType<R::Class>, ResolutionError>
    where
        R: ClassResolver + ?Sized,
    {
        match self {
            Self::Extends(bound) => bound.instantiate_with(resolver, scope, resolving),
            Self::Unbounded | Self::Super(_) => resolver
                .resolve_class(OBJECT_CLASS_NAME)
                .map(RuntimeType::Class),
        }
    }
}
