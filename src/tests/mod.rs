use proptest::prelude::*;

use crate::types::{
    base_type::BaseType,
    signatures::{
        ArrayTypeSignature, ClassRefTypeSignature, ClassSignature, MethodSignature, TypeParameter,
        TypeSignature, TypeVariableSignature, WildcardTypeSignature,
    },
};

const MAX_DIMENSIONS: u8 = 3;

pub(crate) fn arb_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z_][a-zA-Z0-9_$]{0,8}").expect("The regex is invalid")
}

pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_identifier(), 1..5).prop_map(|v| v.join("."))
}

pub(crate) fn arb_type_variable() -> impl Strategy<Value = TypeVariableSignature> {
    prop::string::string_regex(r"[A-Z][a-zA-Z0-9]{0,3}")
        .expect("The regex is invalid")
        .prop_map(TypeVariableSignature::new)
}

pub(crate) fn arb_non_void_base_type() -> impl Strategy<Value = BaseType> {
    any::<BaseType>().prop_filter("void is not a value type", |it| *it != BaseType::Void)
}

fn arb_array_of(
    element: impl Strategy<Value = TypeSignature>,
) -> impl Strategy<Value = TypeSignature> {
    (element, 1..=MAX_DIMENSIONS).prop_map(|(element, dimensions)| {
        let array = ArrayTypeSignature::new(element, dimensions)
            .expect("The element type is not an array element type");
        TypeSignature::Array(array)
    })
}

fn arb_type_argument(
    inner: impl Strategy<Value = TypeSignature> + Clone,
) -> impl Strategy<Value = TypeSignature> {
    prop_oneof![
        Just(TypeSignature::Wildcard(WildcardTypeSignature::Unbounded)),
        inner
            .clone()
            .prop_map(|it| TypeSignature::Wildcard(WildcardTypeSignature::Extends(Box::new(it)))),
        inner
            .clone()
            .prop_map(|it| TypeSignature::Wildcard(WildcardTypeSignature::Super(Box::new(it)))),
        inner,
    ]
}

/// Class types, type variables, and arrays, with nested type arguments.
pub(crate) fn arb_reference_type() -> impl Strategy<Value = TypeSignature> {
    let leaf = prop_oneof![
        arb_class_name().prop_map(|it| TypeSignature::Class(ClassRefTypeSignature::new(it))),
        arb_type_variable().prop_map(TypeSignature::TypeVariable),
        arb_array_of(arb_non_void_base_type().prop_map(TypeSignature::Base)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            (
                arb_class_name(),
                prop::collection::vec(arb_type_argument(inner.clone()), 1..4)
            )
                .prop_map(|(name, args)| TypeSignature::Class(
                    ClassRefTypeSignature::with_type_arguments(name, args)
                )),
            (
                arb_class_name(),
                prop::collection::vec(arb_type_argument(inner.clone()), 0..3),
                arb_identifier(),
                prop::collection::vec(arb_type_argument(inner.clone()), 0..3),
            )
                .prop_map(|(name, outer_args, inner_name, inner_args)| {
                    TypeSignature::Class(
                        ClassRefTypeSignature::with_type_arguments(name, outer_args)
                            .inner(inner_name, inner_args),
                    )
                }),
            arb_array_of(inner),
        ]
    })
}

/// Raw and parameterized class types.
pub(crate) fn arb_class_ref() -> impl Strategy<Value = ClassRefTypeSignature> {
    prop_oneof![
        arb_class_name().prop_map(ClassRefTypeSignature::new),
        (
            arb_class_name(),
            prop::collection::vec(arb_type_argument(arb_reference_type().boxed()), 1..3)
        )
            .prop_map(|(name, args)| ClassRefTypeSignature::with_type_arguments(name, args)),
    ]
}

/// Any type that may appear at the top level of a field signature, including `void`.
pub(crate) fn arb_type_signature() -> impl Strategy<Value = TypeSignature> {
    prop_oneof![
        any::<BaseType>().prop_map(TypeSignature::Base),
        arb_reference_type(),
    ]
}

pub(crate) fn arb_type_signature_without_void() -> impl Strategy<Value = TypeSignature> {
    prop_oneof![
        arb_non_void_base_type().prop_map(TypeSignature::Base),
        arb_reference_type(),
    ]
}

pub(crate) fn arb_type_parameter() -> impl Strategy<Value = TypeParameter> {
    prop_oneof![
        (
            arb_type_variable(),
            arb_reference_type(),
            prop::collection::vec(arb_reference_type(), 0..3),
        )
            .prop_map(|(name, class_bound, interface_bounds)| TypeParameter {
                identifier: name.identifier,
                class_bound: Some(class_bound),
                interface_bounds,
            }),
        (
            arb_type_variable(),
            prop::collection::vec(arb_reference_type(), 1..3),
        )
            .prop_map(|(name, interface_bounds)| TypeParameter {
                identifier: name.identifier,
                class_bound: None,
                interface_bounds,
            }),
    ]
}

fn arb_thrown_type() -> impl Strategy<Value = TypeSignature> {
    prop_oneof![
        arb_class_ref().prop_map(TypeSignature::Class),
        arb_type_variable().prop_map(TypeSignature::TypeVariable),
    ]
}

prop_compose! {
    pub(crate) fn arb_method_signature()(
        type_parameters in prop::collection::vec(arb_type_parameter(), 0..3),
        parameter_types in prop::collection::vec(arb_type_signature_without_void(), 0..6),
        return_type in arb_type_signature(),
        throws in prop::collection::vec(arb_thrown_type(), 0..3),
    ) -> MethodSignature {
        MethodSignature {
            type_parameters,
            parameter_types,
            return_type,
            throws,
        }
    }
}

prop_compose! {
    pub(crate) fn arb_class_signature()(
        type_parameters in prop::collection::vec(arb_type_parameter(), 0..3),
        superclass in arb_class_ref(),
        superinterfaces in prop::collection::vec(arb_class_ref(), 0..3),
    ) -> ClassSignature {
        ClassSignature {
            type_parameters,
            superclass,
            superinterfaces,
        }
    }
}
