//! Proptest strategies for payload and tag trees.
//!
//! Floats are drawn from finite ranges so that `PartialEq` comparisons of
//! decoded trees are meaningful (NaN never equals itself).

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use smade_tag::{Payload, Tag, TagKind, TagList, TagRoot, TagStruct};

fn finite_f32() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6f32
}

fn finite_f64() -> impl Strategy<Value = f64> {
    -1.0e12f64..1.0e12f64
}

/// ASCII names, including the empty name.
pub fn arb_name() -> impl Strategy<Value = String> {
    "[ -~]{0,12}"
}

/// Any non-container, non-empty payload.
pub fn arb_scalar() -> BoxedStrategy<Payload> {
    let numbers = prop_oneof![
        any::<i8>().prop_map(Payload::Byte),
        any::<i16>().prop_map(Payload::Short),
        any::<i32>().prop_map(Payload::Int),
        any::<i64>().prop_map(Payload::Long),
        finite_f32().prop_map(Payload::Float),
        finite_f64().prop_map(Payload::Double),
        any::<u8>().prop_map(Payload::Registration),
    ];
    let shaped = prop_oneof![
        vec(any::<u8>(), 0..32).prop_map(Payload::ByteArray),
        "[ -~]{0,24}".prop_map(Payload::String),
        [finite_f32(), finite_f32(), finite_f32()].prop_map(Payload::FloatVec3),
        any::<[i32; 3]>().prop_map(Payload::IntVec3),
        any::<[i8; 3]>().prop_map(Payload::ByteVec3),
        [finite_f32(), finite_f32(), finite_f32(), finite_f32()].prop_map(Payload::FloatVec4),
    ];
    prop_oneof![numbers, shaped].boxed()
}

/// Homogeneous list built from candidates: the first candidate fixes the
/// element kind and the rest are kept only if they match it.
fn homogeneous(fallback: TagKind, candidates: Vec<Payload>) -> TagList {
    let kind = candidates.first().map(Payload::kind).unwrap_or(fallback);
    TagList::from_payloads(kind, candidates.into_iter().filter(|p| p.kind() == kind))
        .expect("filtered to one kind")
}

/// Any non-empty payload, recursively nesting lists and structs.
pub fn arb_payload() -> BoxedStrategy<Payload> {
    arb_scalar()
        .prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                vec(inner.clone(), 0..5)
                    .prop_map(|items| Payload::List(homogeneous(TagKind::Int, items))),
                vec((option::of(arb_name()), inner), 0..5).prop_map(|members| {
                    Payload::Struct(
                        members
                            .into_iter()
                            .map(|(name, payload)| Tag { name, payload })
                            .collect(),
                    )
                }),
            ]
        })
        .boxed()
}

/// Any non-sentinel tag.
pub fn arb_tag() -> impl Strategy<Value = Tag> {
    (option::of(arb_name()), arb_payload()).prop_map(|(name, payload)| Tag { name, payload })
}

/// Any struct of non-sentinel tags.
pub fn arb_struct() -> impl Strategy<Value = TagStruct> {
    vec(arb_tag(), 0..6).prop_map(TagStruct::from)
}

/// Any encodable tag root.
pub fn arb_root() -> impl Strategy<Value = TagRoot> {
    (any::<u16>(), arb_tag()).prop_map(|(version, root)| TagRoot {
        version: if version == TagRoot::COMPRESSED_VERSION {
            TagRoot::PLAIN_VERSION
        } else {
            version
        },
        root,
    })
}
