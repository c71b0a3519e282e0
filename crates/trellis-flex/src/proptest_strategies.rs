//! Proptest strategies for controller property tests
//!
//! Generators only produce values the engine can represent exactly, so a
//! style pushed to a node reads back unchanged.

use crate::style::*;
use proptest::prelude::*;

pub fn arb_overflow() -> impl Strategy<Value = Overflow> {
    prop_oneof![
        Just(Overflow::Visible),
        Just(Overflow::Hidden),
        Just(Overflow::Scroll),
    ]
}

pub fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Inherit),
        Just(Direction::Ltr),
        Just(Direction::Rtl),
    ]
}

pub fn arb_flex_direction() -> impl Strategy<Value = FlexDirection> {
    prop_oneof![
        Just(FlexDirection::Column),
        Just(FlexDirection::ColumnReverse),
        Just(FlexDirection::Row),
        Just(FlexDirection::RowReverse),
    ]
}

pub fn arb_wrap() -> impl Strategy<Value = Wrap> {
    prop_oneof![Just(Wrap::NoWrap), Just(Wrap::Wrap), Just(Wrap::WrapReverse)]
}

pub fn arb_justify() -> impl Strategy<Value = Justify> {
    prop_oneof![
        Just(Justify::FlexStart),
        Just(Justify::Center),
        Just(Justify::FlexEnd),
        Just(Justify::SpaceBetween),
        Just(Justify::SpaceAround),
        Just(Justify::SpaceEvenly),
    ]
}

/// Values valid for align-items
pub fn arb_align_items() -> impl Strategy<Value = Align> {
    prop_oneof![
        Just(Align::Auto),
        Just(Align::FlexStart),
        Just(Align::Center),
        Just(Align::FlexEnd),
        Just(Align::Stretch),
        Just(Align::Baseline),
    ]
}

/// Values valid for align-content
pub fn arb_align_content() -> impl Strategy<Value = Align> {
    prop_oneof![
        Just(Align::Auto),
        Just(Align::FlexStart),
        Just(Align::Center),
        Just(Align::FlexEnd),
        Just(Align::Stretch),
        Just(Align::SpaceBetween),
        Just(Align::SpaceAround),
        Just(Align::SpaceEvenly),
    ]
}

/// Small whole-number padding, no NaN
pub fn arb_edges() -> impl Strategy<Value = Edges> {
    (0u8..16, 0u8..16, 0u8..16, 0u8..16).prop_map(|(t, b, l, r)| Edges {
        top: t as f32,
        bottom: b as f32,
        left: l as f32,
        right: r as f32,
    })
}

pub fn arb_gap() -> impl Strategy<Value = Gap> {
    (0u8..8, 0u8..8).prop_map(|(x, y)| Gap::new(x as f32, y as f32))
}

pub fn arb_flex_style() -> impl Strategy<Value = FlexStyle> {
    (
        (arb_overflow(), arb_direction(), arb_flex_direction(), arb_wrap()),
        (arb_justify(), arb_align_items(), arb_align_content()),
        (arb_edges(), arb_gap()),
    )
        .prop_map(
            |(
                (overflow, direction, flex_direction, flex_wrap),
                (justify_content, align_items, align_content),
                (padding, gap),
            )| FlexStyle {
                overflow,
                direction,
                flex_direction,
                flex_wrap,
                justify_content,
                align_items,
                align_content,
                padding,
                gap,
            },
        )
}

/// One step of a property-write sequence
#[derive(Debug, Clone)]
pub enum StyleWrite {
    Overflow(Overflow),
    Direction(Direction),
    FlexDirection(FlexDirection),
    Wrap(Wrap),
    Justify(Justify),
    AlignItems(Align),
    AlignContent(Align),
    Padding(Edges),
    Gap(Gap),
}

pub fn arb_style_write() -> impl Strategy<Value = StyleWrite> {
    prop_oneof![
        arb_overflow().prop_map(StyleWrite::Overflow),
        arb_direction().prop_map(StyleWrite::Direction),
        arb_flex_direction().prop_map(StyleWrite::FlexDirection),
        arb_wrap().prop_map(StyleWrite::Wrap),
        arb_justify().prop_map(StyleWrite::Justify),
        arb_align_items().prop_map(StyleWrite::AlignItems),
        arb_align_content().prop_map(StyleWrite::AlignContent),
        arb_edges().prop_map(StyleWrite::Padding),
        arb_gap().prop_map(StyleWrite::Gap),
    ]
}

/// Child sequence shape: `true` for items carrying a flex modifier
pub fn arb_decorations() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(prop::bool::weighted(0.7), 0..12)
}
