//! Flexbox style values and their mapping onto the layout engine
//!
//! The enums here follow the flexbox vocabulary used by scene authors. The
//! engine does not accept every combination (for example `align-items:
//! space-between`); such values are passed through as the engine default
//! rather than rejected.

use serde::{Deserialize, Serialize};
use taffy::style::{
    AlignContent, AlignItems, Dimension, FlexDirection as EngineFlexDirection, FlexWrap,
    JustifyContent, LengthPercentage, LengthPercentageAuto, Overflow as EngineOverflow, Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

/// Inline direction of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    Column,
    ColumnReverse,
    #[default]
    Row,
    RowReverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Wrap {
    NoWrap,
    #[default]
    Wrap,
    WrapReverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Cross-axis alignment, shared by align-items, align-content and align-self
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    #[default]
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
    Baseline,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Whether a node takes part in the solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    #[default]
    Flex,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionType {
    #[default]
    Relative,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Gap axis: `Row` is the gap between rows, `Column` between columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gutter {
    Row,
    Column,
}

/// A length that may be automatic, absolute or relative to the parent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexValue {
    #[default]
    Auto,
    Points(f32),
    Percent(f32),
}

/// Four-edge padding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Edges {
    pub const ZERO: Edges = Edges {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    pub fn get(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }
}

/// Gap vector: `x` spaces columns, `y` spaces rows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Gap {
    pub x: f32,
    pub y: f32,
}

impl Gap {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn get(&self, gutter: Gutter) -> f32 {
        match gutter {
            Gutter::Row => self.y,
            Gutter::Column => self.x,
        }
    }
}

/// Container style cached by a controller and mirrored onto its active node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexStyle {
    pub overflow: Overflow,
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub flex_wrap: Wrap,
    pub justify_content: Justify,
    pub align_items: Align,
    pub align_content: Align,
    pub padding: Edges,
    pub gap: Gap,
}

impl Default for FlexStyle {
    fn default() -> Self {
        Self {
            overflow: Overflow::Visible,
            direction: Direction::Inherit,
            flex_direction: FlexDirection::Row,
            flex_wrap: Wrap::Wrap,
            justify_content: Justify::FlexStart,
            align_items: Align::FlexStart,
            align_content: Align::Auto,
            padding: Edges::ZERO,
            gap: Gap::default(),
        }
    }
}

// Engine conversions. The reverse direction exists so node state can be read
// back as a `FlexStyle`.

impl From<Overflow> for EngineOverflow {
    fn from(value: Overflow) -> Self {
        match value {
            Overflow::Visible => EngineOverflow::Visible,
            Overflow::Hidden => EngineOverflow::Hidden,
            Overflow::Scroll => EngineOverflow::Scroll,
        }
    }
}

impl From<EngineOverflow> for Overflow {
    fn from(value: EngineOverflow) -> Self {
        match value {
            EngineOverflow::Visible => Overflow::Visible,
            EngineOverflow::Clip | EngineOverflow::Hidden => Overflow::Hidden,
            EngineOverflow::Scroll => Overflow::Scroll,
        }
    }
}

impl From<FlexDirection> for EngineFlexDirection {
    fn from(value: FlexDirection) -> Self {
        match value {
            FlexDirection::Column => EngineFlexDirection::Column,
            FlexDirection::ColumnReverse => EngineFlexDirection::ColumnReverse,
            FlexDirection::Row => EngineFlexDirection::Row,
            FlexDirection::RowReverse => EngineFlexDirection::RowReverse,
        }
    }
}

impl From<EngineFlexDirection> for FlexDirection {
    fn from(value: EngineFlexDirection) -> Self {
        match value {
            EngineFlexDirection::Column => FlexDirection::Column,
            EngineFlexDirection::ColumnReverse => FlexDirection::ColumnReverse,
            EngineFlexDirection::Row => FlexDirection::Row,
            EngineFlexDirection::RowReverse => FlexDirection::RowReverse,
        }
    }
}

impl From<Wrap> for FlexWrap {
    fn from(value: Wrap) -> Self {
        match value {
            Wrap::NoWrap => FlexWrap::NoWrap,
            Wrap::Wrap => FlexWrap::Wrap,
            Wrap::WrapReverse => FlexWrap::WrapReverse,
        }
    }
}

impl From<FlexWrap> for Wrap {
    fn from(value: FlexWrap) -> Self {
        match value {
            FlexWrap::NoWrap => Wrap::NoWrap,
            FlexWrap::Wrap => Wrap::Wrap,
            FlexWrap::WrapReverse => Wrap::WrapReverse,
        }
    }
}

pub(crate) fn justify_to_engine(value: Justify) -> Option<JustifyContent> {
    Some(match value {
        Justify::FlexStart => JustifyContent::FlexStart,
        Justify::Center => JustifyContent::Center,
        Justify::FlexEnd => JustifyContent::FlexEnd,
        Justify::SpaceBetween => JustifyContent::SpaceBetween,
        Justify::SpaceAround => JustifyContent::SpaceAround,
        Justify::SpaceEvenly => JustifyContent::SpaceEvenly,
    })
}

pub(crate) fn justify_from_engine(value: Option<JustifyContent>) -> Justify {
    match value {
        Some(JustifyContent::Center) => Justify::Center,
        Some(JustifyContent::FlexEnd) | Some(JustifyContent::End) => Justify::FlexEnd,
        Some(JustifyContent::SpaceBetween) => Justify::SpaceBetween,
        Some(JustifyContent::SpaceAround) => Justify::SpaceAround,
        Some(JustifyContent::SpaceEvenly) => Justify::SpaceEvenly,
        _ => Justify::FlexStart,
    }
}

/// Maps to the engine's item alignment; `None` leaves the engine default.
pub(crate) fn align_items_to_engine(value: Align) -> Option<AlignItems> {
    match value {
        Align::FlexStart => Some(AlignItems::FlexStart),
        Align::Center => Some(AlignItems::Center),
        Align::FlexEnd => Some(AlignItems::FlexEnd),
        Align::Stretch => Some(AlignItems::Stretch),
        Align::Baseline => Some(AlignItems::Baseline),
        Align::Auto | Align::SpaceBetween | Align::SpaceAround | Align::SpaceEvenly => None,
    }
}

pub(crate) fn align_items_from_engine(value: Option<AlignItems>) -> Align {
    match value {
        None => Align::Auto,
        Some(AlignItems::FlexStart) | Some(AlignItems::Start) => Align::FlexStart,
        Some(AlignItems::Center) => Align::Center,
        Some(AlignItems::FlexEnd) | Some(AlignItems::End) => Align::FlexEnd,
        Some(AlignItems::Stretch) => Align::Stretch,
        Some(AlignItems::Baseline) => Align::Baseline,
    }
}

pub(crate) fn align_content_to_engine(value: Align) -> Option<AlignContent> {
    match value {
        Align::FlexStart => Some(AlignContent::FlexStart),
        Align::Center => Some(AlignContent::Center),
        Align::FlexEnd => Some(AlignContent::FlexEnd),
        Align::Stretch => Some(AlignContent::Stretch),
        Align::SpaceBetween => Some(AlignContent::SpaceBetween),
        Align::SpaceAround => Some(AlignContent::SpaceAround),
        Align::SpaceEvenly => Some(AlignContent::SpaceEvenly),
        Align::Auto | Align::Baseline => None,
    }
}

pub(crate) fn align_content_from_engine(value: Option<AlignContent>) -> Align {
    match value {
        None => Align::Auto,
        Some(AlignContent::FlexStart) | Some(AlignContent::Start) => Align::FlexStart,
        Some(AlignContent::Center) => Align::Center,
        Some(AlignContent::FlexEnd) | Some(AlignContent::End) => Align::FlexEnd,
        Some(AlignContent::Stretch) => Align::Stretch,
        Some(AlignContent::SpaceBetween) => Align::SpaceBetween,
        Some(AlignContent::SpaceAround) => Align::SpaceAround,
        Some(AlignContent::SpaceEvenly) => Align::SpaceEvenly,
    }
}

impl From<PositionType> for Position {
    fn from(value: PositionType) -> Self {
        match value {
            PositionType::Relative => Position::Relative,
            PositionType::Absolute => Position::Absolute,
        }
    }
}

impl From<FlexValue> for Dimension {
    fn from(value: FlexValue) -> Self {
        match value {
            FlexValue::Auto => Dimension::Auto,
            FlexValue::Points(points) => Dimension::Length(points),
            FlexValue::Percent(percent) => Dimension::Percent(percent / 100.0),
        }
    }
}

impl From<FlexValue> for LengthPercentageAuto {
    fn from(value: FlexValue) -> Self {
        match value {
            FlexValue::Auto => LengthPercentageAuto::Auto,
            FlexValue::Points(points) => LengthPercentageAuto::Length(points),
            FlexValue::Percent(percent) => LengthPercentageAuto::Percent(percent / 100.0),
        }
    }
}

pub(crate) fn length_value(value: LengthPercentage) -> f32 {
    match value {
        LengthPercentage::Length(points) => points,
        LengthPercentage::Percent(fraction) => fraction,
    }
}
