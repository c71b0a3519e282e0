//! Scene items for exercising controllers in tests

use std::any::Any;

use taffy::NodeId;

use crate::item::{LayoutItem, LayoutModifier};
use crate::modifier::FlexModifier;
use crate::refresh::RefreshSignal;
use crate::style::FlexValue;
use crate::tree::{Frame, LayoutTree};

/// A modifier kind controllers do not recognise
#[derive(Debug, Default)]
pub struct ForeignModifier;

impl LayoutModifier for ForeignModifier {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
pub enum TestModifier {
    Flex(FlexModifier),
    Foreign(ForeignModifier),
}

/// Scene item that records every frame applied to it
#[derive(Debug)]
pub struct TestItem {
    pub name: &'static str,
    pub modifier: Option<TestModifier>,
    pub within_layout: bool,
    pub frames: Vec<Frame>,
}

impl TestItem {
    /// Item with a flex modifier and auto size
    pub fn flex(name: &'static str, tree: &mut LayoutTree, refresh: &RefreshSignal) -> Self {
        let modifier = FlexModifier::new(tree, refresh.clone())
            .unwrap_or_else(|err| panic!("failed to create modifier for {name}: {err}"));
        Self::with_modifier(name, Some(TestModifier::Flex(modifier)))
    }

    /// Item with a flex modifier of a fixed, non-shrinking size
    pub fn sized(
        name: &'static str,
        tree: &mut LayoutTree,
        refresh: &RefreshSignal,
        width: f32,
        height: f32,
    ) -> Self {
        let mut item = Self::flex(name, tree, refresh);
        if let Some(modifier) = item.flex_modifier_mut() {
            let sized = modifier
                .set_size(tree, FlexValue::Points(width), FlexValue::Points(height))
                .and_then(|()| modifier.set_flex_shrink(tree, 0.0));
            if let Err(err) = sized {
                panic!("failed to size {name}: {err}");
            }
        }
        item
    }

    /// Item without any layout decoration
    pub fn plain(name: &'static str) -> Self {
        Self::with_modifier(name, None)
    }

    /// Item decorated with a modifier kind the controller ignores
    pub fn foreign(name: &'static str) -> Self {
        Self::with_modifier(name, Some(TestModifier::Foreign(ForeignModifier)))
    }

    pub fn hidden(mut self) -> Self {
        self.within_layout = false;
        self
    }

    pub fn node(&self) -> Option<NodeId> {
        match &self.modifier {
            Some(TestModifier::Flex(modifier)) => Some(modifier.node()),
            _ => None,
        }
    }

    pub fn flex_modifier_mut(&mut self) -> Option<&mut FlexModifier> {
        match &mut self.modifier {
            Some(TestModifier::Flex(modifier)) => Some(modifier),
            _ => None,
        }
    }

    pub fn last_frame(&self) -> Option<Frame> {
        self.frames.last().copied()
    }

    fn with_modifier(name: &'static str, modifier: Option<TestModifier>) -> Self {
        Self {
            name,
            modifier,
            within_layout: true,
            frames: Vec::new(),
        }
    }
}

impl LayoutItem for TestItem {
    fn layout_modifier(&self) -> Option<&dyn LayoutModifier> {
        match &self.modifier {
            Some(TestModifier::Flex(modifier)) => Some(modifier as &dyn LayoutModifier),
            Some(TestModifier::Foreign(modifier)) => Some(modifier as &dyn LayoutModifier),
            None => None,
        }
    }

    fn within_layout(&self) -> bool {
        self.within_layout
    }

    fn apply_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }
}
