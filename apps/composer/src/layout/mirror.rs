//! Direction mirroring.
//!
//! A right-to-left document is the left-to-right document reflected about the page's
//! vertical axis: row slots reversed, horizontal alignment flipped, left/right padding
//! swapped. Components build the left-to-right shape and pass every node they assemble
//! through `TextDirection::orient`, which reflects that node's own placement only. Since
//! each node is assembled exactly once, the whole tree ends up reflected exactly once.
//!
//! `LayoutNode::mirrored` is the deep version of the same transform, used to check the
//! law from the outside: `compose(RTL) == compose(LTR).mirrored()`.

use crate::layout::node::{Column, Frame, Hyperlink, Image, LayoutNode, Page, Row, Spacer, Text};
use crate::models::presentation::TextDirection;

pub trait Reflect {
    /// Reflects this node's own placement, leaving children untouched.
    fn reflect(&mut self);

    /// Reflects this node and every descendant.
    fn reflect_deep(&mut self) {
        self.reflect();
    }
}

impl TextDirection {
    /// Orients a freshly assembled node for this direction.
    pub fn orient<T: Reflect>(self, mut node: T) -> T {
        if self == TextDirection::RightToLeft {
            node.reflect();
        }
        node
    }
}

impl Reflect for Frame {
    fn reflect(&mut self) {
        self.align = self.align.map(|align| align.flipped());
        std::mem::swap(&mut self.padding.left, &mut self.padding.right);
    }
}

impl Reflect for Row {
    fn reflect(&mut self) {
        self.frame.reflect();
        self.slots.reverse();
    }

    fn reflect_deep(&mut self) {
        self.reflect();
        for slot in &mut self.slots {
            slot.node.reflect_deep();
        }
    }
}

impl Reflect for Column {
    fn reflect(&mut self) {
        self.frame.reflect();
    }

    fn reflect_deep(&mut self) {
        self.reflect();
        for item in &mut self.items {
            item.reflect_deep();
        }
    }
}

impl Reflect for Text {
    fn reflect(&mut self) {
        self.frame.reflect();
    }
}

impl Reflect for Hyperlink {
    fn reflect(&mut self) {
        self.text.reflect();
    }
}

impl Reflect for Image {
    fn reflect(&mut self) {
        self.frame.reflect();
    }
}

impl Reflect for Spacer {
    fn reflect(&mut self) {
        self.frame.reflect();
    }
}

/// A page has no placement of its own; its rows are oriented when they are assembled.
impl Reflect for Page {
    fn reflect(&mut self) {}

    fn reflect_deep(&mut self) {
        self.header.reflect_deep();
        self.content.reflect_deep();
    }
}

impl Reflect for LayoutNode {
    fn reflect(&mut self) {
        match self {
            LayoutNode::Page(page) => page.reflect(),
            LayoutNode::Row(row) => row.reflect(),
            LayoutNode::Column(column) => column.reflect(),
            LayoutNode::Text(text) => text.reflect(),
            LayoutNode::Hyperlink(link) => link.reflect(),
            LayoutNode::Image(image) => image.reflect(),
            LayoutNode::Spacer(spacer) => spacer.reflect(),
        }
    }

    fn reflect_deep(&mut self) {
        match self {
            LayoutNode::Page(page) => page.reflect_deep(),
            LayoutNode::Row(row) => row.reflect_deep(),
            LayoutNode::Column(column) => column.reflect_deep(),
            LayoutNode::Text(text) => text.reflect_deep(),
            LayoutNode::Hyperlink(link) => link.reflect_deep(),
            LayoutNode::Image(image) => image.reflect_deep(),
            LayoutNode::Spacer(spacer) => spacer.reflect_deep(),
        }
    }
}

impl LayoutNode {
    /// The whole subtree reflected about the vertical axis.
    pub fn mirrored(mut self) -> Self {
        self.reflect_deep();
        self
    }
}
