//! Layout primitives — the tree handed to a rendering backend.
//!
//! Node kinds map one-to-one onto what a document-assembly library offers: page, row,
//! column, text, hyperlink-wrapped text, image, and a fixed-size spacer. Placement
//! attributes (alignment, padding, border, background, fixed height) live in a `Frame`
//! carried by every non-page node.

use serde::Serialize;

use crate::models::presentation::{Color, PageSize};

// ────────────────────────────────────────────────────────────────────────────
// Placement
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    pub fn flipped(self) -> Self {
        match self {
            HorizontalAlign::Left => HorizontalAlign::Right,
            HorizontalAlign::Center => HorizontalAlign::Center,
            HorizontalAlign::Right => HorizontalAlign::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    Top,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub fn left(value: f32) -> Self {
        Padding {
            left: value,
            ..Default::default()
        }
    }

    pub fn bottom(value: f32) -> Self {
        Padding {
            bottom: value,
            ..Default::default()
        }
    }

    pub fn all(value: f32) -> Self {
        Padding {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Frame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<HorizontalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    pub padding: Padding,
    /// Bottom border stroke width; 0 means no border.
    pub border_bottom: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

/// How a row slot claims horizontal space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Size {
    Relative(f32),
    Constant(f32),
}

// ────────────────────────────────────────────────────────────────────────────
// Text styling
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    SemiBold,
}

/// Per-run styling; `None` fields inherit from the page default style.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    pub weight: FontWeight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultTextStyle {
    pub font_family: String,
    pub size: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Nodes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    pub size: Size,
    pub node: LayoutNode,
}

impl Slot {
    pub fn relative(weight: f32, node: LayoutNode) -> Self {
        Slot {
            size: Size::Relative(weight),
            node,
        }
    }

    pub fn constant(width: f32, node: LayoutNode) -> Self {
        Slot {
            size: Size::Constant(width),
            node,
        }
    }
}

/// Horizontal container. Slot order is visual order, left to right.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Row {
    pub frame: Frame,
    pub spacing: f32,
    pub slots: Vec<Slot>,
}

/// Vertical container. Item order is visual order, top to bottom.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Column {
    pub frame: Frame,
    pub spacing: f32,
    pub items: Vec<LayoutNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Text {
    pub frame: Frame,
    pub content: String,
    pub style: TextStyle,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Text {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn align(mut self, align: HorizontalAlign) -> Self {
        self.frame.align = Some(align);
        self
    }

    pub fn middle(mut self) -> Self {
        self.frame.vertical_align = Some(VerticalAlign::Middle);
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.frame.padding = padding;
        self
    }

    pub fn border_bottom(mut self, width: f32) -> Self {
        self.frame.border_bottom = width;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.style.size = Some(size);
        self
    }

    pub fn semi_bold(mut self) -> Self {
        self.style.weight = FontWeight::SemiBold;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hyperlink {
    pub url: String,
    pub text: Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub frame: Frame,
    pub path: String,
}

/// Empty space. Sized by its frame height or by the row slot holding it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Spacer {
    pub frame: Frame,
}

impl Spacer {
    pub fn height(height: f32) -> Self {
        Spacer {
            frame: Frame {
                height: Some(height),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub size: PageSize,
    pub width_pt: f32,
    pub height_pt: f32,
    pub background: Color,
    pub default_style: DefaultTextStyle,
    pub header: Row,
    pub content: Row,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutNode {
    Page(Page),
    Row(Row),
    Column(Column),
    Text(Text),
    Hyperlink(Hyperlink),
    Image(Image),
    Spacer(Spacer),
}

macro_rules! into_node {
    ($($kind:ident),*) => {
        $(impl From<$kind> for LayoutNode {
            fn from(value: $kind) -> Self {
                LayoutNode::$kind(value)
            }
        })*
    };
}

into_node!(Page, Row, Column, Text, Hyperlink, Image, Spacer);

impl LayoutNode {
    pub fn frame_mut(&mut self) -> Option<&mut Frame> {
        match self {
            LayoutNode::Page(_) => None,
            LayoutNode::Row(row) => Some(&mut row.frame),
            LayoutNode::Column(column) => Some(&mut column.frame),
            LayoutNode::Text(text) => Some(&mut text.frame),
            LayoutNode::Hyperlink(link) => Some(&mut link.text.frame),
            LayoutNode::Image(image) => Some(&mut image.frame),
            LayoutNode::Spacer(spacer) => Some(&mut spacer.frame),
        }
    }

    /// Adds symmetric padding around a node. Symmetric insets commute with mirroring,
    /// so this is safe to apply to subtrees that are already oriented.
    pub fn inset(mut self, horizontal: f32, vertical: f32) -> Self {
        if let Some(frame) = self.frame_mut() {
            frame.padding.left += horizontal;
            frame.padding.right += horizontal;
            frame.padding.top += vertical;
            frame.padding.bottom += vertical;
        }
        self
    }

    /// Direct children in visual order.
    pub fn children(&self) -> Vec<&LayoutNode> {
        match self {
            LayoutNode::Row(row) => row.slots.iter().map(|slot| &slot.node).collect(),
            LayoutNode::Column(column) => column.items.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// All text runs in document order (header first, then content), including hyperlink text.
    pub fn text_content(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            LayoutNode::Page(page) => {
                for slot in page.header.slots.iter().chain(&page.content.slots) {
                    slot.node.collect_text(out);
                }
            }
            LayoutNode::Text(text) => out.push(&text.content),
            LayoutNode::Hyperlink(link) => out.push(&link.text.content),
            other => {
                for child in other.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Total number of nodes in this subtree, the page's header and content rows included.
    pub fn node_count(&self) -> usize {
        match self {
            LayoutNode::Page(page) => {
                1 + [&page.header, &page.content]
                    .iter()
                    .map(|row| 1 + row.slots.iter().map(|s| s.node.node_count()).sum::<usize>())
                    .sum::<usize>()
            }
            other => 1 + other.children().iter().map(|c| c.node_count()).sum::<usize>(),
        }
    }
}
