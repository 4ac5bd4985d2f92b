//! Leaf components — pure functions from a slice of resume data to a layout subtree.
//!
//! Every function builds the left-to-right shape and hands each node it assembles to
//! `Context::place`/`Context::orient`, so right-to-left output is the exact reflection.

use tracing::warn;

use crate::layout::context::Context;
use crate::layout::node::{
    Column, Frame, HorizontalAlign, Hyperlink, Image, LayoutNode, Padding, Row, Slot, Spacer,
    Text, VerticalAlign,
};
use crate::models::presentation::{Color, SectionKey};
use crate::models::resume::{EducationDetails, FeatureItem, MilitaryService, WorkExperience};

pub(crate) const TITLE_BORDER_WIDTH: f32 = 1.0;
pub(crate) const TITLE_SPACER_HEIGHT: f32 = 5.0;
pub(crate) const ITEM_INDENT: f32 = 3.0;

const ICON_SLOT_WIDTH: f32 = 10.0;
const ICON_TEXT_GAP: f32 = 5.0;
const BULLET_GLYPH: &str = "•";
const BULLET_SLOT_WIDTH: f32 = 10.0;
const EDUCATION_ITEM_GAP: f32 = 10.0;
const ENTRY_TITLE_GAP: f32 = 3.0;
const SUBTITLE_COLOR: &str = "424242";

// ────────────────────────────────────────────────────────────────────────────
// Shared pieces
// ────────────────────────────────────────────────────────────────────────────

/// Bordered section title, looked up from the configured labels.
pub fn section_title(cx: &Context, key: SectionKey) -> LayoutNode {
    cx.place(
        Text::new(cx.label(key))
            .size(cx.config.font_sizes.major_title)
            .border_bottom(TITLE_BORDER_WIDTH)
            .align(HorizontalAlign::Left),
    )
}

pub fn title_spacer(cx: &Context) -> LayoutNode {
    cx.place(Spacer::height(TITLE_SPACER_HEIGHT))
}

fn indented_line(cx: &Context, content: impl Into<String>) -> Text {
    Text::new(content)
        .align(HorizontalAlign::Left)
        .padding(Padding::left(ITEM_INDENT))
        .size(cx.config.font_sizes.default)
}

/// A start-aligned column, oriented.
pub(crate) fn block_column(cx: &Context, items: Vec<LayoutNode>) -> LayoutNode {
    let mut column = Column {
        items,
        ..Default::default()
    };
    column.frame.align = Some(HorizontalAlign::Left);
    cx.place(column)
}

// ────────────────────────────────────────────────────────────────────────────
// Feature item & bullet point
// ────────────────────────────────────────────────────────────────────────────

/// Icon slot + text slot. A missing or unresolvable icon leaves the slot blank.
pub fn feature_item(cx: &Context, item: &FeatureItem) -> LayoutNode {
    let icon = match item.icon.as_deref() {
        Some(reference) => match cx.icons.resolve(reference) {
            Some(path) => cx.place(Image {
                frame: Frame {
                    vertical_align: Some(VerticalAlign::Middle),
                    ..Default::default()
                },
                path,
            }),
            None => {
                warn!(icon = reference, "Icon not found, leaving slot blank");
                cx.place(Spacer::default())
            }
        },
        None => cx.place(Spacer::default()),
    };

    let text = Text::new(&item.text)
        .align(HorizontalAlign::Left)
        .middle()
        .padding(Padding::left(ICON_TEXT_GAP));

    let text = match &item.hyperlink {
        Some(url) => cx.place(Hyperlink {
            url: url.clone(),
            text,
        }),
        None => cx.place(text),
    };

    cx.place(Row {
        slots: vec![
            Slot::constant(ICON_SLOT_WIDTH, icon),
            Slot::relative(1.0, text),
        ],
        ..Default::default()
    })
}

/// `• text` in left-to-right; `text •` with both right-aligned in right-to-left.
pub fn bullet_point(cx: &Context, detail: &str) -> LayoutNode {
    let size = cx.config.font_sizes.default;
    let bullet = cx.place(Text::new(BULLET_GLYPH).align(HorizontalAlign::Left).size(size));
    let text = cx.place(Text::new(detail).align(HorizontalAlign::Left).size(size));

    let mut row = Row {
        slots: vec![
            Slot::constant(BULLET_SLOT_WIDTH, bullet),
            Slot::relative(1.0, text),
        ],
        ..Default::default()
    };
    row.frame.align = Some(HorizontalAlign::Left);
    cx.place(row)
}

// ────────────────────────────────────────────────────────────────────────────
// Titled collection blocks
// ────────────────────────────────────────────────────────────────────────────

/// Title, spacer, one indented line per item. Callers decide whether an empty list is shown.
pub fn content_block(cx: &Context, key: SectionKey, items: &[String]) -> LayoutNode {
    let mut nodes = vec![section_title(cx, key), title_spacer(cx)];
    nodes.extend(items.iter().map(|item| cx.place(indented_line(cx, item))));
    block_column(cx, nodes)
}

/// Major in semi-bold, then facility and dates when present, then a gap.
pub fn education_block(cx: &Context, items: &[EducationDetails]) -> LayoutNode {
    let mut nodes = vec![section_title(cx, SectionKey::Education), title_spacer(cx)];

    for item in items {
        nodes.push(cx.place(indented_line(cx, &item.major).semi_bold()));

        if let Some(facility) = item.facility.as_deref().filter(|f| !f.is_empty()) {
            nodes.push(cx.place(indented_line(cx, facility)));
        }

        let dates = item.dates.display();
        if !dates.is_empty() {
            nodes.push(cx.place(indented_line(cx, dates)));
        }

        nodes.push(cx.place(Spacer::height(EDUCATION_ITEM_GAP)));
    }

    block_column(cx, nodes)
}

// ────────────────────────────────────────────────────────────────────────────
// Experience entries
// ────────────────────────────────────────────────────────────────────────────

/// The data kinds that render as an experience entry.
#[derive(Debug, Clone, Copy)]
pub enum ExperienceSource<'a> {
    Work(&'a WorkExperience),
    Military(&'a MilitaryService),
}

/// The uniform shape an experience entry renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView<'a> {
    pub header: String,
    pub subtitle: String,
    pub details: &'a [String],
}

pub fn derive_entry(source: ExperienceSource<'_>) -> EntryView<'_> {
    match source {
        ExperienceSource::Work(job) => EntryView {
            header: job.header(),
            subtitle: job.dates.display(),
            details: &job.details,
        },
        ExperienceSource::Military(service) => EntryView {
            header: service.header(),
            subtitle: service.dates.display(),
            details: &service.details,
        },
    }
}

/// Title and subtitle lines, or a single padded title when there is no subtitle, then
/// one bullet per detail.
pub fn experience_entry(cx: &Context, entry: &EntryView<'_>) -> LayoutNode {
    let sizes = &cx.config.font_sizes;
    let title = Text::new(&entry.header)
        .size(sizes.block_title)
        .semi_bold()
        .align(HorizontalAlign::Left);

    let mut nodes = Vec::with_capacity(entry.details.len() + 2);
    if entry.subtitle.is_empty() {
        nodes.push(cx.place(title.padding(Padding::bottom(ENTRY_TITLE_GAP))));
    } else {
        nodes.push(cx.place(title));
        nodes.push(
            cx.place(
                Text::new(&entry.subtitle)
                    .size(sizes.block_subtitle)
                    .color(Color::known(SUBTITLE_COLOR))
                    .align(HorizontalAlign::Left)
                    .padding(Padding::bottom(ENTRY_TITLE_GAP)),
            ),
        );
    }

    nodes.extend(entry.details.iter().map(|detail| bullet_point(cx, detail)));
    block_column(cx, nodes)
}
