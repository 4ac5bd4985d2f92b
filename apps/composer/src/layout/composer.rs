//! Document composer — turns a resume plus its presentation config into one page tree.
//!
//! # Regions
//! - Header: fixed-height band. The name is centered over the details column; the slot over
//!   the main column stays blank.
//! - Content: two relative-width columns, `details : main`.
//!
//! # Section order
//! - Details column: personal info, languages, education, extra courses.
//! - Main column: about me, work experience, military service.
//!
//! Whether an empty section is composed is decided here, through the config's
//! `SectionPolicies`, never by the blocks themselves.

use tracing::debug;

use crate::layout::blocks::{experience_collection_block, free_text_block, personal_info_block};
use crate::layout::components::{
    content_block, derive_entry, education_block, EntryView, ExperienceSource,
};
use crate::layout::context::Context;
use crate::layout::icons::IconResolver;
use crate::layout::node::{
    Column, DefaultTextStyle, Frame, HorizontalAlign, LayoutNode, Page, Row, Slot, Spacer, Text,
};
use crate::models::presentation::{Color, PresentationConfig, SectionKey};
use crate::models::resume::ResumeData;

const POINTS_PER_CM: f32 = 72.0 / 2.54;
const HEADER_HEIGHT_CM: f32 = 2.5;
const NAME_FONT_SIZE: f32 = 26.0;
/// Gap between the two columns; shared by header and content so they line up.
const COLUMN_GAP: f32 = 0.0;
/// Extra room under the header, inside both columns.
const BOTTOM_HEADER_BUFFER: f32 = 0.0;
const BLOCK_SPACING: f32 = 16.0;
const DETAILS_BLOCK_PADDING: f32 = 15.0;
const MAIN_BLOCK_PADDING: f32 = 15.0;

/// Composes the full page tree for one document.
///
/// Pure and deterministic: the same inputs always produce an identical tree.
pub fn compose_document(
    resume: &ResumeData,
    config: &PresentationConfig,
    icons: &dyn IconResolver,
) -> LayoutNode {
    let cx = Context::new(config, icons);
    let (width_pt, height_pt) = config.page_size.dimensions_pt();

    let page = Page {
        size: config.page_size,
        width_pt,
        height_pt,
        background: Color::white(),
        default_style: DefaultTextStyle {
            font_family: config.font_family.clone(),
            size: config.font_sizes.default,
        },
        header: compose_header(&cx, &resume.full_name),
        content: compose_content(&cx, resume),
    };

    let node = LayoutNode::Page(page);
    debug!(
        direction = ?config.text_direction,
        nodes = node.node_count(),
        "Composed resume page"
    );
    node
}

// ────────────────────────────────────────────────────────────────────────────
// Regions
// ────────────────────────────────────────────────────────────────────────────

fn compose_header(cx: &Context, full_name: &str) -> Row {
    let proportions = cx.config.column_proportions;

    let name = cx.place(
        Text::new(full_name)
            .size(NAME_FONT_SIZE)
            .color(Color::white())
            .align(HorizontalAlign::Center)
            .middle(),
    );
    let blank = cx.place(Spacer::default());

    cx.orient(Row {
        frame: Frame {
            background: Some(cx.config.background_colors.header.clone()),
            height: Some(HEADER_HEIGHT_CM * POINTS_PER_CM),
            ..Default::default()
        },
        spacing: COLUMN_GAP,
        slots: vec![
            Slot::relative(proportions.details, name),
            Slot::relative(proportions.main, blank),
        ],
    })
}

fn compose_content(cx: &Context, resume: &ResumeData) -> Row {
    let proportions = cx.config.column_proportions;

    cx.orient(Row {
        frame: Frame::default(),
        spacing: COLUMN_GAP,
        slots: vec![
            Slot::relative(proportions.details, compose_details_column(cx, resume)),
            Slot::relative(proportions.main, compose_main_column(cx, resume)),
        ],
    })
}

fn compose_details_column(cx: &Context, resume: &ResumeData) -> LayoutNode {
    let blocks = [
        section(cx, SectionKey::PersonalDetails, resume.personal_info.is_empty(), || {
            personal_info_block(cx, &resume.personal_info)
        }),
        section(cx, SectionKey::Languages, resume.languages.is_empty(), || {
            content_block(cx, SectionKey::Languages, &resume.languages)
        }),
        section(cx, SectionKey::Education, resume.education.is_empty(), || {
            education_block(cx, &resume.education)
        }),
        section(cx, SectionKey::Courses, resume.extra_courses.is_empty(), || {
            content_block(cx, SectionKey::Courses, &resume.extra_courses)
        }),
    ];

    body_column(
        cx,
        cx.config.background_colors.details.clone(),
        DETAILS_BLOCK_PADDING,
        blocks,
    )
}

fn compose_main_column(cx: &Context, resume: &ResumeData) -> LayoutNode {
    let blocks = [
        section(cx, SectionKey::AboutMe, resume.about_me.is_empty(), || {
            free_text_block(cx, SectionKey::AboutMe, &resume.about_me)
        }),
        section(cx, SectionKey::WorkExperience, resume.work_experience.is_empty(), || {
            let entries: Vec<EntryView<'_>> = resume
                .work_experience
                .iter()
                .map(|job| derive_entry(ExperienceSource::Work(job)))
                .collect();
            experience_collection_block(cx, SectionKey::WorkExperience, &entries)
        }),
        section(cx, SectionKey::MilitaryService, resume.military_service.is_empty(), || {
            let entries: Vec<EntryView<'_>> = resume
                .military_service
                .iter()
                .map(|service| derive_entry(ExperienceSource::Military(service)))
                .collect();
            experience_collection_block(cx, SectionKey::MilitaryService, &entries)
        }),
    ];

    body_column(
        cx,
        cx.config.background_colors.main.clone(),
        MAIN_BLOCK_PADDING,
        blocks,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Composes a section unless its data is empty and its policy says to omit it.
fn section(
    cx: &Context,
    key: SectionKey,
    is_empty: bool,
    build: impl FnOnce() -> LayoutNode,
) -> Option<LayoutNode> {
    if cx.config.section_policies.should_render(key, is_empty) {
        Some(build())
    } else {
        debug!(section = %key, "Omitting empty section");
        None
    }
}

fn body_column<const N: usize>(
    cx: &Context,
    background: Color,
    block_padding: f32,
    blocks: [Option<LayoutNode>; N],
) -> LayoutNode {
    let mut items = vec![cx.place(Spacer::height(BOTTOM_HEADER_BUFFER))];
    items.extend(
        blocks
            .into_iter()
            .flatten()
            .map(|block| block.inset(block_padding, 0.0)),
    );

    cx.place(Column {
        frame: Frame {
            align: Some(HorizontalAlign::Left),
            background: Some(background),
            ..Default::default()
        },
        spacing: BLOCK_SPACING,
        items,
    })
}
