//! Composite blocks built from the leaf components.

use crate::layout::components::{
    block_column, experience_entry, feature_item, section_title, title_spacer, EntryView,
    ITEM_INDENT,
};
use crate::layout::context::Context;
use crate::layout::node::{HorizontalAlign, LayoutNode, Padding, Text};
use crate::models::presentation::SectionKey;
use crate::models::resume::FeatureItem;

const ENTRY_PADDING: f32 = 5.0;

pub fn personal_info_block(cx: &Context, items: &[FeatureItem]) -> LayoutNode {
    let mut nodes = vec![
        section_title(cx, SectionKey::PersonalDetails),
        title_spacer(cx),
    ];
    nodes.extend(items.iter().map(|item| feature_item(cx, item)));
    block_column(cx, nodes)
}

/// Bordered title followed by every entry, each wrapped in uniform padding.
pub fn experience_collection_block(
    cx: &Context,
    key: SectionKey,
    entries: &[EntryView<'_>],
) -> LayoutNode {
    let mut nodes = vec![section_title(cx, key)];
    nodes.extend(
        entries
            .iter()
            .map(|entry| experience_entry(cx, entry).inset(ENTRY_PADDING, ENTRY_PADDING)),
    );
    block_column(cx, nodes)
}

/// Title (when the label is non-empty) and one indented body line.
pub fn free_text_block(cx: &Context, key: SectionKey, body: &str) -> LayoutNode {
    let mut nodes = Vec::with_capacity(3);
    if !cx.label(key).is_empty() {
        nodes.push(section_title(cx, key));
        nodes.push(title_spacer(cx));
    }
    nodes.push(
        cx.place(
            Text::new(body)
                .align(HorizontalAlign::Left)
                .padding(Padding::left(ITEM_INDENT))
                .size(cx.config.font_sizes.default),
        ),
    );
    block_column(cx, nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::icons::IconResolver;
    use crate::layout::node::Column;
    use crate::models::presentation::{PresentationConfig, SectionLabels, TextDirection};
    use std::collections::BTreeMap;

    struct NoIcons;

    impl IconResolver for NoIcons {
        fn resolve(&self, _reference: &str) -> Option<String> {
            None
        }
    }

    fn make_config(direction: TextDirection) -> PresentationConfig {
        PresentationConfig {
            text_direction: direction,
            ..Default::default()
        }
    }

    fn as_column(node: &LayoutNode) -> &Column {
        match node {
            LayoutNode::Column(column) => column,
            other => panic!("expected column, got {other:?}"),
        }
    }

    #[test]
    fn test_personal_info_block_one_row_per_item() {
        let config = make_config(TextDirection::LeftToRight);
        let cx = Context::new(&config, &NoIcons);
        let items = vec![
            FeatureItem {
                text: "jane@example.com".to_string(),
                ..Default::default()
            },
            FeatureItem {
                text: "github.com/jane".to_string(),
                hyperlink: Some("https://github.com/jane".to_string()),
                icon: None,
            },
        ];

        let node = personal_info_block(&cx, &items);
        let column = as_column(&node);
        assert_eq!(column.items.len(), 4);
        assert!(column.items[2..]
            .iter()
            .all(|item| matches!(item, LayoutNode::Row(_))));
        assert_eq!(
            node.text_content(),
            vec!["Personal Info", "jane@example.com", "github.com/jane"]
        );
    }

    #[test]
    fn test_experience_collection_pads_every_entry() {
        let config = make_config(TextDirection::LeftToRight);
        let cx = Context::new(&config, &NoIcons);
        let details = vec!["Built things.".to_string()];
        let entries = vec![
            EntryView {
                header: "Developer, Acme".to_string(),
                subtitle: String::new(),
                details: &details,
            },
            EntryView {
                header: "Intern, Acme".to_string(),
                subtitle: "2018".to_string(),
                details: &[],
            },
        ];

        let node = experience_collection_block(&cx, SectionKey::WorkExperience, &entries);
        let column = as_column(&node);
        assert_eq!(column.items.len(), 3);
        for entry in &column.items[1..] {
            assert_eq!(as_column(entry).frame.padding, Padding::all(ENTRY_PADDING));
        }
        assert_eq!(
            node.text_content(),
            vec![
                "Working Experience",
                "Developer, Acme",
                "•",
                "Built things.",
                "Intern, Acme",
                "2018"
            ]
        );
    }

    #[test]
    fn test_free_text_block_with_title() {
        let config = make_config(TextDirection::LeftToRight);
        let cx = Context::new(&config, &NoIcons);
        let node = free_text_block(&cx, SectionKey::AboutMe, "X");
        assert_eq!(node.text_content(), vec!["Summary", "X"]);
    }

    #[test]
    fn test_free_text_block_empty_label_renders_body_only() {
        let mut labels: BTreeMap<SectionKey, String> = SectionKey::ALL
            .into_iter()
            .map(|key| (key, key.as_str().to_string()))
            .collect();
        labels.insert(SectionKey::AboutMe, String::new());

        let config = PresentationConfig {
            section_labels: SectionLabels::try_from(labels).unwrap(),
            ..Default::default()
        };
        let cx = Context::new(&config, &NoIcons);
        let node = free_text_block(&cx, SectionKey::AboutMe, "X");

        let column = as_column(&node);
        assert_eq!(column.items.len(), 1);
        assert_eq!(node.text_content(), vec!["X"]);
    }

    #[test]
    fn test_blocks_mirror_exactly() {
        let ltr_config = make_config(TextDirection::LeftToRight);
        let rtl_config = make_config(TextDirection::RightToLeft);
        let details = vec!["a".to_string(), "b".to_string()];
        let entries = vec![EntryView {
            header: "h".to_string(),
            subtitle: "s".to_string(),
            details: &details,
        }];

        let ltr = experience_collection_block(
            &Context::new(&ltr_config, &NoIcons),
            SectionKey::MilitaryService,
            &entries,
        );
        let rtl = experience_collection_block(
            &Context::new(&rtl_config, &NoIcons),
            SectionKey::MilitaryService,
            &entries,
        );
        assert_eq!(rtl, ltr.mirrored());
    }
}
