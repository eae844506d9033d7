//! Component Templates
//!
//! The fixed set of blocks the layout editor can place.

use chrono::Utc;

use super::props::{PropValue, Props};
use crate::grid::GRID_COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Header,
    Calendar,
    Sidebar,
    Footer,
    Main,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Header => "header",
            TemplateKind::Calendar => "calendar",
            TemplateKind::Sidebar => "sidebar",
            TemplateKind::Footer => "footer",
            TemplateKind::Main => "main",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: TemplateKind,
    pub description: &'static str,
    /// Default grid size (w, h)
    pub size: (u32, u32),
}

pub const TEMPLATES: &[Template] = &[
    Template {
        id: "default-header",
        name: "Header",
        kind: TemplateKind::Header,
        description: "Simple header with navigation links",
        size: (GRID_COLS, 2),
    },
    Template {
        id: "default-calendar",
        name: "Calendar",
        kind: TemplateKind::Calendar,
        description: "Month calendar highlighting post dates",
        size: (4, 6),
    },
    Template {
        id: "default-sidebar",
        name: "Sidebar",
        kind: TemplateKind::Sidebar,
        description: "Navigation sidebar",
        size: (3, 8),
    },
    Template {
        id: "default-footer",
        name: "Footer",
        kind: TemplateKind::Footer,
        description: "Footer with link sections",
        size: (GRID_COLS, 3),
    },
    Template {
        id: "default-article-card",
        name: "Article card",
        kind: TemplateKind::Main,
        description: "Card showing a blog post",
        size: (4, 5),
    },
];

pub fn template_by_id(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|template| template.id == id)
}

impl Template {
    /// Fresh property set for a new placement
    pub fn default_props(&self) -> Props {
        match self.kind {
            TemplateKind::Header => Props::new(vec![
                ("title", PropValue::text("Blog title")),
                (
                    "links",
                    PropValue::records(
                        &["label", "url"],
                        &[
                            &["Home", "/"],
                            &["Articles", "/articles"],
                            &["Categories", "/categories"],
                            &["Contact", "/contact"],
                        ],
                    ),
                ),
                ("background_color", PropValue::color("#2196f3")),
                ("text_color", PropValue::color("#ffffff")),
            ]),
            TemplateKind::Calendar => {
                let today = Utc::now().date_naive().to_string();
                Props::new(vec![
                    ("highlighted_dates", PropValue::TextList(vec![today])),
                    ("primary_color", PropValue::color("#2196f3")),
                    ("secondary_color", PropValue::color("#bbdefb")),
                ])
            }
            TemplateKind::Sidebar => Props::new(vec![
                ("title", PropValue::text("Sidebar")),
                (
                    "items",
                    PropValue::records(
                        &["label", "url"],
                        &[
                            &["Latest posts", "/latest"],
                            &["Popular posts", "/popular"],
                            &["Category 1", "/category/1"],
                            &["Category 2", "/category/2"],
                            &["Archive", "/archive"],
                        ],
                    ),
                ),
                ("background_color", PropValue::color("#f5f5f5")),
                ("text_color", PropValue::color("#333333")),
            ]),
            TemplateKind::Footer => Props::new(vec![
                ("title", PropValue::text("Blog title")),
                ("description", PropValue::text("Describe your blog here.")),
                (
                    "links",
                    PropValue::records(
                        &["section", "label", "url"],
                        &[
                            &["Categories", "Technology", "/category/tech"],
                            &["Categories", "Lifestyle", "/category/lifestyle"],
                            &["Categories", "Travel", "/category/travel"],
                            &["Links", "Home", "/"],
                            &["Links", "Articles", "/articles"],
                            &["Links", "Contact", "/contact"],
                        ],
                    ),
                ),
                ("copyright", PropValue::text("© Blog title. All rights reserved.")),
                ("background_color", PropValue::color("#333333")),
                ("text_color", PropValue::color("#ffffff")),
            ]),
            TemplateKind::Main => Props::new(vec![
                ("title", PropValue::text("Article title")),
                ("excerpt", PropValue::text("A short excerpt of the article goes here.")),
                ("excerpt_length", PropValue::Number(120.0)),
                ("image_url", PropValue::text("https://source.unsplash.com/random/300x200/?blog")),
                ("date", PropValue::text("2024-01-01")),
                ("author", PropValue::text("Author")),
                ("tags", PropValue::text_list(&["Tag 1", "Tag 2"])),
                ("primary_color", PropValue::color("#2196f3")),
                ("secondary_color", PropValue::color("#bbdefb")),
                ("show_image", PropValue::Flag(true)),
                ("show_tags", PropValue::Flag(true)),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_templates_with_unique_ids() {
        assert_eq!(TEMPLATES.len(), 5);
        for template in TEMPLATES {
            assert_eq!(template_by_id(template.id), Some(template));
        }
        assert!(template_by_id("default-unknown").is_none());
    }

    #[test]
    fn test_header_and_footer_are_full_width() {
        for id in ["default-header", "default-footer"] {
            assert_eq!(template_by_id(id).map(|t| t.size.0), Some(GRID_COLS));
        }
    }

    #[test]
    fn test_defaults_fit_the_grid() {
        for template in TEMPLATES {
            let (w, h) = template.size;
            assert!(w >= 1 && w <= GRID_COLS && h >= 1, "{}", template.id);
            assert!(!template.default_props().0.is_empty());
        }
    }

    #[test]
    fn test_calendar_highlights_today() {
        let props = template_by_id("default-calendar").unwrap().default_props();
        let dates = props.list("highlighted_dates");
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].len(), "2024-01-01".len());
    }
}
