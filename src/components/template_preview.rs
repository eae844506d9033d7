//! Template Preview Component
//!
//! Renders a placed template from its property set.

use chrono::{Datelike, NaiveDate, Utc};
use leptos::prelude::*;

use crate::layout_editor::props::Props;
use crate::layout_editor::templates::TemplateKind;

/// Day numbers of a month laid out Sunday-first, `None` for leading blanks
fn month_cells(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let days = next_month.map(|next| (next - first).num_days() as u32).unwrap_or(31);
    let blanks = first.weekday().num_days_from_sunday() as usize;
    std::iter::repeat(None)
        .take(blanks)
        .chain((1..=days).map(Some))
        .collect()
}

/// Group footer link rows by their `section` cell, keeping first-seen order
fn group_sections(rows: &[Vec<(String, String)>]) -> Vec<(String, Vec<(String, String)>)> {
    let mut sections: Vec<(String, Vec<(String, String)>)> = Vec::new();
    for row in rows {
        let cell = |name: &str| {
            row.iter()
                .find(|(column, _)| column == name)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };
        let link = (cell("label"), cell("url"));
        let section = cell("section");
        match sections.iter_mut().find(|(name, _)| *name == section) {
            Some((_, links)) => links.push(link),
            None => sections.push((section, vec![link])),
        }
    }
    sections
}

fn truncate(text: &str, limit: Option<f64>) -> String {
    match limit {
        Some(limit) if limit >= 0.0 && text.chars().count() > limit as usize => {
            let mut cut: String = text.chars().take(limit as usize).collect();
            cut.push('…');
            cut
        }
        _ => text.to_string(),
    }
}

fn links_view(rows: Vec<Vec<(String, String)>>) -> impl IntoView {
    rows.into_iter()
        .map(|row| {
            let get = |name: &str| row.iter().find(|(c, _)| c == name).map(|(_, v)| v.clone()).unwrap_or_default();
            let (label, url) = (get("label"), get("url"));
            view! { <li><a href=url>{label}</a></li> }
        })
        .collect_view()
}

#[component]
pub fn TemplatePreview(kind: TemplateKind, #[prop(into)] props: Signal<Props>) -> impl IntoView {
    let body = move || {
        let props = props.get();
        match kind {
            TemplateKind::Header => view! {
                <header
                    class="tpl-header"
                    style=format!("background: {}; color: {};", props.text("background_color"), props.text("text_color"))
                >
                    <h1>{props.text("title")}</h1>
                    <nav><ul>{links_view(props.records("links"))}</ul></nav>
                </header>
            }
            .into_any(),
            TemplateKind::Sidebar => view! {
                <aside
                    class="tpl-sidebar"
                    style=format!("background: {}; color: {};", props.text("background_color"), props.text("text_color"))
                >
                    <h3>{props.text("title")}</h3>
                    <ul>{links_view(props.records("items"))}</ul>
                </aside>
            }
            .into_any(),
            TemplateKind::Footer => {
                let sections = group_sections(&props.records("links"));
                view! {
                    <footer
                        class="tpl-footer"
                        style=format!("background: {}; color: {};", props.text("background_color"), props.text("text_color"))
                    >
                        <div class="tpl-footer-about">
                            <h3>{props.text("title")}</h3>
                            <p>{props.text("description")}</p>
                        </div>
                        {sections
                            .into_iter()
                            .map(|(section, links)| {
                                view! {
                                    <div class="tpl-footer-section">
                                        <h4>{section}</h4>
                                        <ul>
                                            {links
                                                .into_iter()
                                                .map(|(label, url)| view! { <li><a href=url>{label}</a></li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <p class="tpl-copyright">{props.text("copyright")}</p>
                    </footer>
                }
                .into_any()
            }
            TemplateKind::Calendar => {
                let today = Utc::now().date_naive();
                let highlighted = props.list("highlighted_dates");
                let primary = props.text("primary_color");
                let secondary = props.text("secondary_color");
                let cells = month_cells(today.year(), today.month());
                view! {
                    <div class="tpl-calendar">
                        <h4 style=format!("color: {};", primary)>{today.format("%B %Y").to_string()}</h4>
                        <div class="tpl-calendar-grid">
                            {["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
                                .into_iter()
                                .map(|day| view! { <span class="weekday">{day}</span> })
                                .collect_view()}
                            {cells
                                .into_iter()
                                .map(|cell| match cell {
                                    Some(day) => {
                                        let date = format!("{}-{:02}-{:02}", today.year(), today.month(), day);
                                        let style = if highlighted.contains(&date) {
                                            format!("background: {};", secondary)
                                        } else {
                                            String::new()
                                        };
                                        view! { <span class="day" style=style>{day}</span> }.into_any()
                                    }
                                    None => view! { <span class="day blank"></span> }.into_any(),
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any()
            }
            TemplateKind::Main => {
                let image = props.flag("show_image").then(|| props.text("image_url"));
                let tags = if props.flag("show_tags") { props.list("tags") } else { Vec::new() };
                let primary = props.text("primary_color");
                let secondary = props.text("secondary_color");
                view! {
                    <article class="tpl-article-card">
                        {image.map(|src| view! { <img src=src alt="" /> })}
                        <h3 style=format!("color: {};", primary)>{props.text("title")}</h3>
                        <p class="tpl-meta">{props.text("date")} " · " {props.text("author")}</p>
                        <p>{truncate(&props.text("excerpt"), props.number("excerpt_length"))}</p>
                        <div class="tag-chips">
                            {tags
                                .into_iter()
                                .map(|tag| {
                                    let style = format!("background: {};", secondary);
                                    view! { <span class="tag-chip" style=style>{tag}</span> }
                                })
                                .collect_view()}
                        </div>
                    </article>
                }
                .into_any()
            }
        }
    };

    view! { <div class=format!("template-preview tpl-{}", kind.as_str())>{body}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_cells_start_on_weekday() {
        // 2024-02-01 was a Thursday; leap year
        let cells = month_cells(2024, 2);
        assert_eq!(cells.iter().take_while(|c| c.is_none()).count(), 4);
        assert_eq!(cells.last(), Some(&Some(29)));

        let december = month_cells(2023, 12);
        assert_eq!(december.last(), Some(&Some(31)));
    }

    #[test]
    fn test_sections_keep_order() {
        let row = |section: &str, label: &str| {
            vec![
                ("section".to_string(), section.to_string()),
                ("label".to_string(), label.to_string()),
                ("url".to_string(), "/".to_string()),
            ]
        };
        let rows = vec![row("Links", "Home"), row("Categories", "Tech"), row("Links", "About")];
        let sections = group_sections(&rows);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].0, "Links");
        assert_eq!(sections[0].1.len(), 2);
        assert_eq!(sections[1].1[0].0, "Tech");
    }

    #[test]
    fn test_truncate_excerpt() {
        assert_eq!(truncate("abcdef", Some(3.0)), "abc…");
        assert_eq!(truncate("abc", Some(3.0)), "abc");
        assert_eq!(truncate("abc", None), "abc");
    }
}
