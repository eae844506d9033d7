//! Property Editor Component
//!
//! One input per property, chosen by the value's kind. Every edit hands a
//! new property set to `on_change`.

use leptos::prelude::*;

use crate::layout_editor::props::{label, PropValue, Props};

/// Rows are rebuilt only when a property's kind or entry count changes
fn shape(key: &str, value: &PropValue) -> (String, &'static str, usize) {
    let kind = match value {
        PropValue::Text(_) => "text",
        PropValue::Color(_) => "color",
        PropValue::Number(_) => "number",
        PropValue::Flag(_) => "flag",
        PropValue::TextList(_) => "text_list",
        PropValue::RecordList { .. } => "record_list",
    };
    (key.to_string(), kind, value.len().unwrap_or(0))
}

#[component]
pub fn PropertyEditor(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] props: Signal<Props>,
    #[prop(into)] on_change: Callback<Props>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let rows = move || {
        props.with(|p| {
            p.0.iter()
                .map(|(key, value)| (shape(key, value), value.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="property-editor">
            <div class="property-editor-header">
                <h3>{move || title.get()}</h3>
                <button type="button" class="reset-btn" on:click=move |_| on_reset.run(())>"Reset"</button>
            </div>
            <For
                each=rows
                key=|(shape, _)| shape.clone()
                children=move |((key, _, _), value)| view! {
                    <PropField prop_key=key initial=value props=props on_change=on_change />
                }
            />
        </div>
    }
}

#[component]
fn PropField(prop_key: String, initial: PropValue, props: Signal<Props>, on_change: Callback<Props>) -> impl IntoView {
    let key = StoredValue::new(prop_key);
    let title = label(&key.get_value());
    let edit = move |f: &dyn Fn(&Props, &str) -> Props| {
        let next = key.with_value(|key| props.with_untracked(|p| f(p, key.as_str())));
        on_change.run(next);
    };
    let text = move || key.with_value(|key| props.with(|p| p.text(key)));

    let input = match initial {
        PropValue::Text(_) => view! {
            <input
                type="text"
                prop:value=text
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit(&|p, key| p.with_value(key, PropValue::Text(value.clone())));
                }
            />
        }
        .into_any(),
        PropValue::Color(_) => view! {
            <input
                type="color"
                prop:value=text
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit(&|p, key| p.with_value(key, PropValue::Color(value.clone())));
                }
            />
        }
        .into_any(),
        PropValue::Number(_) => view! {
            <input
                type="number"
                prop:value=text
                on:input=move |ev| {
                    if let Ok(number) = event_target_value(&ev).trim().parse::<f64>() {
                        edit(&|p, key| p.with_value(key, PropValue::Number(number)));
                    }
                }
            />
        }
        .into_any(),
        PropValue::Flag(_) => view! {
            <input
                type="checkbox"
                prop:checked=move || key.with_value(|key| props.with(|p| p.flag(key)))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    edit(&|p, key| p.with_value(key, PropValue::Flag(checked)));
                }
            />
        }
        .into_any(),
        PropValue::TextList(items) => view! {
            <div class="prop-list">
                {(0..items.len())
                    .map(|index| {
                        view! {
                            <div class="prop-list-entry">
                                <input
                                    type="text"
                                    prop:value=move || {
                                        key.with_value(|key| props.with(|p| p.list(key).get(index).cloned().unwrap_or_default()))
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        edit(&|p, key| p.with_list_entry(key, index, &value));
                                    }
                                />
                                <button type="button" class="remove-btn" on:click=move |_| edit(&|p, key| p.with_entry_removed(key, index))>
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
                <button type="button" class="add-btn" on:click=move |_| edit(&|p, key| p.with_entry_added(key))>"Add"</button>
            </div>
        }
        .into_any(),
        PropValue::RecordList { columns, rows } => view! {
            <div class="prop-records">
                {(0..rows.len())
                    .map(|row| {
                        let cells = columns
                            .iter()
                            .cloned()
                            .map(|column| {
                                let placeholder = label(&column);
                                let column = StoredValue::new(column);
                                view! {
                                    <input
                                        type="text"
                                        placeholder=placeholder
                                        prop:value=move || {
                                            key.with_value(|key| {
                                                props.with(|p| {
                                                    column.with_value(|column| {
                                                        p.records(key)
                                                            .get(row)
                                                            .and_then(|cells| cells.iter().find(|(c, _)| c == column).map(|(_, v)| v.clone()))
                                                            .unwrap_or_default()
                                                    })
                                                })
                                            })
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            column.with_value(|column| {
                                                edit(&|p, key| p.with_record_field(key, row, column, &value));
                                            });
                                        }
                                    />
                                }
                            })
                            .collect_view();
                        view! {
                            <div class="prop-record">
                                {cells}
                                <button type="button" class="remove-btn" on:click=move |_| edit(&|p, key| p.with_entry_removed(key, row))>
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
                <button type="button" class="add-btn" on:click=move |_| edit(&|p, key| p.with_entry_added(key))>"Add"</button>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="prop-field">
            <label>{title}</label>
            {input}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_tracks_kind_and_length() {
        let short = PropValue::text_list(&["a"]);
        let long = PropValue::text_list(&["a", "b"]);
        assert_ne!(shape("tags", &short), shape("tags", &long));
        assert_eq!(shape("title", &PropValue::text("x")), shape("title", &PropValue::text("y")));
        assert_ne!(shape("v", &PropValue::text("x")), shape("v", &PropValue::color("x")));
    }
}
