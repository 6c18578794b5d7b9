//! Small presentational building blocks shared by the pages.

use dioxus::prelude::*;

fn classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Card container.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: classes("card", &class), {children} }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] button_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    rsx! {
        button {
            class: "button {variant_class}",
            r#type: "{button_type}",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Labelled text input with an optional error line underneath.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                class: if error.is_some() { "input invalid" } else { "input" },
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(err) = error.as_ref() {
                p { class: "field-error", "{err}" }
            }
        }
    }
}

#[component]
pub fn TextArea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            textarea {
                class: "textarea",
                rows: "{rows}",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(err) = error {
                p { class: "field-error", "{err}" }
            }
        }
    }
}

/// A `<select>` over `(value, label)` pairs.
#[component]
pub fn Select(
    value: String,
    options: Vec<(String, String)>,
    #[props(default)] on_change: EventHandler<FormEvent>,
    #[props(default)] label: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            select {
                class: "select",
                disabled: disabled,
                onchange: move |evt| on_change.call(evt),
                for (opt_value, opt_label) in options {
                    option {
                        value: "{opt_value}",
                        selected: opt_value == value,
                        "{opt_label}"
                    }
                }
            }
            if let Some(err) = error {
                p { class: "field-error", "{err}" }
            }
        }
    }
}

/// Page header container; wraps a title and optional action buttons.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        div { class: "page-header", {children} }
    }
}

#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}

/// Search box bound to a signal; filtering happens as the user types.
#[component]
pub fn SearchBar(value: Signal<String>, #[props(default)] placeholder: String) -> Element {
    let mut value = value;
    rsx! {
        div { class: "search-bar",
            input {
                class: "input",
                r#type: "search",
                value: value(),
                placeholder: placeholder,
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}

#[component]
pub fn Skeleton(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "loading",
            for i in 0..rows {
                div { key: "{i}", class: "skeleton" }
            }
        }
    }
}

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge-primary",
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Outline => "badge-outline",
        }
    }
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    let variant_class = variant.class();
    rsx! {
        span { class: "badge {variant_class}", {children} }
    }
}

/// Modal panel shown over the page while `open` is true.
#[component]
pub fn Sheet(open: bool, title: String, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }
    rsx! {
        div { class: "sheet-overlay", onclick: move |_| on_close.call(()),
            div {
                class: "sheet",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "sheet-header",
                    h2 { class: "sheet-title", "{title}" }
                    button {
                        class: "sheet-close",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "sheet-body", {children} }
            }
        }
    }
}

#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        div { class: "table-wrapper",
            table { class: "data-table", {children} }
        }
    }
}

/// Header row built from column titles.
#[component]
pub fn DataTableHeader(columns: Vec<String>) -> Element {
    rsx! {
        thead {
            tr {
                for column in columns {
                    th { "{column}" }
                }
            }
        }
    }
}

/// Shown in place of a table when there is nothing to list.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        Card { class: "empty-state",
            CardContent {
                p { "{message}" }
            }
        }
    }
}

/// Number tile for the stats grids.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] hint: String) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
            if !hint.is_empty() {
                span { class: "stat-hint", "{hint}" }
            }
        }
    }
}

/// Horizontal bar used by the analytics panels; `percent` is clamped to 100.
#[component]
pub fn BarRow(label: String, value: String, percent: u32) -> Element {
    let width = percent.min(100);
    rsx! {
        div { class: "bar-row",
            span { class: "bar-label", "{label}" }
            div { class: "bar-track",
                div { class: "bar-fill", style: "width: {width}%" }
            }
            span { class: "bar-value", "{value}" }
        }
    }
}

/// Error card with a retry button.
#[component]
pub fn ErrorCard(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        Card { class: "error-card",
            CardHeader {
                CardTitle { "Error" }
                CardDescription { "{message}" }
            }
            CardContent {
                Button { onclick: move |_| on_retry.call(()), "Retry" }
            }
        }
    }
}
