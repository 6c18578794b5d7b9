use crate::auth::use_api;
use crate::components::{
    Badge, BadgeVariant, BarRow, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    EmptyState, ErrorCard, Input, PageActions, PageHeader, PageTitle, SearchBar, Select, Sheet,
    Skeleton, StatCard, TextArea,
};
use crate::stores::{load_into, use_stores};
use crate::toast::use_toasts;
use client::analytics::FeedbackAnalytics;
use client::filters::{filter_feedback, FeedbackTab};
use dioxus::prelude::*;
use shared_types::{CreateFeedbackRequest, FeatureFlags, Feedback};
use std::collections::HashMap;

#[component]
pub fn FeedbackList() -> Element {
    let stores = use_stores();
    let api = use_api();
    let flags: FeatureFlags = use_context();
    let toasts = use_toasts();
    let search = use_signal(String::new);
    let mut tab = use_signal(FeedbackTab::default);
    let mut min_rating = use_signal(String::new);
    let mut show_sheet = use_signal(|| false);

    let load_api = api.clone();
    let reload = move || {
        let api = load_api.clone();
        spawn(async move { load_into(stores.feedback, api.list_feedback()).await });
    };
    let reload_once = reload.clone();
    use_hook(move || reload_once());

    let store = stores.feedback.read();
    let min = min_rating().parse::<u8>().ok();
    let rows = filter_feedback(store.items(), &search(), tab(), min);
    let analytics = FeedbackAnalytics::from_feedback(store.items());
    let loading = store.is_loading() && !store.is_loaded();
    let load_error = store.error().map(|e| e.user_message());
    drop(store);

    let toggle_visibility = move |(id, show): (String, bool)| {
        let api = api.clone();
        let mut feedback = stores.feedback;
        spawn(async move {
            match api.set_feedback_visibility(&id, show).await {
                Ok(()) => {
                    feedback.write().set_visibility(&id, show);
                    toasts.success(if show { "Shown on website" } else { "Hidden from website" });
                }
                Err(err) => toasts.app_error(&err),
            }
        });
    };

    let rating_options: Vec<(String, String)> = std::iter::once((String::new(), "Any rating".to_string()))
        .chain((1..=5).rev().map(|n| (n.to_string(), format!("{n}+ stars"))))
        .collect();

    rsx! {
        PageHeader {
            PageTitle { "Feedback" }
            PageActions {
                Button { onclick: move |_| show_sheet.set(true), "Add Feedback" }
            }
        }

        if flags.analytics {
            FeedbackAnalyticsPanel { analytics }
        }

        div { class: "toolbar",
            div { class: "tabs",
                for (t, label) in FeedbackTab::ALL.map(|t| (t, t.label())) {
                    button {
                        key: "{label}",
                        class: if t == tab() { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(t),
                        "{label}"
                    }
                }
            }
            SearchBar { value: search, placeholder: "Search feedback" }
            Select {
                value: min_rating(),
                options: rating_options,
                on_change: move |e: FormEvent| min_rating.set(e.value()),
            }
        }

        if let Some(message) = load_error {
            ErrorCard { message, on_retry: move |_| reload() }
        } else if loading {
            Skeleton { rows: 4 }
        } else if rows.is_empty() {
            EmptyState { message: "No feedback matches" }
        } else {
            div { class: "feedback-list",
                for item in rows {
                    FeedbackCard {
                        key: "{item.id}",
                        feedback: item.clone(),
                        on_toggle: toggle_visibility.clone(),
                    }
                }
            }
        }

        FeedbackSheet { open: show_sheet(), on_close: move |_| show_sheet.set(false) }
    }
}

#[component]
fn FeedbackCard(feedback: Feedback, on_toggle: EventHandler<(String, bool)>) -> Element {
    let stars = feedback.stars() as usize;
    let filled = "★".repeat(stars);
    let empty = "☆".repeat(5 - stars);
    let id = feedback.id.clone();
    let show = feedback.show_on_website;

    rsx! {
        Card { class: "feedback-card",
            CardHeader {
                CardTitle { "{feedback.name}" }
                span { class: "stars", "{filled}{empty}" }
                if show {
                    Badge { variant: BadgeVariant::Success, "Visible" }
                } else {
                    Badge { variant: BadgeVariant::Outline, "Hidden" }
                }
            }
            CardContent {
                p { "{feedback.comments}" }
                p { class: "muted", "{feedback.email}" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_toggle.call((id.clone(), !show)),
                    if show { "Hide from website" } else { "Show on website" }
                }
            }
        }
    }
}

#[component]
fn FeedbackAnalyticsPanel(analytics: FeedbackAnalytics) -> Element {
    let average = format!("{:.1}", analytics.average);
    let positive = format!("{}%", analytics.positive_percent());

    rsx! {
        div { class: "stats-grid",
            StatCard { label: "Reviews", value: analytics.count.to_string() }
            StatCard { label: "Average rating", value: average }
            StatCard { label: "Positive", value: analytics.positive.to_string(), hint: positive }
            StatCard { label: "Visible", value: analytics.visible.to_string() }
        }
        Card {
            CardHeader { CardTitle { "Rating distribution" } }
            CardContent {
                for star in (1..=5usize).rev() {
                    BarRow {
                        key: "{star}",
                        label: format!("{star} ★"),
                        value: format!("{} ({}%)", analytics.distribution[star - 1], analytics.percentages[star - 1]),
                        percent: analytics.percentages[star - 1],
                    }
                }
            }
        }
    }
}

#[component]
fn FeedbackSheet(open: bool, on_close: EventHandler<()>) -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();
    let mut form = use_signal(CreateFeedbackRequest::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut feedback = stores.feedback;
        spawn(async move {
            saving.set(true);
            field_errors.set(HashMap::new());
            match api.create_feedback(&form()).await {
                Ok(created) => {
                    feedback.write().upsert(created);
                    toasts.success("Feedback added");
                    form.set(CreateFeedbackRequest::default());
                    on_close.call(());
                }
                Err(err) if err.is_validation() => field_errors.set(err.field_errors.clone()),
                Err(err) => toasts.app_error(&err),
            }
            saving.set(false);
        });
    };

    let values = form();
    let errors = field_errors();
    let rating_options: Vec<(String, String)> = std::iter::once(("0".to_string(), "Select rating".to_string()))
        .chain((1..=5).map(|n| (n.to_string(), format!("{n} ★"))))
        .collect();

    rsx! {
        Sheet { open, title: "Add Feedback", on_close: move |_| on_close.call(()),
            form { class: "sheet-form", onsubmit: handle_save,
                Input {
                    label: "Name",
                    value: values.name.clone(),
                    on_input: move |e: FormEvent| form.write().name = e.value(),
                    error: errors.get("name").cloned(),
                }
                Input {
                    label: "Email",
                    input_type: "email",
                    value: values.email.clone(),
                    on_input: move |e: FormEvent| form.write().email = e.value(),
                    error: errors.get("email").cloned(),
                }
                Select {
                    label: "Rating",
                    value: values.rating.to_string(),
                    options: rating_options,
                    on_change: move |e: FormEvent| form.write().rating = e.value().parse().unwrap_or(0),
                    error: errors.get("rating").cloned(),
                }
                TextArea {
                    label: "Comments",
                    value: values.comments.clone(),
                    on_input: move |e: FormEvent| form.write().comments = e.value(),
                    error: errors.get("comments").cloned(),
                }
                label { class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: values.show_on_website,
                        onchange: move |e: FormEvent| form.write().show_on_website = e.checked(),
                    }
                    "Show on website"
                }
                div { class: "sheet-footer",
                    Button { button_type: "submit", disabled: saving(), "Save" }
                }
            }
        }
    }
}
