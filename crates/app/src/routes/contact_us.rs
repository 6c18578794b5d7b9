use crate::auth::use_api;
use crate::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, EmptyState, ErrorCard, PageHeader, PageTitle, SearchBar, Select, Sheet, Skeleton,
    TextArea,
};
use crate::stores::{load_into, use_stores};
use crate::toast::use_toasts;
use client::analytics::contact_counts;
use client::filters::{filter_contacts, ContactSort, ContactTab};
use dioxus::prelude::*;
use shared_types::{personalize_reply, ContactMessage, ContactReplyRequest, REPLY_TEMPLATES};

/// Messages from the public contact form, with replies.
#[component]
pub fn ContactUs() -> Element {
    let stores = use_stores();
    let api = use_api();
    let search = use_signal(String::new);
    let mut tab = use_signal(ContactTab::default);
    let mut sort = use_signal(ContactSort::default);
    let mut selected = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let reload = move || {
        let api = load_api.clone();
        spawn(async move { load_into(stores.contacts, api.list_contacts()).await });
    };
    let reload_once = reload.clone();
    use_hook(move || reload_once());

    let store = stores.contacts.read();
    let rows = filter_contacts(store.items(), &search(), tab(), sort());
    let counts = contact_counts(store.items());
    let loading = store.is_loading() && !store.is_loaded();
    let load_error = store.error().map(|e| e.user_message());
    drop(store);

    let tabs = ContactTab::ALL.map(|t| {
        let n = match t {
            ContactTab::All => counts.total,
            ContactTab::New => counts.new,
            ContactTab::Responded => counts.responded,
        };
        (t, format!("{} ({n})", t.label()))
    });
    let sort_options: Vec<(String, String)> = vec![
        (ContactSort::Newest.as_str().to_string(), "Newest first".to_string()),
        (ContactSort::Oldest.as_str().to_string(), "Oldest first".to_string()),
        (ContactSort::Alphabetical.as_str().to_string(), "By name".to_string()),
    ];

    rsx! {
        PageHeader {
            PageTitle { "Contact Messages" }
        }

        div { class: "toolbar",
            div { class: "tabs",
                for (t, label) in tabs {
                    button {
                        key: "{label}",
                        class: if t == tab() { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(t),
                        "{label}"
                    }
                }
            }
            SearchBar { value: search, placeholder: "Search name, email, subject or message" }
            Select {
                value: sort().as_str().to_string(),
                options: sort_options,
                on_change: move |e: FormEvent| {
                    if let Some(s) = ContactSort::from_str_opt(&e.value()) {
                        sort.set(s);
                    }
                },
            }
        }

        if let Some(message) = load_error {
            ErrorCard { message, on_retry: move |_| reload() }
        } else if loading {
            Skeleton { rows: 4 }
        } else if rows.is_empty() {
            EmptyState { message: "No messages" }
        } else {
            div { class: "contact-list",
                for msg in rows {
                    ContactRow {
                        key: "{msg.id}",
                        message: msg.clone(),
                        on_open: move |id| selected.set(Some(id)),
                    }
                }
            }
        }

        if let Some(id) = selected() {
            ContactDetail { key: "{id}", id: id.clone(), on_close: move |_| selected.set(None) }
        }
    }
}

#[component]
fn ContactRow(message: ContactMessage, on_open: EventHandler<String>) -> Element {
    let id = message.id.clone();
    rsx! {
        div {
            class: "contact-row",
            onclick: move |_| on_open.call(id.clone()),
            div { class: "contact-row-head",
                strong { "{message.name}" }
                span { class: "muted", "{message.email}" }
                if message.reply_sent {
                    Badge { variant: BadgeVariant::Success, "Responded" }
                } else {
                    Badge { variant: BadgeVariant::Primary, "New" }
                }
            }
            div { class: "contact-row-subject", "{message.subject}" }
        }
    }
}

/// Full message plus the reply form. The message is refreshed from the API
/// when the panel opens.
#[component]
fn ContactDetail(id: String, on_close: EventHandler<()>) -> Element {
    let stores = use_stores();
    let api = use_api();
    let toasts = use_toasts();
    let mut reply = use_signal(String::new);
    let mut reply_error = use_signal(|| Option::<String>::None);
    let mut sending = use_signal(|| false);

    let fetch_api = api.clone();
    let fetch_id = id.clone();
    use_hook(move || {
        let mut contacts = stores.contacts;
        spawn(async move {
            match fetch_api.get_contact(&fetch_id).await {
                Ok(message) => contacts.write().upsert(message),
                Err(err) => tracing::warn!(error = %err, "Could not refresh contact message"),
            }
        });
    });

    let Some(message) = stores.contacts.read().get(&id).cloned() else {
        return rsx! {};
    };

    let name = message.name.clone();
    let send_id = id.clone();
    let handle_send = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let id = send_id.clone();
        let mut contacts = stores.contacts;
        spawn(async move {
            reply_error.set(None);
            sending.set(true);
            let req = ContactReplyRequest { reply: reply() };
            match api.send_contact_reply(&id, &req).await {
                Ok(()) => {
                    contacts.write().mark_replied(&id);
                    reply.set(String::new());
                    toasts.success("Reply sent");
                }
                Err(err) if err.is_validation() => {
                    reply_error.set(err.field_errors.get("reply").cloned());
                }
                Err(err) => toasts.app_error(&err),
            }
            sending.set(false);
        });
    };

    rsx! {
        Sheet { open: true, title: "{message.subject}", on_close: move |_| on_close.call(()),
            Card {
                CardHeader {
                    CardTitle { "{message.name}" }
                    CardDescription { "{message.email}" }
                }
                CardContent {
                    p { class: "contact-body", "{message.message}" }
                }
            }

            div { class: "template-list",
                for (label, body) in REPLY_TEMPLATES {
                    Button {
                        key: "{label}",
                        variant: ButtonVariant::Outline,
                        onclick: {
                            let name = name.clone();
                            move |_| reply.set(personalize_reply(&name, body))
                        },
                        "{label}"
                    }
                }
            }

            form { class: "sheet-form", onsubmit: handle_send,
                TextArea {
                    label: "Reply",
                    rows: 8,
                    value: reply(),
                    on_input: move |e: FormEvent| reply.set(e.value()),
                    error: reply_error(),
                }
                div { class: "sheet-footer",
                    if message.reply_sent {
                        span { class: "muted", "A reply has already been sent." }
                    }
                    Button { button_type: "submit", disabled: sending(), "Send reply" }
                }
            }
        }
    }
}
