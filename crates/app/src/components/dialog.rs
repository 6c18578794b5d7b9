//! Confirmation dialogs on top of `dioxus_primitives::alert_dialog`, which
//! handles focus trapping, Escape and the modal overlay.

use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

#[component]
fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-overlay", None, false));

    rsx! {
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("alert-dialog".to_string());
    }

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

#[component]
fn AlertDialogTitle(mut props: prim::AlertDialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-title", None, false));

    rsx! {
        prim::AlertDialogTitle { ..props }
    }
}

#[component]
fn AlertDialogDescription(mut props: prim::AlertDialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-description", None, false));

    rsx! {
        prim::AlertDialogDescription { ..props }
    }
}

#[component]
fn AlertDialogActions(mut props: prim::AlertDialogActionsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "alert-dialog-actions", None, false));

    rsx! {
        prim::AlertDialogActions { ..props }
    }
}

#[component]
fn AlertDialogAction(mut props: prim::AlertDialogActionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "button destructive", None, false));

    rsx! {
        prim::AlertDialogAction { ..props }
    }
}

#[component]
fn AlertDialogCancel(mut props: prim::AlertDialogCancelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "button secondary", None, false));

    rsx! {
        prim::AlertDialogCancel { ..props }
    }
}

/// Confirmation dialog for destructive actions.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            open,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    // Deferred so a confirm from the same click still sees its target.
                    spawn(async move { on_cancel.call(()) });
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "{title}" }
                AlertDialogDescription { "{message}" }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { on_click: move |_: MouseEvent| on_confirm.call(()), "Delete" }
                }
            }
        }
    }
}
