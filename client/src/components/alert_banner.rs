//! Dismissible outcome banners and the container they stack in.

#[cfg(test)]
#[path = "alert_banner_test.rs"]
mod alert_banner_test;

use leptos::prelude::*;

use crate::state::alerts::{Alert, AlertKind, AlertStack};

fn banner_class(kind: AlertKind) -> String {
    format!("alert {} alert-dismissible fade-in", kind.css_class())
}

/// Render key of a banner. Keyed rendering keeps existing banners' nodes in
/// place, so only a newly prepended banner is built (and fades in).
fn alert_key(alert: &Alert) -> u64 {
    alert.id
}

/// One banner with a close control that removes only itself.
#[component]
pub fn AlertBanner(alert: Alert, on_dismiss: Callback<u64>) -> impl IntoView {
    let Alert { id, kind, body } = alert;
    view! {
        <div class=banner_class(kind) role="alert">
            <button
                type="button"
                class="close"
                aria-label="Close"
                on:click=move |_| on_dismiss.run(id)
            >
                "×"
            </button>
            {body}
        </div>
    }
}

/// Alert insertion point (`.well.well-form`). Banners render above the
/// wrapped content, newest first.
#[component]
pub fn AlertContainer(alerts: RwSignal<AlertStack>, children: Children) -> impl IntoView {
    let on_dismiss = Callback::new(move |id: u64| {
        alerts.update(|stack| {
            stack.dismiss(id);
        });
    });

    view! {
        <div class="well well-form">
            <For
                each=move || alerts.with(|stack| stack.alerts().to_vec())
                key=alert_key
                children=move |alert: Alert| view! { <AlertBanner alert=alert on_dismiss=on_dismiss/> }
            />
            {children()}
        </div>
    }
}
