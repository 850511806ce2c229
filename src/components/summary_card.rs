//! Dashboard card showing a count for one portal section.

use leptos::prelude::*;

use super::icon::{Icon, IconKind};

#[component]
pub fn SummaryCard(kind: IconKind, count: u32, caption: &'static str) -> impl IntoView {
    view! {
        <div class="summary-card">
            <Icon kind=kind/>
            <span class="summary-card__title">{kind.label()}</span>
            <span class="summary-card__count">{count}</span>
            <span class="summary-card__caption">{caption}</span>
        </div>
    }
}
