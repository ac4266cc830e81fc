//! Hero stat tile.

use leptos::prelude::*;

use crate::content::catalog::StatTile;

#[component]
pub fn Stat(stat: &'static StatTile) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat__value">{stat.value}</div>
            <div class="stat__label">{stat.label}</div>
        </div>
    }
}
