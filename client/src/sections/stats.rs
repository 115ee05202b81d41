//! Headline stat cards.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use leptos::prelude::*;

use super::Card;
use crate::content::StatRecord;

#[component]
pub fn StatCard(record: StatRecord) -> impl IntoView {
    view! {
        <div class="stat-item">
            <div class="stat-value">{record.value.to_string()}</div>
            <div class="stat-label">{record.label}</div>
        </div>
    }
}

impl Card for StatRecord {
    const GRID: &'static str = ".stats-grid";

    fn card(self) -> impl IntoView + 'static {
        view! { <StatCard record=self /> }
    }
}
