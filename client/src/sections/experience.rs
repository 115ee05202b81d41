//! Experience cards: an always-visible summary plus a details block that
//! the reveal animator shows once the card scrolls into view.

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

use leptos::prelude::*;

use super::Card;
use crate::content::ExperienceRecord;

#[component]
pub fn ExperienceCard(record: ExperienceRecord) -> impl IntoView {
    let ExperienceRecord { period, title, company, location, description } = record;
    view! {
        <div class="experience-item">
            <div class="experience-summary">
                <div class="experience-period">{period}</div>
                <h3 class="experience-title">{title}</h3>
                <div class="experience-company-details">
                    <div class="experience-company">{company}</div>
                    <div class="experience-location">{location}</div>
                </div>
            </div>
            <div class="experience-details">
                <p class="experience-description">{description}</p>
            </div>
        </div>
    }
}

impl Card for ExperienceRecord {
    const GRID: &'static str = ".experience-grid";

    fn card(self) -> impl IntoView + 'static {
        view! { <ExperienceCard record=self /> }
    }
}
