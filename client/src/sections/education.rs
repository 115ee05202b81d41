//! Alma mater cards.

#[cfg(test)]
#[path = "education_test.rs"]
mod education_test;

use leptos::prelude::*;

use super::Card;
use crate::content::EducationRecord;

#[component]
pub fn EducationCard(record: EducationRecord) -> impl IntoView {
    let EducationRecord { period, degree, school, location, description } = record;
    view! {
        <div class="education-item">
            <div class="education-period">{period}</div>
            <h3 class="education-degree">{degree}</h3>
            <div class="education-school">{school}</div>
            <div class="education-location">{location}</div>
            <p class="education-description">{description}</p>
        </div>
    }
}

impl Card for EducationRecord {
    const GRID: &'static str = ".education-grid";

    fn card(self) -> impl IntoView + 'static {
        view! { <EducationCard record=self /> }
    }
}
