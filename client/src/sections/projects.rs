//! Project cards.
//!
//! Optional fragments (tech stack, tags, link) appear only when their
//! source field resolves to something non-empty; the footer wrapper only
//! exists when it would hold tags or a link.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use super::Card;
use crate::content::ProjectRecord;

pub const LINK_LABEL: &str = "VIEW PROJECT";

#[component]
fn ProjectFooter(tags: Option<String>, link: Option<String>) -> impl IntoView {
    view! {
        <div class="project-footer">
            {tags.map(|line| view! { <span class="project-tags">{line}</span> })}
            {link.map(|href| {
                view! {
                    <a class="pixel-button sm" href=href target="_blank" rel="noopener noreferrer">
                        {LINK_LABEL}
                    </a>
                }
            })}
        </div>
    }
}

#[component]
pub fn ProjectCard(record: ProjectRecord) -> impl IntoView {
    let summary = record.summary().to_owned();
    let tech = record.tech_line();
    let tags = record.tag_line();
    let link = record.link().map(str::to_owned);
    let footer = (tags.is_some() || link.is_some()).then(|| view! { <ProjectFooter tags=tags link=link /> });

    view! {
        <div class="pixel-card project-item">
            <div class="project-summary">
                <h3 class="project-title">{record.title}</h3>
            </div>
            <div class="project-details-wrapper">
                <p class="project-description">{summary}</p>
                {tech.map(|line| view! { <div class="project-tech-stack">{line}</div> })}
            </div>
            {footer}
        </div>
    }
}

impl Card for ProjectRecord {
    const GRID: &'static str = ".projects-grid";

    fn card(self) -> impl IntoView + 'static {
        view! { <ProjectCard record=self /> }
    }
}
