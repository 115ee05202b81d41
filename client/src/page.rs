//! Static page shell: every id and class the page core looks up.
//!
//! SYSTEM CONTEXT
//! ==============
//! The exporter renders `PageDocument` to `index.html` through leptos SSR;
//! tests load the same render into a `MemoryDom` so controllers run against
//! the structure the browser sees. Section grids start empty and are filled
//! at page-ready.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::config::SiteConfig;

pub const THEME_TOGGLES: &str = "#theme-toggle, #mobile-theme-toggle";
pub const MENU_TRIGGER: &str = ".hamburger-menu";
pub const MENU_OVERLAY: &str = ".mobile-menu";
pub const MENU_LINKS: &str = "a";
pub const CONTACT_FORM: &str = "#contact-form";
pub const CONTACT_NAME: &str = "#name";
pub const CONTACT_EMAIL: &str = "#email";
pub const CONTACT_MESSAGE: &str = "#message";

/// Module script that loads the wasm-bindgen output.
pub const LOADER_SCRIPT: &str = "loader.js";
pub const LOADER_SOURCE: &str = "import init from './pkg/client.js';\nawait init();\n";

/// Navigation anchors: (section id, label).
pub const SECTIONS: &[(&str, &str)] = &[
    ("about", "ABOUT"),
    ("education", "ALMA MATER"),
    ("experience", "EXPERIENCE"),
    ("projects", "PROJECTS"),
    ("skills", "SKILLS"),
    ("contact", "CONTACT"),
];

#[component]
fn NavLinks() -> impl IntoView {
    SECTIONS
        .iter()
        .map(|(id, label)| view! { <a href=format!("#{id}")>{*label}</a> })
        .collect_view()
}

#[component]
fn ThemeToggle(id: &'static str) -> impl IntoView {
    view! {
        <button
            id=id
            class="theme-toggle pixel-button"
            type="button"
            aria-label="Toggle dark mode"
            aria-pressed="false"
        >
            "◐"
        </button>
    }
}

#[component]
fn SiteHeader(owner: String) -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="logo" href="#top">{owner}</a>
            <nav class="desktop-nav">
                <NavLinks />
            </nav>
            <ThemeToggle id="theme-toggle" />
            <button
                class="hamburger-menu"
                type="button"
                aria-label="Open menu"
                aria-controls="mobile-menu"
                aria-expanded="false"
            >
                {(0..3).map(|_| view! { <span class="hamburger-line"></span> }).collect_view()}
            </button>
        </header>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    view! {
        <nav id="mobile-menu" class="mobile-menu" aria-hidden="true">
            <NavLinks />
            <ThemeToggle id="mobile-theme-toggle" />
        </nav>
    }
}

#[component]
fn Section(id: &'static str, heading: &'static str, grid: &'static str) -> impl IntoView {
    view! {
        <section id=id class="section">
            <h2 class="section-title">{heading}</h2>
            <div class=grid></div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <h2 class="section-title">"CONTACT"</h2>
            <form id="contact-form" class="contact-form">
                <div class="form-group">
                    <label for="name">"NAME"</label>
                    <input id="name" name="name" type="text" required=true />
                </div>
                <div class="form-group">
                    <label for="email">"EMAIL"</label>
                    <input id="email" name="email" type="email" required=true />
                </div>
                <div class="form-group">
                    <label for="message">"MESSAGE"</label>
                    <textarea id="message" name="message" rows="5" required=true></textarea>
                </div>
                <button class="pixel-button" type="submit">"SEND MESSAGE"</button>
            </form>
        </section>
    }
}

/// `<body>` content.
#[component]
pub fn PageBody(site: SiteConfig) -> impl IntoView {
    let footer = format!("© {}", site.owner);
    view! {
        <body id="top">
            <SiteHeader owner=site.owner />
            <MobileMenu />
            <main>
                <Section id="about" heading="ABOUT" grid="stats-grid" />
                <Section id="education" heading="ALMA MATER" grid="education-grid" />
                <Section id="experience" heading="EXPERIENCE" grid="experience-grid" />
                <Section id="projects" heading="PROJECTS" grid="projects-grid" />
                <Section id="skills" heading="SKILLS" grid="skills-grid" />
                <ContactSection />
            </main>
            <footer class="site-footer">{footer}</footer>
        </body>
    }
}

/// The whole `<html>` document.
#[component]
pub fn PageDocument(site: SiteConfig) -> impl IntoView {
    let title = site.title.clone();
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="stylesheet" href="style.css" />
                <script type="module" src=LOADER_SCRIPT></script>
            </head>
            <PageBody site=site />
        </html>
    }
}

/// Server-rendered document with doctype.
pub fn to_html(site: &SiteConfig) -> String {
    let site = site.clone();
    format!("<!DOCTYPE html>\n{}\n", view! { <PageDocument site=site /> }.to_html())
}
