//! Page-ready bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mount` builds the page in a fixed order (theme, mobile menu, education,
//! experience, projects, skills, stats, contact form, reveal) and returns
//! the live controllers. It does no event wiring; `browser::start` forwards
//! DOM events into the returned controllers, and tests drive them directly.


#[cfg(feature = "hydrate")]
pub mod browser;

use crate::components::contact_form::ContactForm;
use crate::components::mobile_menu::NavigationController;
use crate::components::reveal::RevealAnimator;
use crate::components::theme_toggle::ThemeController;
use crate::content::Portfolio;
use crate::dom::Dom;
use crate::sections::{self, skills};
use crate::util::preference::PreferenceStore;
use crate::util::schedule::Scheduler;

/// Cards mounted per section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderCounts {
    pub education: usize,
    pub experience: usize,
    pub projects: usize,
    pub skills: usize,
    pub stats: usize,
}

/// Controllers alive after page-ready. Absent features are `None`.
pub struct Mounted<D: Dom, S: PreferenceStore> {
    pub theme: ThemeController<D, S>,
    pub menu: Option<NavigationController<D>>,
    pub contact: Option<ContactForm<D>>,
    pub reveal: RevealAnimator<D>,
    pub rendered: RenderCounts,
}

pub fn mount<D, S, T>(dom: D, store: S, scheduler: &T, portfolio: &Portfolio) -> Mounted<D, S>
where
    D: Dom,
    S: PreferenceStore,
    T: Scheduler,
{
    let site = &portfolio.site;

    let theme = ThemeController::initialize(dom.clone(), store, &site.theme_storage_key);
    let menu = NavigationController::attach(dom.clone());

    let rendered = RenderCounts {
        education: sections::render(&dom, &portfolio.education).len(),
        experience: sections::render(&dom, &portfolio.experiences).len(),
        projects: sections::render(&dom, &portfolio.projects).len(),
        skills: skills::render_animated(&dom, scheduler, &portfolio.skills, site.skill_bar_delay_ms).len(),
        stats: sections::render(&dom, &portfolio.stats).len(),
    };

    let contact = ContactForm::attach(dom.clone(), &site.contact_address);
    let reveal = RevealAnimator::observe(dom, site.reveal_threshold());

    log::info!("page mounted: {rendered:?}");
    Mounted { theme, menu, contact, reveal, rendered }
}
