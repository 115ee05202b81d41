//! Browser event wiring for the mounted page.
//!
//! Controllers are shared with their listeners through `Rc<RefCell<_>>`;
//! the page is single-threaded and listeners never re-enter each other, so
//! borrows never overlap. Listener closures are leaked with `forget` since
//! they live as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    DocumentReadyState, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent,
};

use super::{Mounted, mount};
use crate::components::reveal::{ITEM_SELECTOR, IntersectionEntry, RevealAnimator};
use crate::content::Portfolio;
use crate::dom::{BrowserDom, Dom};
use crate::util::preference::LocalStorage;
use crate::util::schedule::TimeoutScheduler;

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::debug!("addEventListener({event}) failed: {err:?}");
    }
    closure.forget();
}

/// Install logging, then mount on page-ready.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger already installed: {err}");
    }

    let Some(dom) = BrowserDom::current() else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == DocumentReadyState::Loading {
        let mut pending = Some(dom);
        listen(&document, "DOMContentLoaded", move |_| {
            if let Some(dom) = pending.take() {
                ready(dom);
            }
        });
    } else {
        ready(dom);
    }
}

fn ready(dom: BrowserDom) {
    let portfolio = Portfolio::embedded().unwrap_or_else(|err| {
        log::error!("bundled content is not JSON, rendering empty sections: {err}");
        Portfolio::default()
    });
    let Mounted { theme, menu, contact, reveal, .. } = mount(dom.clone(), LocalStorage, &TimeoutScheduler, &portfolio);

    let theme = Rc::new(RefCell::new(theme));
    let controls = theme.borrow().controls().to_vec();
    for control in controls {
        let theme = Rc::clone(&theme);
        listen(&control, "click", move |_| {
            theme.borrow_mut().toggle();
        });
    }

    if let Some(menu) = menu {
        let trigger = menu.trigger().clone();
        let links = menu.links().to_vec();
        let menu = Rc::new(RefCell::new(menu));
        {
            let menu = Rc::clone(&menu);
            listen(&trigger, "click", move |_| {
                menu.borrow_mut().toggle_menu();
            });
        }
        for link in links {
            let menu = Rc::clone(&menu);
            listen(&link, "click", move |_| menu.borrow_mut().select_link());
        }
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            listen(&document, "keydown", move |event| {
                if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                    menu.borrow_mut().handle_key(&key);
                }
            });
        }
    }

    if let Some(contact) = contact {
        let form = contact.form().clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            contact.submit();
        });
    }

    observe_reveal(&dom, reveal);
}

fn observe_reveal(dom: &BrowserDom, reveal: RevealAnimator<BrowserDom>) {
    let items = dom.query_all(ITEM_SELECTOR);
    if items.is_empty() {
        return;
    }
    let threshold = reveal.threshold();
    let reveal = Rc::new(RefCell::new(reveal));

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionEntry {
                    target: entry.target(),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect::<Vec<_>>();
            for target in reveal.borrow_mut().on_intersections(&batch) {
                observer.unobserve(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&threshold.into());
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for item in &items {
                observer.observe(item);
            }
        }
        Err(err) => log::debug!("IntersectionObserver unavailable: {err:?}"),
    }
    callback.forget();
}
