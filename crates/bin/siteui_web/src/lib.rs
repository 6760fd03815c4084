//! # siteui-web — browser entry point
//!
//! Composition root that wires the browser adapter to the application
//! services once the document is ready.
//!
//! ## Responsibilities
//! - Install the panic hook and the console `tracing` subscriber
//! - Load configuration from the page
//! - Probe storage and media-query capabilities
//! - Construct each service with the elements it drives, skipping any
//!   component whose markup is absent from the page
//! - Attach event listeners and keep them alive for the page lifetime
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no decision logic belongs here.

pub mod config;
mod logging;

use std::cell::RefCell;
use std::rc::Rc;

use siteui_adapter_web::accordion::DomAccordionList;
use siteui_adapter_web::cards::DomCardGrid;
use siteui_adapter_web::dom;
use siteui_adapter_web::footer::DomTextSlot;
use siteui_adapter_web::nav::{DomNav, DomNavLinks};
use siteui_adapter_web::theme::DomThemeSurface;
use siteui_adapter_web::{BrowserStorage, EventListener, MediaQuery, Mount, Subscription};
use siteui_app::services::accordion::AccordionController;
use siteui_app::services::active_link::ActiveLinkHighlighter;
use siteui_app::services::card_equalizer::CardEqualizer;
use siteui_app::services::footer::stamp_footer_year;
use siteui_app::services::nav_controller::NavController;
use siteui_app::services::theme_service::ThemeService;
use siteui_domain::error::DomError;
use siteui_domain::nav::{Key, NavEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, KeyboardEvent, StorageEvent, Window};

use crate::config::Config;

const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

thread_local! {
    static MOUNT: RefCell<Mount> = RefCell::new(Mount::new());
}

/// Module entry point, run by the generated JS glue when the module loads.
///
/// # Errors
///
/// Fails only when there is no `window` or `document` (not a browser page).
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let (config, config_error) = match Config::load(&document) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    logging::init(&config.logging.filter);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "invalid siteui config, using defaults");
    }

    let boot_document = document.clone();
    match dom::on_dom_ready(&document, move || boot(&window, &boot_document, &config)) {
        Ok(Some(pending)) => MOUNT.with_borrow_mut(|mount| mount.keep(pending)),
        Ok(None) => {}
        Err(err) => tracing::error!(error = %err, "cannot wait for DOMContentLoaded"),
    }
    Ok(())
}

fn boot(window: &Window, document: &Document, config: &Config) {
    let mut mount = Mount::new();

    install_theme(window, document, config, &mut mount);
    install_nav(window, document, config, &mut mount);
    highlight_links(window, document, config);
    install_cards(window, document, config, &mut mount);
    install_accordions(document, config, &mut mount);
    stamp_year(document, config);

    if mount.is_empty() {
        tracing::info!("no enhanced components on this page");
    } else {
        tracing::info!(listeners = mount.len(), "siteui mounted");
    }
    MOUNT.with_borrow_mut(|global| global.merge(mount));
}

fn install_theme(window: &Window, document: &Document, config: &Config, mount: &mut Mount) {
    let surface = match DomThemeSurface::find(document, &config.theme) {
        Ok(surface) => Rc::new(surface),
        Err(err) => return skip("theme", &err),
    };
    let prefers_dark = Rc::new(MediaQuery::probe(window, PREFERS_DARK));
    let store = Rc::new(BrowserStorage::probe(window));
    let service = Rc::new(ThemeService::with_key(
        store,
        prefers_dark.clone(),
        surface.clone(),
        config.theme.storage_key.clone(),
    ));
    service.init();

    if let Some(toggle) = surface.toggle() {
        let service = service.clone();
        mount.keep_or_log(EventListener::new(
            toggle.element().as_ref(),
            "click",
            move |_| {
                service.toggle();
            },
        ));
    }

    let on_os_change = service.clone();
    keep_change(
        mount,
        prefers_dark.on_change(move || {
            on_os_change.on_color_scheme_changed();
        }),
    );

    mount.keep_or_log(EventListener::new(window.as_ref(), "storage", move |event| {
        let key = event.dyn_ref::<StorageEvent>().map(StorageEvent::key);
        if let Some(key) = key {
            service.on_store_changed(key.as_deref());
        }
    }));
}

fn install_nav(window: &Window, document: &Document, config: &Config, mount: &mut Mount) {
    let nav = match DomNav::find(document, &config.nav) {
        Ok(nav) => Rc::new(nav),
        Err(err) => return skip("navigation", &err),
    };
    let wide = Rc::new(MediaQuery::probe(
        window,
        &config.breakpoints.nav.media_query(),
    ));
    let controller = Rc::new(NavController::new(nav.clone(), wide.clone()));
    controller.load();

    let on_click = controller.clone();
    mount.keep_or_log(EventListener::new(document.as_ref(), "click", move |event| {
        on_click.handle(NavEvent::Click(nav.classify_click(&event)));
    }));

    let on_key = controller.clone();
    mount.keep_or_log(EventListener::new(
        document.as_ref(),
        "keydown",
        move |event| {
            let key = event
                .dyn_ref::<KeyboardEvent>()
                .map_or(Key::Other, |event| Key::from_dom(&event.key()));
            on_key.handle(NavEvent::Key(key));
        },
    ));

    keep_change(
        mount,
        wide.on_change(move || {
            controller.viewport_changed();
        }),
    );
}

fn highlight_links(window: &Window, document: &Document, config: &Config) {
    let links = match DomNavLinks::find(document, &config.nav) {
        Ok(links) => links,
        Err(err) => return skip("active links", &err),
    };
    let path = window.location().pathname().unwrap_or_default();
    ActiveLinkHighlighter::new(&path).highlight(&links);
}

fn install_cards(window: &Window, document: &Document, config: &Config, mount: &mut Mount) {
    let grids = match DomCardGrid::find_all(document, &config.cards) {
        Ok(grids) if grids.is_empty() => return,
        Ok(grids) => grids,
        Err(err) => return skip("card equalizer", &err),
    };
    let wide = Rc::new(MediaQuery::probe(
        window,
        &config.breakpoints.cards.media_query(),
    ));
    let equalizer = CardEqualizer::new(wide.clone());
    let rerun = Rc::new(move || equalizer.equalize_all(grids.as_slice()));
    rerun();

    let on_resize = rerun.clone();
    mount.keep_or_log(EventListener::new(window.as_ref(), "resize", move |_| {
        on_resize();
    }));

    let on_breakpoint = rerun.clone();
    keep_change(mount, wide.on_change(move || on_breakpoint()));

    if !dom::when_fonts_ready(document, move || rerun()) {
        tracing::debug!("document.fonts unsupported, skipping font-ready pass");
    }
}

fn install_accordions(document: &Document, config: &Config, mount: &mut Mount) {
    let lists = match DomAccordionList::find_all(document, &config.accordion) {
        Ok(lists) => lists,
        Err(err) => return skip("accordion", &err),
    };
    for list in lists {
        let list = Rc::new(list);
        for (index, item) in list.items().iter().enumerate() {
            let list = list.clone();
            mount.keep_or_log(EventListener::new(item.as_ref(), "toggle", move |_| {
                AccordionController.on_toggled(list.as_ref(), index);
            }));
        }
    }
}

fn stamp_year(document: &Document, config: &Config) {
    match DomTextSlot::find(document, &config.footer.year_id) {
        Ok(slot) => {
            stamp_footer_year(&slot, siteui_domain::time::now());
        }
        Err(err) => skip("footer year", &err),
    }
}

fn keep_change(mount: &mut Mount, result: Result<Option<Subscription>, DomError>) {
    match result {
        Ok(Some(subscription)) => mount.keep(subscription),
        Ok(None) => tracing::debug!("media query change notifications unsupported"),
        Err(err) => tracing::warn!(error = %err, "media query listener not installed"),
    }
}

fn skip(component: &str, err: &DomError) {
    tracing::debug!(component, error = %err, "component not on this page");
}
