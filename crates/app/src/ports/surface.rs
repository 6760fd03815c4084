//! Surface ports — the page elements each use-case drives.
//!
//! All methods take `&self`: the page is the state holder and adapters mutate
//! it through shared handles.

use siteui_domain::card::CardWidth;
use siteui_domain::nav::NavView;
use siteui_domain::theme::{ThemePreference, ToggleVisuals};

/// The root presentation attribute plus the (optional) theme toggle control.
pub trait ThemeSurface {
    /// Preference currently applied to the root element.
    fn applied_preference(&self) -> ThemePreference;

    /// Set the root attribute, or clear it for [`ThemePreference::Unset`].
    fn set_preference(&self, preference: ThemePreference);

    /// Refresh icon, text and ARIA state of the toggle control.
    /// A page without a toggle control ignores this.
    fn render_toggle(&self, visuals: &ToggleVisuals);
}

/// The mobile navigation toggle, its panel, and the page body.
pub trait NavSurface {
    fn is_open(&self) -> bool;

    fn render(&self, view: &NavView);
}

/// Anchors inside the navigation landmark.
pub trait NavLinks {
    /// Raw `href` of every anchor, in document order.
    fn hrefs(&self) -> Vec<String>;

    fn mark_active(&self, index: usize);
}

/// One grid container and its direct card children.
pub trait CardGrid {
    fn card_count(&self) -> usize;

    /// Remove any previously forced width.
    fn clear_widths(&self);

    /// Rendered width of every card, as laid out right now.
    fn natural_widths(&self) -> Vec<f64>;

    fn force_width(&self, width: CardWidth);
}

/// One accordion list and its disclosure items.
pub trait AccordionList {
    /// Open state of every item, in document order.
    fn open_flags(&self) -> Vec<bool>;

    fn close(&self, index: usize);
}

/// An element whose text content is replaced wholesale.
pub trait TextSlot {
    fn set_text(&self, text: &str);
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for std::rc::Rc<T> {
    fn applied_preference(&self) -> ThemePreference {
        (**self).applied_preference()
    }

    fn set_preference(&self, preference: ThemePreference) {
        (**self).set_preference(preference);
    }

    fn render_toggle(&self, visuals: &ToggleVisuals) {
        (**self).render_toggle(visuals);
    }
}

impl<T: NavSurface + ?Sized> NavSurface for std::rc::Rc<T> {
    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn render(&self, view: &NavView) {
        (**self).render(view);
    }
}
