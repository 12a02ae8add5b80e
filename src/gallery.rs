//! Gallery viewer state: one selection, reconcilable from two directions.
//!
//! The viewer shows one image out of an ordered list. Which one can change
//! from either side:
//!
//! - the user picks a thumbnail or steps with next/previous (index-driven)
//! - the surrounding screen supplies a URL, e.g. restoring the product's
//!   designated main image on load (URL-driven)
//!
//! [`GalleryView`] is the single source of truth for both. Index-driven
//! transitions *emit* the resolved URL (the return value) so the caller can
//! keep the product's main-image field in sync; URL-driven transitions come
//! *from* that field and emit nothing new.
//!
//! A URL with no match in the list is legal: a just-uploaded main image may
//! not be part of the gallery yet. In that case the displayed URL points
//! outside the list and the selection index stays where it was — no silent
//! reset. [`GalleryView::is_settled`] reports whether display and selection
//! currently agree.
//!
//! An empty gallery is a valid terminal state. Every operation is a no-op on
//! it; the viewer renders a fixed "no images" placeholder instead of failing.

use crate::types::Image;
use tracing::debug;

/// Placeholder text for the empty-gallery state.
pub const EMPTY_GALLERY_NOTICE: &str = "No images available";

/// Synchronized gallery selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryView {
    items: Vec<Image>,
    /// Meaningful only while `items` is non-empty; always `< items.len()` then.
    selected: usize,
    displayed_url: Option<String>,
}

impl GalleryView {
    /// Start at the first image (or the empty state).
    pub fn new(items: Vec<Image>) -> Self {
        let displayed_url = items.first().map(|img| img.url.clone());
        GalleryView {
            items,
            selected: 0,
            displayed_url,
        }
    }

    pub fn items(&self) -> &[Image] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the current selection; `None` in the empty state.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.selected)
    }

    /// The image the selection points at; `None` in the empty state.
    pub fn current(&self) -> Option<&Image> {
        self.items.get(self.selected)
    }

    /// URL currently displayed. May name an image outside the list after a
    /// URL-driven transition that found no match.
    pub fn displayed_url(&self) -> Option<&str> {
        self.displayed_url.as_deref()
    }

    /// Whether the displayed URL agrees with the selected item. Holds after
    /// every settled transition; only an unmatched [`Self::select_url`] (or
    /// the empty state with a stale URL) breaks it.
    pub fn is_settled(&self) -> bool {
        match self.current() {
            Some(img) => self.displayed_url.as_deref() == Some(img.url.as_str()),
            None => self.displayed_url.is_none(),
        }
    }

    /// 1-based position counter for the "`n / total`" badge; `None` when empty.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.selected_index().map(|i| (i + 1, self.items.len()))
    }

    /// Select by index. Returns the resolved URL to propagate to the
    /// product's main-image field; `None` (and no state change) on an empty
    /// gallery or an out-of-range index.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let Some(img) = self.items.get(index) else {
            debug!(index, len = self.items.len(), "gallery select out of range");
            return None;
        };
        let url = img.url.clone();
        self.selected = index;
        self.displayed_url = Some(url.clone());
        Some(url)
    }

    /// Select by URL. The first matching entry wins and this behaves like
    /// [`Self::select`] on its position. With no match, the selection index
    /// is left untouched and only the displayed URL changes — the URL may
    /// legitimately reference an image not (yet) in the gallery.
    pub fn select_url(&mut self, url: &str) -> Option<String> {
        match self.items.iter().position(|img| img.url == url) {
            Some(index) => self.select(index),
            None => {
                self.displayed_url = Some(url.to_string());
                None
            }
        }
    }

    /// Advance with wraparound: the last index steps to 0. No-op when the
    /// list holds one image or none.
    pub fn next(&mut self) -> Option<String> {
        if self.items.len() <= 1 {
            return None;
        }
        let index = (self.selected + 1) % self.items.len();
        self.select(index)
    }

    /// Retreat with wraparound: index 0 steps to the last index. No-op when
    /// the list holds one image or none. Index math stays in
    /// `[0, len)` — never negative.
    pub fn previous(&mut self) -> Option<String> {
        if self.items.len() <= 1 {
            return None;
        }
        let index = (self.selected + self.items.len() - 1) % self.items.len();
        self.select(index)
    }

    /// Swap in a new list, e.g. after the product's gallery was edited.
    ///
    /// The selection re-resolves by matching the currently displayed URL
    /// against the new list; with no match it falls back to the first image,
    /// or to the empty state for an empty list.
    pub fn replace_items(&mut self, items: Vec<Image>) {
        self.items = items;
        let resolved = self
            .displayed_url
            .as_deref()
            .and_then(|url| self.items.iter().position(|img| img.url == url));
        match resolved {
            Some(index) => self.selected = index,
            None => {
                self.selected = 0;
                self.displayed_url = self.items.first().map(|img| img.url.clone());
            }
        }
    }
}
