//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.

use crate::model::{select_posts, BlogPost, PostFilter};

// ===== Screen =====

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Home menu listing the available content.
    #[default]
    Home,
    /// The scrollable blog post list.
    BlogList,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Transitions
///
/// - Screen: Home → BlogList (`open_selected`), BlogList → Home (`go_back`)
/// - Filter: All ⇄ Category (`toggle_filter`, resets scroll to top)
/// - Title: large ⇄ inline, derived from `scroll_offset` vs `collapse_threshold`
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every post from the provider, in provider order.
    posts: Vec<BlogPost>,

    /// Category the filter toggle narrows to.
    filter_category: String,

    /// Screen currently shown.
    pub screen: Screen,

    /// Whether the category filter is active.
    pub filtered: bool,

    /// First visible row of the blog list content.
    pub scroll_offset: u16,

    /// Rows scrolled before the large navigation title collapses inline.
    pub collapse_threshold: u16,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl AppState {
    /// Create state on the home screen, unfiltered, scrolled to top.
    pub fn new(posts: Vec<BlogPost>, filter_category: impl Into<String>) -> Self {
        Self {
            posts,
            filter_category: filter_category.into(),
            screen: Screen::Home,
            filtered: false,
            scroll_offset: 0,
            collapse_threshold: 3,
            help_visible: false,
        }
    }

    /// All posts, unfiltered and unsorted.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Category the filter toggle narrows to.
    pub fn filter_category(&self) -> &str {
        &self.filter_category
    }

    /// The filter implied by the toggle.
    pub fn active_filter(&self) -> PostFilter {
        if self.filtered {
            PostFilter::Category(self.filter_category.clone())
        } else {
            PostFilter::All
        }
    }

    /// Posts the list shows, newest first.
    pub fn visible_posts(&self) -> Vec<&BlogPost> {
        select_posts(&self.posts, &self.active_filter())
    }

    /// Flip the category filter.
    ///
    /// The list content changes under the viewport, so scrolling restarts
    /// from the top.
    pub fn toggle_filter(&mut self) {
        self.filtered = !self.filtered;
        self.scroll_offset = 0;
    }

    /// Whether the navigation title renders inline instead of large.
    pub fn is_title_collapsed(&self) -> bool {
        self.screen == Screen::BlogList && self.scroll_offset >= self.collapse_threshold
    }

    /// Open the blog list from the home screen. No-op elsewhere.
    pub fn open_selected(&mut self) {
        if self.screen == Screen::Home {
            self.screen = Screen::BlogList;
            self.scroll_offset = 0;
        }
    }

    /// Return to the home screen.
    ///
    /// Returns `false` when already on the home screen.
    pub fn go_back(&mut self) -> bool {
        match self.screen {
            Screen::BlogList => {
                self.screen = Screen::Home;
                true
            }
            Screen::Home => false,
        }
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
