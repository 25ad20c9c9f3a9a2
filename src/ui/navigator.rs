//! Tab navigation between panel pages.

use std::fmt;
use std::str::FromStr;

use super::Strings;

/// Pages known to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Servers,
    Profile,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Servers, Self::Profile];

    /// Returns the page identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Servers => "servers",
            Self::Profile => "profile",
        }
    }

    /// Returns the localized page title.
    #[must_use]
    pub const fn title(self, strings: &Strings) -> &'static str {
        match self {
            Self::Home => strings.page_home,
            Self::Servers => strings.page_servers,
            Self::Profile => strings.page_profile,
        }
    }
}

impl FromStr for Page {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|p| p.id() == s).ok_or(())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A page container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlot {
    pub id: String,
    pub active: bool,
}

/// A navigation button pointing at a page by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub page: String,
    pub active: bool,
}

/// Set of pages and the nav buttons that switch between them.
///
/// After every switch the active page and the active button carry the same
/// id. Switching to an unknown id leaves nothing active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    pages: Vec<PageSlot>,
    buttons: Vec<NavButton>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Page::ALL.iter().map(|p| p.id()))
    }
}

impl Navigator {
    /// Creates a navigator with one page and one button per id, all inactive.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        Self {
            pages: ids
                .iter()
                .map(|id| PageSlot {
                    id: id.clone(),
                    active: false,
                })
                .collect(),
            buttons: ids
                .into_iter()
                .map(|page| NavButton {
                    page,
                    active: false,
                })
                .collect(),
        }
    }

    /// Marks the page with `page_id` and its button active, everything else inactive.
    pub fn switch_page(&mut self, page_id: &str) {
        for page in &mut self.pages {
            page.active = page.id == page_id;
        }
        for button in &mut self.buttons {
            button.active = button.page == page_id;
        }
    }

    /// Handles a click on the nav button at `index`.
    ///
    /// Returns the id switched to, or `None` if there is no such button.
    pub fn click(&mut self, index: usize) -> Option<String> {
        let target = self.buttons.get(index)?.page.clone();
        self.switch_page(&target);
        Some(target)
    }

    /// Returns the id of the active page, if any.
    #[must_use]
    pub fn active_page(&self) -> Option<&str> {
        self.pages.iter().find(|p| p.active).map(|p| p.id.as_str())
    }

    /// Returns the page id of the active button, if any.
    #[must_use]
    pub fn active_button(&self) -> Option<&str> {
        self.buttons
            .iter()
            .find(|b| b.active)
            .map(|b| b.page.as_str())
    }

    #[must_use]
    pub fn pages(&self) -> &[PageSlot] {
        &self.pages
    }

    #[must_use]
    pub fn buttons(&self) -> &[NavButton] {
        &self.buttons
    }
}
