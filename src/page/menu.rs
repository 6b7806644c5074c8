//! Mobile navigation menu

/// Icon on the hamburger button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Menu closed
    Bars,
    /// Menu open
    Times,
}

impl MenuIcon {
    /// Font Awesome class of the icon
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Bars => "fa-bars",
            Self::Times => "fa-times",
        }
    }
}

/// Open/closed state of the collapsible menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A click landed outside both the menu and its button
    pub fn click_outside(&mut self) {
        self.open = false;
    }

    /// A link inside the menu was followed
    pub fn nav_link_clicked(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub const fn icon(self) -> MenuIcon {
        if self.open { MenuIcon::Times } else { MenuIcon::Bars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_swaps_icon() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.icon(), MenuIcon::Bars);

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Times);
        assert_eq!(menu.icon().class(), "fa-times");

        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_outside_click_and_link_close() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.click_outside();
        assert_eq!(menu.icon(), MenuIcon::Bars);

        menu.toggle();
        menu.nav_link_clicked();
        assert!(!menu.is_open());

        // Closing a closed menu is a no-op
        menu.click_outside();
        assert!(!menu.is_open());
    }
}
