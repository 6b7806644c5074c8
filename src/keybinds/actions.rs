//! Actions that keyboard shortcuts trigger in the reader.

/// Page-level actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageAction {
    /// Focus the search input and select its text - Ctrl+K
    FocusSearch,
    /// Clear and blur the search input, show every post - Esc
    ClearSearch,
    /// Apply the typed query without waiting - Enter
    SubmitSearch,
    /// Show the shortcut reference - F1
    ShowHelp,
    /// Leave the reader - Ctrl+C
    Quit,

    /// Move to the next post - Down
    NextPost,
    /// Move to the previous post - Up
    PrevPost,
    /// Filter by a tag of the current post - Ctrl+T
    SelectTag,

    /// Write a comment on the current post - Ctrl+O
    Comment,
    /// Show share links for the current post - Ctrl+S
    Share,
    /// Open or close the tag menu - Ctrl+G
    ToggleMenu,
    /// Jump back to the first post - Home
    ScrollTop,
}

impl PageAction {
    pub const ALL: [Self; 12] = [
        Self::FocusSearch,
        Self::ClearSearch,
        Self::SubmitSearch,
        Self::ShowHelp,
        Self::Quit,
        Self::NextPost,
        Self::PrevPost,
        Self::SelectTag,
        Self::Comment,
        Self::Share,
        Self::ToggleMenu,
        Self::ScrollTop,
    ];

    /// Name of the action in the `[keybinds]` config table.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FocusSearch => "focus_search",
            Self::ClearSearch => "clear_search",
            Self::SubmitSearch => "submit_search",
            Self::ShowHelp => "show_help",
            Self::Quit => "quit",
            Self::NextPost => "next_post",
            Self::PrevPost => "prev_post",
            Self::SelectTag => "select_tag",
            Self::Comment => "comment",
            Self::Share => "share",
            Self::ToggleMenu => "toggle_menu",
            Self::ScrollTop => "scroll_top",
        }
    }

    /// Look up an action by its config name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Returns a human-readable description of the action.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FocusSearch => "Focus search",
            Self::ClearSearch => "Clear search and show all posts",
            Self::SubmitSearch => "Search now",
            Self::ShowHelp => "Show help",
            Self::Quit => "Quit",
            Self::NextPost => "Next post",
            Self::PrevPost => "Previous post",
            Self::SelectTag => "Filter by a tag of this post",
            Self::Comment => "Comment on this post",
            Self::Share => "Share this post",
            Self::ToggleMenu => "Toggle tag menu",
            Self::ScrollTop => "Back to top",
        }
    }

    /// Whether the action still fires while the search input has focus.
    #[must_use]
    pub const fn works_while_typing(self) -> bool {
        matches!(
            self,
            Self::FocusSearch | Self::ClearSearch | Self::SubmitSearch | Self::Quit | Self::ShowHelp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for action in PageAction::ALL {
            assert_eq!(PageAction::from_name(action.name()), Some(action));
        }
        assert_eq!(PageAction::from_name("add_tag"), None);
    }

    #[test]
    fn test_description() {
        assert_eq!(PageAction::FocusSearch.description(), "Focus search");
    }

    #[test]
    fn test_works_while_typing() {
        assert!(PageAction::ClearSearch.works_while_typing());
        assert!(!PageAction::NextPost.works_while_typing());
        assert!(!PageAction::Comment.works_while_typing());
    }
}
