//! Help text generation from the configured keybinds

use super::actions::PageAction;
use super::config::KeybindConfig;
use super::keys::key_to_human;

/// Sections of the help screen, in display order
const SECTIONS: [(&str, &[PageAction]); 3] = [
    (
        "SEARCH",
        &[PageAction::FocusSearch, PageAction::SubmitSearch, PageAction::ClearSearch],
    ),
    (
        "POSTS",
        &[
            PageAction::NextPost,
            PageAction::PrevPost,
            PageAction::SelectTag,
            PageAction::Comment,
            PageAction::Share,
        ],
    ),
    (
        "PAGE",
        &[
            PageAction::ToggleMenu,
            PageAction::ScrollTop,
            PageAction::ShowHelp,
            PageAction::Quit,
        ],
    ),
];

/// One `(keys, description)` row per enabled action, grouped under headers
///
/// Header rows have an empty description.
#[must_use]
pub fn help_rows(config: &KeybindConfig) -> Vec<(String, String)> {
    let mut rows = Vec::new();

    for (title, actions) in SECTIONS {
        let enabled: Vec<_> = actions.iter().filter(|a| !config.is_disabled(**a)).collect();
        if enabled.is_empty() {
            continue;
        }

        rows.push((title.to_string(), String::new()));
        for action in enabled {
            let keys = config
                .get(*action)
                .iter()
                .filter(|k| *k != "none")
                .map(|k| key_to_human(k))
                .collect::<Vec<_>>()
                .join(" / ");
            rows.push((keys, action.description().to_string()));
        }
    }

    rows
}

/// Plain-text help screen
#[must_use]
pub fn generate_help_text(config: &KeybindConfig) -> String {
    let mut output = String::from("Keyboard shortcuts\n\n");

    for (keys, description) in help_rows(config) {
        if description.is_empty() {
            output.push_str(&format!("{keys}:\n"));
        } else {
            output.push_str(&format!("  {keys:<18}{description}\n"));
        }
    }

    output.push_str("\nPress any key to close this help screen\n");
    output
}
