use web_sys::Storage;

use chain_core::FinishedGame;

const HISTORY_KEY: &str = "wordchain_history";
const DARK_MODE_KEY: &str = "wordchain_dark_mode";
const HISTORY_LIMIT: usize = 50;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Finished games, most recent first. Unreadable or corrupt data yields an
/// empty history rather than an error.
pub fn load_history() -> Vec<FinishedGame> {
    local_storage()
        .and_then(|storage| storage.get_item(HISTORY_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Prepends `game` to the stored history, keeping at most
/// [`HISTORY_LIMIT`] entries. Storage failures are logged and swallowed so
/// a full or disabled store never breaks the game itself.
pub fn record_game(game: &FinishedGame) {
    let mut history = load_history();
    history.insert(0, game.clone());
    history.truncate(HISTORY_LIMIT);

    let Some(storage) = local_storage() else {
        log::warn!("local storage unavailable, game not recorded");
        return;
    };
    match serde_json::to_string(&history) {
        Ok(raw) => {
            if storage.set_item(HISTORY_KEY, &raw).is_err() {
                log::warn!("failed to persist game history");
            }
        }
        Err(err) => log::warn!("failed to serialize game history: {}", err),
    }
}

pub fn clear_history() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(HISTORY_KEY);
    }
}

/// Dark mode defaults to on for first-time visitors.
pub fn dark_mode_enabled() -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(DARK_MODE_KEY).ok().flatten())
        .map(|raw| raw == "true")
        .unwrap_or(true)
}

pub fn set_dark_mode(enabled: bool) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(DARK_MODE_KEY, if enabled { "true" } else { "false" });
    }
}

/// Toggles the `dark` class on the document element so Tailwind's `dark:`
/// variants take effect.
pub fn apply_dark_mode(enabled: bool) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = root.class_list();
        let result = if enabled {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
        if result.is_err() {
            log::warn!("failed to update dark mode class");
        }
    }
}
