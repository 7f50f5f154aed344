use yew::prelude::*;
use yew_router::prelude::*;

use chain_core::FinishedGame;

use crate::storage;
use crate::Route;

fn format_played_at(timestamp: u64) -> String {
    if timestamp == 0 {
        return String::new();
    }
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp as f64 * 1000.0));
    date.to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED).into()
}

#[function_component(HistoryPage)]
pub fn history_page() -> Html {
    let games = use_state(storage::load_history);

    let on_clear = {
        let games = games.clone();
        Callback::from(move |_: MouseEvent| {
            storage::clear_history();
            games.set(Vec::new());
        })
    };

    if games.is_empty() {
        return html! {
            <div class="text-center space-y-4">
                <h2 class="text-2xl font-bold text-emerald-800 dark:text-emerald-100">
                    {"Game History"}
                </h2>
                <p class="text-gray-600 dark:text-gray-300">
                    {"No games played yet. Finish a game and it will show up here."}
                </p>
                <Link<Route>
                    to={Route::Game}
                    classes="inline-block px-6 py-2 rounded-lg font-semibold bg-emerald-600 hover:bg-emerald-700 text-white transition-colors">
                    {"Play Now"}
                </Link<Route>>
            </div>
        };
    }

    html! {
        <div class="w-full max-w-2xl mx-auto space-y-4">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold text-emerald-800 dark:text-emerald-100">
                    {"Game History"}
                </h2>
                <button
                    onclick={on_clear}
                    class="px-4 py-2 rounded-lg text-sm font-semibold bg-red-100 hover:bg-red-200 text-red-700 dark:bg-red-900/40 dark:hover:bg-red-900/60 dark:text-red-300 transition-colors">
                    {"Clear History"}
                </button>
            </div>
            { for games.iter().map(game_card) }
        </div>
    }
}

fn game_card(game: &FinishedGame) -> Html {
    let chain_words = game
        .chain
        .iter()
        .map(|entry| entry.word.clone())
        .collect::<Vec<_>>()
        .join(" → ");
    let played_at = format_played_at(game.played_at);

    html! {
        <div class="p-4 rounded-xl bg-white dark:bg-gray-800 shadow space-y-2">
            <div class="flex justify-between items-baseline">
                <span class="text-lg font-semibold text-emerald-700 dark:text-emerald-300">
                    {format!("Started from \"{}\"", game.start_word)}
                </span>
                <span class="text-2xl font-bold text-emerald-600 dark:text-emerald-400">
                    {game.score}
                </span>
            </div>
            <p class="text-gray-700 dark:text-gray-200">{chain_words}</p>
            if !game.missed_word.is_empty() {
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    {format!("Missed: {}", game.missed_word)}
                    if !game.missed_word_definition.is_empty() {
                        {format!(" ({})", game.missed_word_definition)}
                    }
                </p>
            }
            <div class="flex justify-between items-center">
                if !played_at.is_empty() {
                    <span class="text-xs text-gray-400 dark:text-gray-500">{played_at}</span>
                } else {
                    <span />
                }
                <Link<Route>
                    to={Route::Replay { word: game.start_word.clone() }}
                    classes="text-sm font-semibold text-emerald-600 hover:text-emerald-700 dark:text-emerald-400 dark:hover:text-emerald-300">
                    {"Replay"}
                </Link<Route>>
            </div>
        </div>
    }
}
