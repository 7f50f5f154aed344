use yew::prelude::*;

use chain_core::WordEntry;

#[derive(Properties, PartialEq)]
pub struct GameOverProps {
    pub score: u32,
    pub chain: Vec<WordEntry>,
    pub start_word: String,
    pub missed_word: String,
    pub missed_word_definition: String,
    pub on_restart: Callback<()>,
}

#[function_component(GameOver)]
pub fn game_over(props: &GameOverProps) -> Html {
    let onclick = {
        let on_restart = props.on_restart.clone();
        Callback::from(move |_: MouseEvent| on_restart.emit(()))
    };

    let chain_words = props
        .chain
        .iter()
        .map(|entry| entry.word.clone())
        .collect::<Vec<_>>()
        .join(" → ");

    html! {
        <div class="w-full max-w-2xl mx-auto text-center space-y-6 p-8 rounded-2xl \
            bg-white dark:bg-gray-800 shadow-lg">
            <h2 class="text-3xl font-bold text-emerald-800 dark:text-emerald-100">
                {"Game Over!"}
            </h2>
            <p class="text-5xl font-bold text-emerald-600 dark:text-emerald-400">
                {props.score}
            </p>
            <div class="space-y-2">
                <p class="text-sm uppercase tracking-wide text-gray-500 dark:text-gray-400">
                    {format!("Your chain from \"{}\"", props.start_word)}
                </p>
                <p class="text-lg text-gray-700 dark:text-gray-200">{chain_words}</p>
            </div>
            if !props.missed_word.is_empty() {
                <div class="space-y-1 p-4 rounded-lg bg-emerald-50 dark:bg-emerald-900/40">
                    <p class="text-sm uppercase tracking-wide text-gray-500 dark:text-gray-400">
                        {"The word you missed"}
                    </p>
                    <p class="text-xl font-semibold text-emerald-700 dark:text-emerald-300">
                        {&props.missed_word}
                    </p>
                    if !props.missed_word_definition.is_empty() {
                        <p class="text-gray-600 dark:text-gray-300 italic">
                            {&props.missed_word_definition}
                        </p>
                    }
                </div>
            }
            <button
                {onclick}
                class="px-8 py-3 rounded-lg font-semibold bg-emerald-600 \
                    hover:bg-emerald-700 text-white transition-colors">
                {"Play Again"}
            </button>
        </div>
    }
}
