use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WordDisplayProps {
    pub word: String,
    pub definition: String,
    pub is_first_word: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Current chain word with its dictionary definition, plus an inline error
/// banner for rejected or failed guesses.
#[function_component(WordDisplay)]
pub fn word_display(props: &WordDisplayProps) -> Html {
    let label = if props.is_first_word {
        "Starting word"
    } else {
        "Current word"
    };

    html! {
        <div class="text-center space-y-3">
            <p class="text-sm uppercase tracking-wide text-gray-500 dark:text-gray-400">{label}</p>
            <h2 class="text-4xl font-bold text-emerald-600 dark:text-emerald-400">
                {&props.word}
            </h2>
            <p class="text-gray-600 dark:text-gray-300 italic max-w-xl mx-auto">
                {&props.definition}
            </p>
            if let Some(message) = &props.error {
                <div class="px-4 py-2 rounded-lg bg-red-100 text-red-700 dark:bg-red-900/40 dark:text-red-300">
                    {message}
                </div>
            }
        </div>
    }
}
