use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

#[derive(Properties, PartialEq)]
pub struct GuessInputProps {
    pub hint: String,
    pub guessed_vowels: Vec<char>,
    pub disabled: bool,
    pub on_guess: Callback<String>,
    pub on_vowel: Callback<char>,
}

/// Guess entry for the hidden next word. The hint is rendered as one tile
/// per letter, with only the vowels the player has revealed visible, plus
/// vowel keys and a free-form text input.
#[function_component(GuessInput)]
pub fn guess_input(props: &GuessInputProps) -> Html {
    let input_ref = use_node_ref();

    // A new hint means a new round, so drop whatever was typed.
    {
        let input_ref = input_ref.clone();
        use_effect_with(props.hint.clone(), move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        });
    }

    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_guess = props.on_guess.clone();
        let disabled = props.disabled;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if disabled {
                return;
            }
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let value = input.value();
                if !value.trim().is_empty() {
                    on_guess.emit(value);
                    input.set_value("");
                }
            }
        })
    };

    let tiles: Html = props
        .hint
        .chars()
        .map(|letter| {
            let revealed = props.guessed_vowels.contains(&letter.to_ascii_lowercase());
            html! {
                <span class="w-10 h-12 flex items-center justify-center rounded-lg \
                    bg-emerald-100 dark:bg-emerald-900 text-xl font-bold \
                    text-emerald-800 dark:text-emerald-100 uppercase">
                    { if revealed { letter.to_string() } else { "_".to_string() } }
                </span>
            }
        })
        .collect();

    let vowel_keys: Html = VOWELS
        .iter()
        .map(|&vowel| {
            let used = props.guessed_vowels.contains(&vowel);
            let onclick = {
                let on_vowel = props.on_vowel.clone();
                Callback::from(move |_: MouseEvent| on_vowel.emit(vowel))
            };
            html! {
                <button
                    type="button"
                    {onclick}
                    disabled={used || props.disabled}
                    class="w-10 h-10 rounded-lg font-semibold uppercase transition-colors \
                        bg-emerald-200 hover:bg-emerald-300 dark:bg-emerald-800 \
                        dark:hover:bg-emerald-700 text-emerald-800 dark:text-emerald-100 \
                        disabled:opacity-40 disabled:cursor-not-allowed">
                    {vowel.to_string()}
                </button>
            }
        })
        .collect();

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap justify-center gap-2">
                {tiles}
            </div>
            <div class="flex justify-center gap-2">
                {vowel_keys}
            </div>
            <form {onsubmit} class="flex gap-2">
                <input
                    ref={input_ref}
                    type="text"
                    placeholder="Type your guess..."
                    disabled={props.disabled}
                    class="flex-1 px-4 py-2 rounded-lg border border-emerald-300 \
                        dark:border-emerald-700 bg-white dark:bg-gray-800 \
                        text-gray-800 dark:text-gray-100 focus:outline-none \
                        focus:ring-2 focus:ring-emerald-500"
                />
                <button
                    type="submit"
                    disabled={props.disabled}
                    class="px-6 py-2 rounded-lg font-semibold bg-emerald-600 \
                        hover:bg-emerald-700 text-white transition-colors \
                        disabled:opacity-40 disabled:cursor-not-allowed">
                    {"Guess"}
                </button>
            </form>
        </div>
    }
}
