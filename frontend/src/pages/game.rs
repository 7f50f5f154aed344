use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use chain_core::{random_start_word, ChainEngine, Generation, GuessOutcome, Phase};

use crate::api;
use crate::components::{GameOver, GuessInput, Timer, WordDisplay};
use crate::storage;

const MISMATCH_MESSAGE: &str = "Not the word I'm thinking of. Try again!";
const START_FAILED_MESSAGE: &str = "Failed to start game. Please try again.";
const LOOKUP_FAILED_MESSAGE: &str = "Failed to validate word. Please try again.";

#[derive(Properties, PartialEq)]
pub struct GamePageProps {
    /// Replay entry point: start from this word instead of a random one.
    #[prop_or_default]
    pub start_word: Option<String>,
}

/// The game screen. The engine lives in a shared cell so async lookup
/// completions and timer ticks always see the latest game, not the
/// snapshot the closure was created with; renders are requested explicitly
/// after each mutation.
#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let engine = use_mut_ref(ChainEngine::new);
    let update = use_force_update();
    let feedback = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let guessed_vowels = use_state(Vec::<char>::new);
    let missed_definition = use_state(String::new);
    let recorded = use_mut_ref(|| None::<Generation>);

    let start_game = {
        let engine = engine.clone();
        let update = update.clone();
        let feedback = feedback.clone();
        let busy = busy.clone();
        let guessed_vowels = guessed_vowels.clone();
        let missed_definition = missed_definition.clone();
        Callback::from(move |requested: Option<String>| {
            let generation = engine.borrow_mut().begin_start();
            feedback.set(None);
            busy.set(false);
            guessed_vowels.set(Vec::new());
            missed_definition.set(String::new());
            update.force_update();

            let engine = engine.clone();
            let update = update.clone();
            let feedback = feedback.clone();
            spawn_local(async move {
                let word =
                    requested.unwrap_or_else(|| random_start_word(&mut rand::thread_rng()));
                match api::fetch_word_entry(&word).await {
                    Ok(entry) => {
                        engine
                            .borrow_mut()
                            .complete_start(generation, entry, &mut rand::thread_rng());
                    }
                    Err(err) => {
                        let mut engine = engine.borrow_mut();
                        if engine.is_current(generation) {
                            log::warn!("start lookup for '{}' failed: {}", word, err);
                            engine.fail_start(generation);
                            feedback.set(Some(START_FAILED_MESSAGE.to_string()));
                        }
                    }
                }
                update.force_update();
            });
        })
    };

    {
        let start_game = start_game.clone();
        use_effect_with(props.start_word.clone(), move |start_word| {
            start_game.emit(start_word.clone());
        });
    }

    let on_guess = {
        let engine = engine.clone();
        let update = update.clone();
        let feedback = feedback.clone();
        let busy = busy.clone();
        let guessed_vowels = guessed_vowels.clone();
        Callback::from(move |raw: String| {
            let generation = match engine.borrow_mut().submit_guess(&raw) {
                Ok(generation) => generation,
                Err(_) => {
                    feedback.set(Some(MISMATCH_MESSAGE.to_string()));
                    return;
                }
            };
            feedback.set(None);
            busy.set(true);

            let engine = engine.clone();
            let update = update.clone();
            let feedback = feedback.clone();
            let busy = busy.clone();
            let guessed_vowels = guessed_vowels.clone();
            spawn_local(async move {
                let guess = chain_core::normalize(&raw);
                match api::fetch_word_entry(&guess).await {
                    Ok(entry) => {
                        let outcome = engine.borrow_mut().complete_guess(
                            generation,
                            entry,
                            &mut rand::thread_rng(),
                        );
                        if outcome == Some(GuessOutcome::Continued) {
                            guessed_vowels.set(Vec::new());
                        }
                    }
                    Err(err) => {
                        if engine.borrow().is_current(generation) {
                            log::warn!("guess lookup for '{}' failed: {}", guess, err);
                            feedback.set(Some(LOOKUP_FAILED_MESSAGE.to_string()));
                        }
                    }
                }
                busy.set(false);
                update.force_update();
            });
        })
    };

    let on_vowel = {
        let guessed_vowels = guessed_vowels.clone();
        Callback::from(move |vowel: char| {
            if !guessed_vowels.contains(&vowel) {
                let mut next = (*guessed_vowels).clone();
                next.push(vowel);
                guessed_vowels.set(next);
            }
        })
    };

    let on_restart = {
        let start_game = start_game.clone();
        Callback::from(move |_: ()| start_game.emit(None))
    };

    let on_retry = {
        let on_restart = on_restart.clone();
        Callback::from(move |_: MouseEvent| on_restart.emit(()))
    };

    let (phase, generation) = {
        let engine = engine.borrow();
        (engine.phase(), engine.generation())
    };

    // One-second game clock, torn down whenever the game it was started for
    // stops being the active one.
    {
        let engine = engine.clone();
        let update = update.clone();
        use_effect_with((generation, phase == Phase::Active), move |(_, active)| {
            let interval = active.then(|| {
                Interval::new(1_000, move || {
                    engine.borrow_mut().tick();
                    update.force_update();
                })
            });
            move || drop(interval)
        });
    }

    // Record each finished game exactly once. The record is snapshotted
    // before the best-effort definition fetch so a restart racing that fetch
    // cannot lose the game; the generation check only gates the screen
    // update for the game still being shown.
    {
        let engine = engine.clone();
        let missed_definition = missed_definition.clone();
        let recorded = recorded.clone();
        use_effect_with((generation, phase == Phase::GameOver), move |(generation, over)| {
            let generation = *generation;
            if !*over || *recorded.borrow() == Some(generation) {
                return;
            }
            *recorded.borrow_mut() = Some(generation);
            let played_at = (js_sys::Date::now() / 1000.0) as u64;
            let Some(mut record) = engine.borrow().finished_game(String::new(), played_at)
            else {
                return;
            };
            spawn_local(async move {
                if !record.missed_word.is_empty() {
                    if let Ok(entry) = api::fetch_word_entry(&record.missed_word).await {
                        record.missed_word_definition = entry.definition;
                    }
                }
                storage::record_game(&record);
                gloo::console::log!("game recorded with score", record.score);
                if engine.borrow().is_current(generation) {
                    missed_definition.set(record.missed_word_definition.clone());
                }
            });
        });
    }

    let engine = engine.borrow();
    match engine.phase() {
        Phase::Loading => html! {
            <div class="text-center space-y-4">
                <div class="text-emerald-800 dark:text-emerald-100">{"Loading..."}</div>
                if let Some(message) = &*feedback {
                    <div class="px-4 py-2 rounded-lg bg-red-100 text-red-700 dark:bg-red-900/40 dark:text-red-300">
                        {message}
                    </div>
                    <button
                        onclick={on_retry}
                        class="px-6 py-2 rounded-lg font-semibold bg-emerald-600 hover:bg-emerald-700 text-white transition-colors">
                        {"Try Again"}
                    </button>
                }
            </div>
        },
        Phase::Active => {
            let Some(state) = engine.state() else {
                return html! {};
            };
            let (word, definition) = state
                .current_word()
                .map(|entry| (entry.word.clone(), entry.definition.clone()))
                .unwrap_or_default();
            html! {
                <div class="w-full max-w-6xl mx-auto">
                    <div class="flex flex-col lg:flex-row gap-6">
                        <div class="lg:w-1/2 space-y-6">
                            <WordDisplay
                                {word}
                                {definition}
                                is_first_word={state.chain.len() == 1}
                                error={(*feedback).clone()}
                            />
                            <Timer time_left={state.time_left} />
                        </div>
                        <div class="lg:w-1/2 space-y-4">
                            <GuessInput
                                hint={state.next_hint.clone()}
                                guessed_vowels={(*guessed_vowels).clone()}
                                disabled={*busy || state.time_left == 0}
                                on_guess={on_guess.clone()}
                                on_vowel={on_vowel.clone()}
                            />
                            <div class="text-xl font-bold text-emerald-800 dark:text-emerald-100 text-center">
                                {format!("Score: {}", state.score)}
                            </div>
                        </div>
                    </div>
                </div>
            }
        }
        Phase::GameOver => {
            let Some(state) = engine.state() else {
                return html! {};
            };
            html! {
                <div class="w-full space-y-4">
                    if let Some(message) = &*feedback {
                        <div class="max-w-2xl mx-auto px-4 py-2 rounded-lg bg-red-100 text-red-700 dark:bg-red-900/40 dark:text-red-300 text-center">
                            {message}
                        </div>
                    }
                    <GameOver
                        score={state.score}
                        chain={state.chain.clone()}
                        start_word={state.start_word.clone()}
                        missed_word={state.next_hint.clone()}
                        missed_word_definition={(*missed_definition).clone()}
                        on_restart={on_restart.clone()}
                    />
                </div>
            }
        }
    }
}
