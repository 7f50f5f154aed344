pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod storage;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navigation;
use crate::hooks::use_dark_mode;
use crate::pages::{ContactPage, GamePage, HistoryPage, HowToPlayPage, PrivacyPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Game,
    #[at("/play/:word")]
    Replay { word: String },
    #[at("/history")]
    History,
    #[at("/how-to-play")]
    HowToPlay,
    #[at("/privacy")]
    Privacy,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    let (dark_mode, toggle_dark_mode) = use_dark_mode();

    let on_toggle = {
        let toggle_dark_mode = toggle_dark_mode.clone();
        Callback::from(move |_: MouseEvent| toggle_dark_mode.emit(()))
    };

    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-emerald-50 dark:bg-emerald-950 transition-colors">
                <div class="container mx-auto px-4 py-8">
                    <header class="flex justify-between items-center mb-8">
                        <h1 class="text-3xl font-bold text-emerald-800 dark:text-emerald-100">
                            {"WordChain"}
                        </h1>
                        <div class="flex items-center gap-4">
                            <button
                                onclick={on_toggle}
                                class="p-2 rounded-lg bg-emerald-200 hover:bg-emerald-300 dark:bg-emerald-800 dark:hover:bg-emerald-700 text-emerald-800 dark:text-emerald-100 transition-colors"
                                aria-label="Toggle dark mode"
                            >
                                { if dark_mode { "☀" } else { "☾" } }
                            </button>
                            <Navigation />
                        </div>
                    </header>
                    <main class="flex flex-col items-center gap-6">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Game | Route::NotFound => html! { <GamePage /> },
        Route::Replay { word } => html! { <GamePage start_word={Some(word)} /> },
        Route::History => html! { <HistoryPage /> },
        Route::HowToPlay => html! { <HowToPlayPage /> },
        Route::Privacy => html! { <PrivacyPage /> },
        Route::Contact => html! { <ContactPage /> },
    }
}
