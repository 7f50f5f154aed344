use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let link_classes = "px-3 py-2 rounded-md text-sm font-medium text-gray-600 \
        hover:text-emerald-600 hover:bg-emerald-50 dark:text-gray-300 \
        dark:hover:text-emerald-400 dark:hover:bg-gray-800 transition-colors";

    html! {
        <nav class="flex flex-wrap items-center gap-1">
            <Link<Route> to={Route::Game} classes={link_classes}>{"Play"}</Link<Route>>
            <Link<Route> to={Route::History} classes={link_classes}>{"History"}</Link<Route>>
            <Link<Route> to={Route::HowToPlay} classes={link_classes}>{"How to Play"}</Link<Route>>
            <Link<Route> to={Route::Privacy} classes={link_classes}>{"Privacy"}</Link<Route>>
            <Link<Route> to={Route::Contact} classes={link_classes}>{"Contact"}</Link<Route>>
        </nav>
    }
}
