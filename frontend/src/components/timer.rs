use yew::prelude::*;

use chain_core::ROUND_SECONDS;

#[derive(Properties, PartialEq)]
pub struct TimerProps {
    pub time_left: u32,
}

/// Countdown bar for the current round. The bar drains with the remaining
/// time and shifts color as it runs low.
#[function_component(Timer)]
pub fn timer(props: &TimerProps) -> Html {
    let percent = (props.time_left * 100) / ROUND_SECONDS;
    let bar_color = if props.time_left > 15 {
        "bg-emerald-500"
    } else if props.time_left > 5 {
        "bg-amber-500"
    } else {
        "bg-red-500"
    };

    html! {
        <div class="w-full">
            <div class="flex justify-between items-center mb-1">
                <span class="text-sm text-gray-500 dark:text-gray-400">{"Time left"}</span>
                <span class="text-sm font-semibold text-gray-700 dark:text-gray-200">
                    {format!("{}s", props.time_left)}
                </span>
            </div>
            <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                <div
                    class={classes!("h-full", "rounded-full", "transition-all", "duration-1000", bar_color)}
                    style={format!("width: {}%", percent)}
                />
            </div>
        </div>
    }
}
