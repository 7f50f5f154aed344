use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StaticPageProps {
    pub title: AttrValue,
    pub children: Html,
}

#[function_component(StaticPage)]
pub fn static_page(props: &StaticPageProps) -> Html {
    html! {
        <div class="w-full max-w-2xl mx-auto p-8 rounded-2xl bg-white dark:bg-gray-800 shadow-lg">
            <h2 class="text-2xl font-bold mb-4 text-emerald-800 dark:text-emerald-100">
                {&props.title}
            </h2>
            <div class="text-gray-700 dark:text-gray-200">
                {props.children.clone()}
            </div>
        </div>
    }
}

#[function_component(HowToPlayPage)]
pub fn how_to_play_page() -> Html {
    html! {
        <StaticPage title="How to Play">
            <p class="mb-4">
                {"WordChain is a word association game where you build a chain of related words:"}
            </p>
            <ol class="list-decimal pl-6 space-y-2">
                <li>{"Start with a given word"}</li>
                <li>{"Use the vowel keys to reveal vowels in the hidden word"}</li>
                <li>{"Find the similar word by guessing the correct vowels"}</li>
                <li>{"Continue building the chain with new similar words"}</li>
                <li>{"Score points based on your speed and chain length"}</li>
            </ol>
        </StaticPage>
    }
}

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    html! {
        <StaticPage title="Privacy Policy">
            <h3 class="text-xl font-semibold mb-2">{"Data Collection"}</h3>
            <p class="mb-4">
                {"We only store your game history locally on your device. \
                  No personal information is collected or transmitted."}
            </p>
            <h3 class="text-xl font-semibold mb-2">{"Cookies"}</h3>
            <p>
                {"We use local storage to save your game history and preferences. \
                  No tracking cookies are used."}
            </p>
        </StaticPage>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <StaticPage title="Contact Us">
            <p class="mb-4">
                {"Have questions or feedback about WordChain? We'd love to hear from you!"}
            </p>
            <p>{"Email us at: support@wordchain.example"}</p>
        </StaticPage>
    }
}
