mod game;
mod history;
mod static_page;

pub use game::GamePage;
pub use history::HistoryPage;
pub use static_page::{ContactPage, HowToPlayPage, PrivacyPage};
