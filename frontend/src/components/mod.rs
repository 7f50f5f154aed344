mod game_over;
mod guess_input;
mod navigation;
mod timer;
mod word_display;

pub use game_over::GameOver;
pub use guess_input::GuessInput;
pub use navigation::Navigation;
pub use timer::Timer;
pub use word_display::WordDisplay;
