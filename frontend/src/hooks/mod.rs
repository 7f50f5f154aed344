mod use_dark_mode;

pub use use_dark_mode::use_dark_mode;
