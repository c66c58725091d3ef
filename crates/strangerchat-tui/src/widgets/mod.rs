//! Custom widget components

mod call_banner;
mod confirm_dialog;
mod header;
mod input_bar;
mod status_bar;
mod transcript;

pub use call_banner::CallBanner;
pub use confirm_dialog::ConfirmDialog;
pub use header::MainHeader;
pub use input_bar::InputBar;
pub use status_bar::StatusBar;
pub use transcript::Transcript;
