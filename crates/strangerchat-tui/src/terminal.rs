//! Terminal setup and restoration

use ratatui::DefaultTerminal;

/// Enter raw mode and the alternate screen
///
/// A panic hook is installed first so a crash leaves the terminal usable.
pub fn init() -> DefaultTerminal {
    install_panic_hook();
    ratatui::init()
}

/// Leave raw mode and the alternate screen
pub fn restore() {
    ratatui::restore();
    tracing::debug!("Terminal restored");
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
}
