//! Terminal setup and restoration

use tracing::error;

/// Install a panic hook that restores the terminal before the report prints.
///
/// The panic is also written to the log file, since the terminal output may
/// be lost when the alternate screen is torn down.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
