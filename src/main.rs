//! dailylog main entrypoint.

use dailylog::run;

fn main() {
    if let Err(e) = run() {
        dailylog::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
