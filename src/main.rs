//! rBattlog main entrypoint.

use rbattlog::run;
use rbattlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
