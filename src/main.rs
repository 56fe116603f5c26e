//! rTracker main entrypoint.

use rtracker::run;

fn main() {
    println!();
    if let Err(e) = run() {
        rtracker::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
