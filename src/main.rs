//! prodtracker main entrypoint.

use prodtracker::run;
use prodtracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}
