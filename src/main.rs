//! rPosDesk main entrypoint.

use rposdesk::run;
use rposdesk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
