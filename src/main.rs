//! patient-trends main entrypoint.

use patient_trends::run;
use patient_trends::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
