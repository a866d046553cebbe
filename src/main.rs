//! `civic` - Civic issue reporting and triage
//!
//! Citizens report geotagged issues from the command line; administrators
//! move them through review. State lives in JSON slots under `.civic/`.

use civic_issues::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
