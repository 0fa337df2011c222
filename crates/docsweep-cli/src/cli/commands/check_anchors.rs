//! `docsweep check-anchors <fragment>...` – look up fragment ids in the reference page.

use anyhow::Result;
use docsweep_core::audit;
use docsweep_core::config::HttpConfig;
use docsweep_core::http::CurlClient;

use crate::cli::Outcome;

pub fn run_check_anchors(http: &HttpConfig, reference: &str, fragments: &[String]) -> Result<Outcome> {
    let client = CurlClient::new(http);
    let results = audit::check_anchors(&client, reference, fragments)?;
    let mut all_found = true;
    for r in &results {
        if r.found {
            println!("{:<8} {}", "found", r.fragment);
        } else {
            all_found = false;
            println!("{:<8} {}", "MISSING", r.fragment);
        }
    }
    Ok(Outcome::from_clean(all_found))
}
