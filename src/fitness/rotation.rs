//! Injection site rotation
//!
//! Picks the next site so recently used sites get skipped: first canonical
//! site absent from the last three injections, then a narrower two-entry
//! window as the tie-break.

use crate::error::{CalcError, CalcResult};
use crate::models::InjectionSite;

/// Most recent `n` entries of a history, oldest first
fn recent_window(history: &[InjectionSite], n: usize) -> &[InjectionSite] {
    &history[history.len().saturating_sub(n)..]
}

/// First site in canonical order not present in the window
fn first_unused(window: &[InjectionSite]) -> Option<InjectionSite> {
    InjectionSite::CANONICAL
        .into_iter()
        .find(|site| !window.contains(site))
}

/// Select the next injection site given the history, most recent last.
///
/// Checks the last three entries first; three entries cannot cover all four
/// sites, so that pass always yields one. The two-entry pass stays as the
/// tie-break that de-prioritizes the second-most-recent site, defaulting to
/// the head of the canonical order.
pub fn next_injection_site(history: &[InjectionSite]) -> InjectionSite {
    if let Some(site) = first_unused(recent_window(history, 3)) {
        return site;
    }

    first_unused(recent_window(history, 2)).unwrap_or(InjectionSite::CANONICAL[0])
}

/// Select the next site from string labels, e.g. form state.
///
/// Unknown labels are an error rather than being skipped over.
pub fn next_site_for_labels(history: &[&str]) -> CalcResult<InjectionSite> {
    let sites = history
        .iter()
        .map(|label| {
            InjectionSite::from_str(label)
                .ok_or_else(|| CalcError::InvalidSite((*label).to_string()))
        })
        .collect::<CalcResult<Vec<_>>>()?;

    Ok(next_injection_site(&sites))
}
