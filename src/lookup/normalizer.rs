use super::types::{Country, LookupError};
use crate::directory::types::RawCountry;

/// Collapses the upstream candidate list into one canonical record.
///
/// Selection is exact-match-else-first: the first candidate whose common name
/// equals `query` byte-for-byte wins, otherwise the first candidate does.
pub fn normalize(candidates: &[RawCountry], query: &str) -> Result<Country, LookupError> {
    let selected = select_candidate(candidates, query).ok_or(LookupError::NotFound)?;

    let capital = selected.capital.first().cloned().ok_or_else(|| {
        LookupError::UpstreamInvalidResponse(format!(
            "missing capital data for {}",
            selected.name.common
        ))
    })?;

    // Iteration order over the currency map is not defined upstream; when a
    // country lists several currencies, any one of them may be picked.
    let currency = selected
        .currencies
        .values()
        .next()
        .map(|c| c.symbol.clone())
        .unwrap_or_default();

    Ok(Country {
        name: selected.name.common.clone(),
        capital,
        currency,
        population: selected.population,
    })
}

fn select_candidate<'a>(candidates: &'a [RawCountry], query: &str) -> Option<&'a RawCountry> {
    candidates
        .iter()
        .find(|candidate| candidate.name.common == query)
        .or_else(|| candidates.first())
}
