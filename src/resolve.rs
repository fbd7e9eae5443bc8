use crate::error::{Error, Result};
use crate::parse::Canteen;

/// Picks the canteen `query` names: an exact case-insensitive match first,
/// otherwise the single canteen whose name contains `query`. A blank query
/// falls back to `default_canteen`.
pub fn resolve_canteen<'a>(
    query: &str,
    default_canteen: &str,
    canteens: &'a [Canteen],
) -> Result<&'a Canteen> {
    let query = match query.trim() {
        "" => default_canteen.trim(),
        q => q,
    };
    if query.is_empty() {
        return Err(Error::NoDefaultCanteen);
    }
    let folded = query.to_lowercase();

    if let Some(exact) = canteens
        .iter()
        .find(|canteen| canteen.name().to_lowercase() == folded)
    {
        return Ok(exact);
    }

    let hits: Vec<&Canteen> = canteens
        .iter()
        .filter(|canteen| canteen.name().to_lowercase().contains(&folded))
        .collect();
    match hits.as_slice() {
        [only] => Ok(*only),
        [] => Err(Error::CanteenNotFound {
            query: query.to_string(),
            available: names(canteens.iter()),
        }),
        _ => Err(Error::AmbiguousCanteen {
            query: query.to_string(),
            candidates: names(hits.into_iter()),
        }),
    }
}

fn names<'a>(canteens: impl Iterator<Item = &'a Canteen>) -> Vec<String> {
    canteens.map(|canteen| canteen.name().to_string()).collect()
}
