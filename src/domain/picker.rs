//! Uniform random selection over filtered candidates.
//!
//! [`choose`] picks one restaurant uniformly at random from the active
//! subset of a candidate slice. The two failure cases are distinct: an
//! empty slice means the filter matched nothing, while a non-empty slice
//! with no active entry means everything that matched has been disabled.
//! Callers that request active-only listings never hit the second case;
//! the check stays for callers that pass activity-unfiltered lists.

use rand::seq::SliceRandom;
use rand::Rng;

use super::restaurant::Restaurant;
use crate::error::{Error, Result};

/// Pick one active restaurant uniformly at random from `candidates`.
///
/// # Errors
/// Returns [`Error::NoCandidates`] when the slice is empty and
/// [`Error::NoActiveCandidates`] when no candidate is active.
pub fn choose<'a, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &'a [Restaurant],
) -> Result<&'a Restaurant> {
    if candidates.is_empty() {
        return Err(Error::NoCandidates);
    }

    let pool: Vec<&Restaurant> = candidates.iter().filter(|r| r.is_active).collect();
    pool.choose(rng).copied().ok_or(Error::NoActiveCandidates)
}
