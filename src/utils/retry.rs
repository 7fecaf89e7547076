//! Bounded draw-and-reserve loop.
//!
//! Used by the code generator: draw a candidate, try to reserve it, and give
//! up after a fixed number of independent attempts.

use std::future::Future;

/// Draws up to `max_attempts` candidates and returns the first one the
/// `reserve` predicate accepts.
///
/// `reserve` resolves to `Ok(Some(_))` on success and `Ok(None)` when the
/// candidate is taken. Errors abort the loop immediately.
///
/// Returns `Ok(None)` once every attempt has been rejected.
pub async fn first_reserved<C, T, E, D, R, Fut>(
    max_attempts: usize,
    mut draw: D,
    mut reserve: R,
) -> Result<Option<T>, E>
where
    D: FnMut() -> C,
    R: FnMut(C) -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    for attempt in 1..=max_attempts {
        if let Some(reserved) = reserve(draw()).await? {
            return Ok(Some(reserved));
        }
        tracing::debug!(attempt, max_attempts, "Candidate already taken");
    }

    Ok(None)
}
