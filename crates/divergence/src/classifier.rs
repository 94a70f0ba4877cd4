//! Divergence classifier for a single `(start, end)` pair.

use knox_types::{Direction, Divergence, DivergenceType};

use crate::error::{Result, ensure_range};
use crate::extremum::LocalExtremum;
use crate::series::Series;
use crate::trend::is_connection_possible;

/// Whether the two series moved in opposite directions between `start` and
/// `end`.
///
/// The four clauses are evaluated literally. Together they are false only
/// when both series rise, both fall, or both stay flat; a flat primary
/// against a moving secondary (and the reverse) counts as diverged.
///
/// # Errors
/// Returns [`DivergenceError::InvalidRange`] when `start >= end` and
/// [`DivergenceError::IndexOutOfRange`] past the end of either series.
///
/// [`DivergenceError::InvalidRange`]: crate::DivergenceError::InvalidRange
/// [`DivergenceError::IndexOutOfRange`]: crate::DivergenceError::IndexOutOfRange
#[allow(clippy::nonminimal_bool)]
pub fn is_diverged<P, Q>(primary: &P, secondary: &Q, start: usize, end: usize) -> Result<bool>
where
    P: Series + ?Sized,
    Q: Series + ?Sized,
{
    ensure_range(start, end)?;

    let (p_start, p_end) = (primary.at(start)?, primary.at(end)?);
    let (q_start, q_end) = (secondary.at(start)?, secondary.at(end)?);

    if p_start >= p_end && q_start < q_end {
        return Ok(true);
    }
    if p_start <= p_end && q_start > q_end {
        return Ok(true);
    }
    if p_start > p_end && q_start <= q_end {
        return Ok(true);
    }
    if p_start < p_end && q_start >= q_end {
        return Ok(true);
    }

    Ok(false)
}

/// Classifies the pair `(start, end)`.
///
/// Returns an up divergence when the series diverged, `primary[start]` lies
/// below `primary[end]`, both series stay on or above their straight
/// connection and `primary[start]` is a low against the `neighborhood` bars
/// before it. The down case mirrors it. Returns `None` otherwise.
///
/// # Errors
/// Returns [`DivergenceError::InvalidRange`] when `start >= end`,
/// [`DivergenceError::NotEnoughHistory`] when `start < neighborhood` and the
/// extremum test is reached, and [`DivergenceError::IndexOutOfRange`] past
/// the end of either series.
///
/// [`DivergenceError::InvalidRange`]: crate::DivergenceError::InvalidRange
/// [`DivergenceError::NotEnoughHistory`]: crate::DivergenceError::NotEnoughHistory
/// [`DivergenceError::IndexOutOfRange`]: crate::DivergenceError::IndexOutOfRange
pub fn classify<P, Q>(
    primary: &P,
    secondary: &Q,
    start: usize,
    end: usize,
    neighborhood: usize,
) -> Result<Option<Divergence>>
where
    P: Series + ?Sized,
    Q: Series + ?Sized,
{
    if !is_diverged(primary, secondary, start, end)? {
        return Ok(None);
    }

    let first = primary.at(start)?;
    let last = primary.at(end)?;
    let window = LocalExtremum::previous(neighborhood);

    let kind = if first < last
        && is_connection_possible(primary, start, end, Direction::Up)?
        && is_connection_possible(secondary, start, end, Direction::Up)?
        && window.is_low(primary, start)?
    {
        Some(DivergenceType::Up)
    } else if first > last
        && is_connection_possible(primary, start, end, Direction::Down)?
        && is_connection_possible(secondary, start, end, Direction::Down)?
        && window.is_high(primary, start)?
    {
        Some(DivergenceType::Down)
    } else {
        None
    };

    match kind {
        Some(kind) => Ok(Some(Divergence::new(kind, start, end)?)),
        None => Ok(None),
    }
}
