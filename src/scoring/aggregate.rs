// Folds partial results into one.

use super::result::PartialResult;

/// Combine partial results in category order.
///
/// Points are a plain sum. Flags are unioned with exact-label deduplication,
/// keeping first-seen order. Details are concatenated as emitted.
pub fn aggregate<I>(partials: I) -> PartialResult
where
    I: IntoIterator<Item = PartialResult>,
{
    let mut total = PartialResult::new();
    for partial in partials {
        total.points += partial.points;
        total.red_flags.extend(&partial.red_flags);
        total.green_flags.extend(&partial.green_flags);
        total.details.extend(partial.details);
    }
    total
}
