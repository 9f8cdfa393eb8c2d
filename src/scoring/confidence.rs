// How far the score is from zero, discounted per red flag.

const POINTS_TO_PERCENT: i64 = 8;
const PENALTY_PER_FLAG: i64 = 8;
const MAX_PENALTY: i64 = 40;
/// Lower bound once the red-flag penalty has been applied.
pub const PENALIZED_FLOOR: u8 = 10;

/// Compute a 0–100 confidence from the aggregate score and red-flag count.
///
/// `raw = clamp(|score| * 8, 0, 100)`. With red flags present the penalty is
/// `min(count * 8, 40)` and the result never drops below 10.
pub fn compute_confidence(score: i32, red_flag_count: usize) -> u8 {
    let raw = (i64::from(score).abs() * POINTS_TO_PERCENT).clamp(0, 100);

    if red_flag_count == 0 {
        return raw as u8;
    }

    let count = i64::try_from(red_flag_count).unwrap_or(i64::MAX);
    let penalty = count.saturating_mul(PENALTY_PER_FLAG).min(MAX_PENALTY);
    (raw - penalty).max(i64::from(PENALIZED_FLOOR)) as u8
}
