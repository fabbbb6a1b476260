// crates/domain/src/age.rs

/// Age assigned to every grade level of 14 and above.
pub const AGE_CAP: i64 = 30;

/// Estimated reader age for a grade-level score.
///
/// The score is rounded half away from zero (2.5 → 3, -2.5 → -3) and then
/// mapped piecewise: below 3 adds 5, below 13 adds 6, below 14 adds 11, and
/// anything higher is capped at [`AGE_CAP`].
#[allow(clippy::cast_possible_truncation)]
pub fn estimate_age(score: f64) -> i64 {
    let grade = score.round() as i64;
    match grade {
        ..3 => grade + 5,
        3..13 => grade + 6,
        13 => grade + 11,
        _ => AGE_CAP,
    }
}
