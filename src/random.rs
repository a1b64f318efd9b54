//! Generate random numbers.

/// Generate a random number between the range.
///
/// # Arguments
///
/// * `min` - Start of the random value, must be smaller than `max`.
/// * `max` - End of the random value, must be bigger than `min`.
///
/// # Returns
///
/// - A random number between `min` and `max`.
#[must_use]
pub fn random(min: f32, max: f32) -> f32 {
    fastrand::f32() * (max - min) + min
}

/// Pick a uniformly random index below the limit.
#[must_use]
pub(crate) fn index(len: usize) -> usize {
    fastrand::usize(..len)
}
