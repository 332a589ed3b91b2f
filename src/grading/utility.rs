/// Credit-weighted mean of `(value, weight)` pairs expressed in hundredths,
/// rounded half-up. Returns 0 when the weights sum to zero.
pub fn weighted_mean_hundredths(pairs: impl IntoIterator<Item = (u64, u64)>) -> u64 {
    let (weighted, weights) = pairs
        .into_iter()
        .fold((0u64, 0u64), |(sum, w), (value, weight)| {
            (sum + value * weight, w + weight)
        });

    if weights == 0 {
        return 0;
    }
    (weighted * 200 + weights) / (weights * 2)
}

/// Formats a hundredths value as a decimal string with two fractional digits.
pub fn format_hundredths(hundredths: u64) -> String {
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
