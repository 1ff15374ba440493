use crate::models::distribution::{Distribution, DistributionEntry, DistributionKind};
use crate::models::report::AgeSummary;

pub const AGE_BAND_WIDTH: i32 = 5;

/// Start of the `[k, k+5)` band containing `age`.
pub fn band_start(age: i32) -> i32 {
    age.div_euclid(AGE_BAND_WIDTH) * AGE_BAND_WIDTH
}

pub fn band_label(start: i32) -> String {
    format!("{}-{}", start, start + AGE_BAND_WIDTH - 1)
}

/// Bin ages into contiguous 5-year bands from 0 up to the band holding the
/// oldest age. Empty bands inside that range are kept; nothing is emitted
/// past the last occupied band.
///
/// Negative ages are expected to be filtered out by the caller.
pub fn age_distribution(ages: &[i32]) -> Distribution {
    let Some(&max) = ages.iter().max() else {
        return Distribution::new(DistributionKind::Age, Vec::new());
    };

    let bands = (band_start(max) / AGE_BAND_WIDTH + 1) as usize;
    let mut counts = vec![0usize; bands];
    for &age in ages {
        counts[(band_start(age) / AGE_BAND_WIDTH) as usize] += 1;
    }

    let entries = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| DistributionEntry {
            label: band_label(i as i32 * AGE_BAND_WIDTH),
            count,
        })
        .collect();

    Distribution::new(DistributionKind::Age, entries)
}

/// Mean, min and max. `None` for no ages.
///
/// The mean is kept unrounded; `utils::formatting::one_decimal` renders it.
pub fn summarize_ages(ages: &[i32]) -> Option<AgeSummary> {
    let min = *ages.iter().min()?;
    let max = *ages.iter().max()?;
    let sum: i64 = ages.iter().map(|&a| i64::from(a)).sum();
    let mean = sum as f64 / ages.len() as f64;

    Some(AgeSummary {
        mean,
        min,
        max,
    })
}
