use crate::common::series::SeriesPair;
use crate::common::walk_exception::WalkError;
use crate::stats::descriptive::mean;
use crate::stats::partition::partition_most_recent_first;

/// Simple moving average over fixed-size partitions of the samples.
///
/// Partitions run newest-to-oldest, each y value is one partition's mean,
/// and the means are flipped back to chronological order. Each x value is
/// the cumulative day count at the end of its partition, accumulated from
/// the oldest remaining partition forward, so the short leftover partition
/// of oldest samples (if any) lands on the earliest day.
pub fn simple_moving_average(samples: &[f64], period: usize) -> Result<SeriesPair, WalkError> {
    let partitions = partition_most_recent_first(samples, period)?;

    let mut x = Vec::with_capacity(partitions.len());
    let mut y = Vec::with_capacity(partitions.len());
    let mut day_count = 0;
    for (newest, oldest) in partitions.iter().zip(partitions.iter().rev()) {
        y.push(mean(newest)?);
        day_count += oldest.len();
        x.push(day_count);
    }

    // y was built newest-first; restore chronological order
    y.reverse();

    Ok(SeriesPair { x, y })
}
