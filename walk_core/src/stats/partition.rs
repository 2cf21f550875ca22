use crate::common::walk_exception::{ErrCode, WalkError};

/// Partition samples into chunks of `chunk_size`, most recent data first.
///
/// The input is reversed so the newest samples fill whole chunks from the
/// front; whatever is left of the oldest samples forms one short trailing
/// partition. `chunk_size` must be at least 1.
pub fn partition_most_recent_first(
    samples: &[f64],
    chunk_size: usize,
) -> Result<Vec<Vec<f64>>, WalkError> {
    if chunk_size == 0 {
        return Err(WalkError::new(
            "partition chunk size must be >= 1",
            ErrCode::InvalidArgument,
        ));
    }

    let reversed: Vec<f64> = samples.iter().rev().copied().collect();
    let border = (reversed.len() / chunk_size) * chunk_size;

    let mut partitions: Vec<Vec<f64>> = reversed[..border]
        .chunks(chunk_size)
        .map(|chunk| chunk.to_vec())
        .collect();

    // leftover oldest samples become one short partition
    if border < reversed.len() {
        partitions.push(reversed[border..].to_vec());
    }

    Ok(partitions)
}
