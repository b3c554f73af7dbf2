use crate::entry::WordEntry;

/// Counts cataloged words per length (in chars).
///
/// Index `n` holds the number of words of length `n`. Words at least
/// `bins` long are clamped into the last bin, so the counts always sum to
/// the number of entries.
#[tracing::instrument(skip(entries))]
pub fn length_histogram(entries: &[WordEntry], bins: usize) -> Vec<usize> {
    let mut histogram = vec![0; bins];
    let Some(last) = bins.checked_sub(1) else {
        return histogram;
    };

    for entry in entries {
        let len = entry.text().chars().count();
        if len > last {
            tracing::debug!(word = entry.text(), len, bin = last, "word longer than histogram, clamping");
        }
        histogram[len.min(last)] += 1;
    }
    histogram
}
