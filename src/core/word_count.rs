use crate::core::WordReport;

pub const WORD_LIMIT: usize = 50;

/// Counts whitespace-delimited words. Empty or blank text yields zero.
pub fn count(text: &str) -> WordReport {
    let count = text.split_whitespace().count();
    let exceeded = count > WORD_LIMIT;

    tracing::debug!("Counted {} words (exceeded: {})", count, exceeded);

    WordReport { count, exceeded }
}
