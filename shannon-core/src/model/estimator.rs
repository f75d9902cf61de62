use log::debug;

use super::ngram_table::NGramTable;

/// Computes the empirical Shannon entropy of a symbol sequence.
///
/// # Parameters
/// - `symbols`: the whole decoded input, un-normalized
/// - `n`: n-gram order, 1 for single symbols, 2 for pairs
/// - `text_mode`: normalize code points before counting
///
/// # Returns
/// Bits per symbol. For `n > 1` the n-gram entropy is divided by `n`.
///
/// # Notes
/// - A sequence shorter than `n` (or `n == 0`) gives `0.0`.
/// - Windows that lose a code point to tab removal are not counted; if no
///   window survives the result is `0.0`.
/// - Never negative, never NaN.
pub fn calculate_entropy(symbols: &[char], n: usize, text_mode: bool) -> f64 {
	if n == 0 || symbols.len() < n {
		return 0.0;
	}

	let mut table = NGramTable::with_order(n);
	table.add_symbols(symbols, text_mode);
	debug!(
		"{}-grams: {} windows counted, {} distinct (text_mode={})",
		n,
		table.total(),
		table.distinct(),
		text_mode
	);

	table.entropy()
}

/// Ratio `h2 / h1`, `0.0` when `h1` is zero.
pub fn entropy_ratio(h1: f64, h2: f64) -> f64 {
	if h1 > 0.0 { h2 / h1 } else { 0.0 }
}
