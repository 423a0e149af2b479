//! Human-readable formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with the unit chosen by magnitude, e.g. `2048` →
/// `"2 KB"`. Values are rounded to two decimals with trailing zeros
/// trimmed; anything at or beyond the largest unit stays in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    // 1024 = 2^10, so the unit index is the floor base-1024 log.
    let exponent = ((bytes.ilog2() / 10) as usize).min(SIZE_UNITS.len() - 1);

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');

    format!("{trimmed} {}", SIZE_UNITS[exponent])
}
