use chrono::{DateTime, Local, Utc};

/// Compact count: `1234567` → `1.2M`, `45300` → `45.3K`.
pub fn compact_number(value: u64) -> String {
    match value {
        v if v >= 1_000_000 => format!("{:.1}M", v as f64 / 1_000_000.0),
        v if v >= 1_000 => format!("{:.1}K", v as f64 / 1_000.0),
        v => v.to_string(),
    }
}

/// Signed percentage change with one decimal, e.g. `+12.5%`.
pub fn signed_percent(change: f64) -> String {
    if change > 0.0 {
        format!("+{:.1}%", change)
    } else {
        format!("{:.1}%", change)
    }
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Wall-clock time of the last refresh in the viewer's zone.
pub fn updated_at(stamp: DateTime<Utc>) -> String {
    stamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Bar heights (0..=100) for a sparkline, scaled to the series maximum.
pub fn sparkline_heights(values: &[u64]) -> Vec<u8> {
    let max = values.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0; values.len()];
    }
    values
        .iter()
        .map(|v| ((*v as f64 / max as f64) * 100.0).round() as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(45_300, "45.3K")]
    #[case(1_234_567, "1.2M")]
    fn test_compact_number(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(compact_number(value), expected);
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(signed_percent(12.54), "+12.5%");
        assert_eq!(signed_percent(-3.0), "-3.0%");
        assert_eq!(signed_percent(0.0), "0.0%");
    }

    #[test]
    fn test_sparkline_heights_scale_to_max() {
        assert_eq!(sparkline_heights(&[50, 100, 25]), vec![50, 100, 25]);
        assert_eq!(sparkline_heights(&[0, 0]), vec![0, 0]);
        assert!(sparkline_heights(&[]).is_empty());
    }
}
