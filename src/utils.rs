use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Context;

/// Load private keys from a text file, one hex key per line. Blank lines and
/// `#` comments are skipped. Keys are returned as-is; normalization happens
/// at derivation time.
pub fn load_private_keys(path: impl AsRef<Path>) -> anyhow::Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read keys file {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Format an address truncated for display
pub fn format_address(address: &str) -> String {
    if address.len() <= 12 {
        address.to_string()
    } else {
        format!("{}...{}", &address[..6], &address[address.len() - 6..])
    }
}

/// Format timestamp in human-readable format
pub fn format_timestamp(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Spaces request starts across the whole batch: each `wait` reserves the
/// next free slot on a shared schedule, so pacing holds no matter how many
/// tasks run concurrently.
pub struct RateLimiter {
    delay: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            next_slot: Mutex::new(None),
        }
    }

    pub async fn wait(&self) {
        if self.delay.is_zero() {
            return;
        }

        let wait_for = {
            let mut next_slot = self.next_slot.lock().unwrap();
            let now = Instant::now();
            match *next_slot {
                Some(slot) if slot > now => {
                    *next_slot = Some(slot + self.delay);
                    slot - now
                }
                _ => {
                    *next_slot = Some(now + self.delay);
                    Duration::ZERO
                }
            }
        };

        if !wait_for.is_zero() {
            tokio::time::sleep(wait_for).await;
        }
    }
}

/// Print a formatted table border
pub fn print_table_border(width: usize) {
    println!("{}", "=".repeat(width));
}

/// Print a table row with columns
pub fn print_table_row(columns: &[&str], widths: &[usize]) {
    let mut row = String::new();
    for (i, col) in columns.iter().enumerate() {
        if i < widths.len() {
            row.push_str(&format!("{:<width$}  ", col, width = widths[i]));
        }
    }
    println!("{}", row.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_private_keys_skips_blanks_and_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# funded wallets").unwrap();
        writeln!(file, "0xaaa").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  bbb  ").unwrap();
        file.flush().unwrap();

        let keys = load_private_keys(file.path()).unwrap();
        assert_eq!(keys, vec!["0xaaa".to_string(), "bbb".to_string()]);
    }

    #[test]
    fn load_private_keys_reports_missing_file() {
        let err = load_private_keys("does/not/exist.txt").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn format_address_truncates_long_addresses() {
        assert_eq!(format_address("0xshort"), "0xshort");
        assert_eq!(
            format_address("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"),
            "0x7E5F...395Bdf"
        );
    }

    #[tokio::test]
    async fn rate_limiter_spaces_calls() {
        let limiter = RateLimiter::new(30);
        let start = Instant::now();
        limiter.wait().await;
        limiter.wait().await;
        limiter.wait().await;
        // First call is free; the next two are spaced one delay apart each.
        assert!(start.elapsed() >= Duration::from_millis(60));
    }

    #[tokio::test]
    async fn zero_delay_rate_limiter_never_sleeps() {
        let limiter = RateLimiter::new(0);
        let start = Instant::now();
        for _ in 0..100 {
            limiter.wait().await;
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
