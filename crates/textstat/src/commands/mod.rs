//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod info;
pub mod live;
pub mod reading_time;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = byte_len(metadata.len());
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// File length as `usize`, saturating where `u64` does not fit.
fn byte_len(len: u64) -> usize {
    usize::try_from(len).unwrap_or(usize::MAX)
}

/// Read all of `reader`, failing once more than `max_bytes` arrive.
pub fn read_input_stream<R: Read>(
    mut reader: R,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    let mut content = String::new();
    match max_bytes {
        Some(max) => {
            reader
                .take(max as u64 + 1)
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            if content.len() > max {
                anyhow::bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            reader
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
        }
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_within_limit() {
        let text = read_input_stream("hello world".as_bytes(), Some(11)).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn stream_over_limit_fails() {
        let err = read_input_stream("hello world".as_bytes(), Some(5)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn stream_without_limit() {
        let text = read_input_stream("x".repeat(10_000).as_bytes(), None).unwrap();
        assert_eq!(text.len(), 10_000);
    }

    #[test]
    fn file_over_limit_fails_before_reading() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "0123456789").unwrap();
        let path = Utf8Path::from_path(tmp.path()).unwrap();

        assert!(read_input_file(path, Some(4)).is_err());
        assert_eq!(read_input_file(path, Some(10)).unwrap(), "0123456789");
    }

    #[test]
    fn byte_len_saturates() {
        assert_eq!(byte_len(0), 0);
        assert_eq!(byte_len(4096), 4096);
        assert_eq!(byte_len(u64::MAX), usize::MAX);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_input_file(Utf8Path::new("/nonexistent/input.txt"), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/input.txt"));
    }
}
