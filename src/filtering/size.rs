// src/filtering/size.rs

/// Checks if a file size is within the configured limit (inclusive).
#[inline]
pub fn passes_size_filter(size: u64, max_file_size: u64) -> bool {
    size <= max_file_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_size_within_limit() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("file.txt");
        fs::write(&file_path, "1234567890")?; // 10 bytes
        let metadata = fs::metadata(&file_path)?;
        assert!(passes_size_filter(metadata.len(), 10));
        assert!(!passes_size_filter(metadata.len(), 9));
        Ok(())
    }

    #[test]
    fn test_size_zero_limit() {
        assert!(passes_size_filter(0, 0));
        assert!(!passes_size_filter(1, 0));
    }
}
