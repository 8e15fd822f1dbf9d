use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole transcript from a file, or from stdin when `path` is `None`.
pub fn read_transcript(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript from {}", path.display())),
        None => read_from(std::io::stdin().lock()).context("failed to read transcript from stdin"),
    }
}

pub fn read_from(mut reader: impl Read) -> std::io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "uno dos tres").unwrap();
        let text = read_transcript(Some(file.path())).unwrap();
        assert_eq!(text, "uno dos tres");
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = read_transcript(Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.txt"));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        assert!(read_from(&[0xff, 0xfe, 0x00][..]).is_err());
    }
}
