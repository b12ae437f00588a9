//! File helpers shared by the commands.

use std::io;
use std::path::Path;

/// Reads a UTF-8 file, dropping a leading byte order mark.
pub fn read_text(path: &Path) -> io::Result<String> {
    let mut content = std::fs::read_to_string(path)?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Creates the directories above `path` when missing.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_is_stripped() {
        let mut s = "\u{feff}{\"kind\":\"round\"}".to_string();
        strip_utf8_bom(&mut s);
        assert!(s.starts_with('{'));

        let mut plain = "abc".to_string();
        strip_utf8_bom(&mut plain);
        assert_eq!(plain, "abc");
    }

    #[test]
    fn parent_dirs_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("hands.jsonl");
        ensure_parent_dir(&nested).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
        ensure_parent_dir(Path::new("bare.jsonl")).unwrap();
    }

    #[test]
    fn read_text_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("absent.jsonl")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
