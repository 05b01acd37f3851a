//! File helpers shared by commands that read or write game records.
//!
//! Game-record files may be plain JSONL or Zstandard-compressed
//! (`.jsonl.zst`); [`read_text_auto`] picks the right reader from the
//! extension.

use std::path::Path;

/// Upper bound for a decompressed record file.
const MAX_DECOMPRESSED: usize = 64 * 1024 * 1024;

/// Read a text file, decompressing `.zst` files and stripping a UTF-8 BOM.
///
/// ```rust,no_run
/// # use nines_cli::io_utils::read_text_auto;
/// let content = read_text_auto("data/games.jsonl").unwrap();
/// let packed = read_text_auto("data/games.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::bulk::decompress(&comp, MAX_DECOMPRESSED).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Whether `path` names a game-record file by extension.
pub fn is_record_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|f| f.ends_with(".jsonl") || f.ends_with(".jsonl.zst"))
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
