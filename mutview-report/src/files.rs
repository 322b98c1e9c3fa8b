//! Source reading and content-addressed output naming.

use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

pub fn read_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

pub fn split_lines(data: &str) -> Vec<&str> {
    data.lines().collect()
}

fn short_digest(bytes: &[u8]) -> String {
    let hex = hex::encode(Sha256::digest(bytes));
    hex[hex.len() - 12..].to_owned()
}

/// Report filename for a source file: `<prefix><12-hex>_<name>.html`, with
/// the digest taken over the file's resolved parent directory so files with
/// equal base names in different directories never collide. Resolution is
/// lexical, keeping names independent of symlink state.
pub fn hashed_report_filename(file_path: &Path, prefix: &str) -> io::Result<String> {
    let resolved = std::path::absolute(file_path)?;
    let parent = resolved.parent().unwrap_or(Path::new(""));
    let digest = short_digest(parent.to_string_lossy().as_bytes());
    let name = resolved
        .file_name()
        .map(|n| n.to_string_lossy().replace('.', "_"))
        .unwrap_or_default();
    Ok(format!("{}{}_{}.html", prefix, digest, name))
}

/// Writes an embedded asset under a name addressed by its own content and
/// returns that name.
pub fn write_hashed_asset(out_dir: &Path, name: &str, contents: &str, prefix: &str) -> io::Result<String> {
    let file_name = format!("{}{}_{}", prefix, short_digest(contents.as_bytes()), name);
    fs::write(out_dir.join(&file_name), contents)?;
    Ok(file_name)
}
