//! Byte-level normalization of migration file contents.
//!
//! Two transforms are applied, in order: a single leading UTF-8 byte-order
//! mark is dropped, then every CRLF pair is collapsed to LF. Neither touches
//! any other byte, so a bare CR stays where it is.

/// The UTF-8 encoding of U+FEFF as written by some editors at file start.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Result of normalizing one file's bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Normalized content
    pub bytes: Vec<u8>,

    /// Whether a leading BOM was removed
    pub bom_removed: bool,

    /// Number of CRLF pairs replaced with LF
    pub crlf_replaced: usize,
}

/// Strip exactly one leading UTF-8 BOM.
///
/// Returns the remaining bytes and whether a BOM was present.
pub fn strip_bom(content: &[u8]) -> (&[u8], bool) {
    match content.strip_prefix(&UTF8_BOM[..]) {
        Some(rest) => (rest, true),
        None => (content, false),
    }
}

/// Replace every CRLF pair with LF, scanning left to right without overlap.
///
/// Returns the converted bytes and the number of pairs replaced.
pub fn crlf_to_lf(content: &[u8]) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(content.len());
    let mut replaced = 0;
    let mut i = 0;

    while i < content.len() {
        if content[i] == CR && content.get(i + 1) == Some(&LF) {
            out.push(LF);
            replaced += 1;
            i += 2;
        } else {
            out.push(content[i]);
            i += 1;
        }
    }

    (out, replaced)
}

/// Remove a leading BOM and convert CRLF line endings to LF.
pub fn normalize(content: &[u8]) -> Normalized {
    let (body, bom_removed) = strip_bom(content);
    let (bytes, crlf_replaced) = crlf_to_lf(body);
    Normalized {
        bytes,
        bom_removed,
        crlf_replaced,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
