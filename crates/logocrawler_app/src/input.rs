use std::io::BufRead;

/// Collect website domains from `reader`, one per line, stopping at the
/// first blank line (or end of input). Surrounding whitespace is trimmed.
pub fn collect_websites<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut websites = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        websites.push(trimmed.to_string());
    }
    Ok(websites)
}
