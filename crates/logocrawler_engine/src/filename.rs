/// Characters never allowed in a stored filename.
const FORBIDDEN: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Filesystem-safe, deterministic identifier: forbidden characters become
/// `_`, outer `.`/space padding and any leading sanitized scheme marker
/// (`http___` / `https___`) are stripped. Runs to a fixed point, so the
/// function is idempotent.
pub fn sanitize_identifier(input: &str) -> String {
    let replaced: String = input
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect();

    let mut rest = replaced.as_str();
    loop {
        let pass = rest.trim_matches(&['.', ' '][..]);
        let pass = pass
            .strip_prefix("https___")
            .or_else(|| pass.strip_prefix("http___"))
            .unwrap_or(pass);
        if pass == rest {
            break;
        }
        rest = pass;
    }
    rest.to_string()
}

/// Filename for a stored logo image.
pub fn logo_filename(identifier: &str) -> String {
    format!("image_{}.jpg", sanitize_identifier(identifier))
}
