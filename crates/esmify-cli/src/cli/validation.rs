use esmify::GlobFilter;

/// Parse and validate a glob pattern given on the command line.
///
/// Supported syntax is `*` within a path segment, `**` across segments and
/// brace lists such as `*.{js,ts}`.
///
/// # Errors
///
/// Returns an error message if the pattern is empty or does not compile.
pub fn parse_glob(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("Glob pattern cannot be empty".to_string());
    }

    GlobFilter::new(&[s], &[] as &[&str]).map_err(|e| e.to_string())?;

    Ok(s.to_string())
}
