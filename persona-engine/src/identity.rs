use persona_core::CoreError;
use url::Url;

/// Normalize a profile URL or handle into a bare username.
///
/// `https://.../user/<name>/...` yields `<name>`; `u/<name>`, `/u/<name>`
/// and bare handles pass through with the prefix stripped. Anything that
/// leaves no username is `InvalidIdentifier`.
pub fn resolve_username(input: &str) -> Result<String, CoreError> {
    let input = input.trim();

    if input.starts_with("http") {
        return username_from_url(input);
    }

    let handle = input
        .strip_prefix("/u/")
        .or_else(|| input.strip_prefix("u/"))
        .unwrap_or(input);

    if handle.is_empty() {
        return Err(CoreError::InvalidIdentifier {
            input: input.to_string(),
        });
    }
    Ok(handle.to_string())
}

fn username_from_url(input: &str) -> Result<String, CoreError> {
    let invalid = || CoreError::InvalidIdentifier {
        input: input.to_string(),
    };

    let url = Url::parse(input).map_err(|_| invalid())?;
    let mut segments = url.path_segments().ok_or_else(invalid)?;

    if !segments.any(|segment| segment == "user") {
        return Err(invalid());
    }
    match segments.next() {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(invalid()),
    }
}
