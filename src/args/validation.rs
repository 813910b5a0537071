use reqwest::Url;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_base_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("The upstream url '{value}' is invalid: {e}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!(
            "The upstream url '{value}' must use http or https, not {}.",
            url.scheme()
        ));
    }
    if url.cannot_be_a_base() {
        return Err(format!("The upstream url '{value}' cannot be used as a base url."));
    }
    // keep a single form so joining paths never produces a double slash
    Ok(value.trim_end_matches('/').to_string())
}

/// # Errors
///
/// Will return `Err` if the timeout is zero
pub fn check_timeout(secs: u64) -> Result<u64, String> {
    if secs == 0 {
        return Err("The upstream timeout must be at least one second.".to_string());
    }
    Ok(secs)
}

/// Static assets are optional, so a missing directory only warrants a warning.
#[must_use]
pub fn static_dir_exists(dir: &str) -> bool {
    let path = PathBuf::from(dir);
    path.is_dir() && fs::metadata(&path).is_ok()
}
