//! Full-page navigation to the patient and hospital apps

use url::Url;

/// Point `window.location` at an external URL
#[cfg(feature = "hydrate")]
pub fn navigate_to(url: &Url) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    window
        .location()
        .set_href(url.as_str())
        .map_err(|e| format!("{:?}", e))
}

/// Server stub: there is no browser to navigate
#[cfg(not(feature = "hydrate"))]
pub fn navigate_to(_url: &Url) -> Result<(), String> {
    Ok(())
}
