use web_sys::window;

fn get_origin() -> String {
    // Use the current host so the app keeps working when accessed from
    // another machine on the network
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            let protocol = window
                .location()
                .protocol()
                .unwrap_or_else(|_| "https:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    // Default for development
    "https://symfo-gobelins.test".to_string()
}

/// API root; every gateway path is appended to this.
pub fn get_api_base_url() -> String {
    format!("{}/api", get_origin())
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_origin(), path)
    }
}
