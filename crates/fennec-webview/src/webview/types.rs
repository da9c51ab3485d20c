/// Configuration for creating the content web view.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// URL to load on creation. Usually `None`: the shell decides the
    /// startup page once the surface is attached.
    pub initial_url: Option<String>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether the web view background should be transparent.
    pub transparent: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            initial_url: None,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Fennec/{}", env!("CARGO_PKG_VERSION"))),
            transparent: false,
        }
    }
}
