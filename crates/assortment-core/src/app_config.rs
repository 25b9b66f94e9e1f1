/// Per-installation credentials for the Spreadshirt shop API.
///
/// Both values are supplied by whoever installs the picker and are checked by
/// [`crate::validate_parameters`] before any request is made.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct InstallationParameters {
    pub shop_id: String,
    pub api_key: String,
}

impl std::fmt::Debug for InstallationParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallationParameters")
            .field("shop_id", &self.shop_id)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    ""
                } else {
                    "[redacted]"
                },
            )
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub installation: InstallationParameters,
    pub api_base_url: String,
    pub page_size: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("installation", &self.installation)
            .field("api_base_url", &self.api_base_url)
            .field("page_size", &self.page_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
