//! Session settings.

/// Fixed names and defaults a [`Session`](crate::Session) starts from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Base color used when no valid color is supplied.
    pub default_base_color: String,
    /// Query string parameter carrying a base color.
    pub query_param: String,
    /// Preference store key for the short-name display flag.
    pub short_names_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_base_color: "#2ac20d".to_string(),
            query_param: "color".to_string(),
            short_names_key: "useShortNames".to_string(),
        }
    }
}
