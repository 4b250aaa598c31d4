/// ALPN registry and negotiation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    diagnostics: bool,
    strict_selection: bool,
}

impl Config {
    /// Create a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            diagnostics: false,
            strict_selection: true,
        }
    }

    /// Whether registry and negotiation events are logged.
    ///
    /// Events go to the `log` facade at debug level.
    #[inline(always)]
    pub fn diagnostics(&self) -> bool {
        self.diagnostics
    }

    /// Whether a server selection that the client never offered is
    /// treated as a rejection.
    #[inline(always)]
    pub fn strict_selection(&self) -> bool {
        self.strict_selection
    }
}

/// Builder for [`Config`].
pub struct ConfigBuilder {
    diagnostics: bool,
    strict_selection: bool,
}

impl ConfigBuilder {
    /// Log registry and negotiation events.
    ///
    /// Defaults to false.
    pub fn diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// Reject a server selection that is not in the client's offered list.
    ///
    /// When disabled, such a selection is forwarded to the client unchanged.
    /// Defaults to true.
    pub fn strict_selection(mut self, strict: bool) -> Self {
        self.strict_selection = strict;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Config {
        Config {
            diagnostics: self.diagnostics,
            strict_selection: self.strict_selection,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}
