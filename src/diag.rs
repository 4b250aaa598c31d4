/// Switch gating verbose negotiation logging.
///
/// Taken from [`Config::diagnostics`](crate::Config::diagnostics) and handed
/// to each component that traces, instead of living in a global.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Diagnostics {
    enabled: bool,
}

impl Diagnostics {
    pub fn new(enabled: bool) -> Self {
        Diagnostics { enabled }
    }

    #[inline(always)]
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// `debug!` that only fires when diagnostics are on.
macro_rules! diag {
    ($diag:expr, $($arg:tt)+) => {
        if $diag.enabled() {
            log::debug!(target: "alpn_registry", $($arg)+);
        }
    };
}

pub(crate) use diag;
