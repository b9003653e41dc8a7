/// Inflated-size ceiling that tools in this workspace apply by default.
///
/// The library itself enforces nothing unless a limit is configured.
pub const RECOMMENDED_MAX_DECOMPRESSED_SIZE: usize = 64 * 1024 * 1024;

/// Caller-side decode policy.
///
/// ```text
/// ┌───────────────────────┬─────────┬─────────────────────────────────────┐
/// │ Field                 │ Default │ Effect                              │
/// ├───────────────────────┼─────────┼─────────────────────────────────────┤
/// │ max_decompressed_size │ None    │ Reject gzip envelopes that inflate  │
/// │                       │         │ past this many bytes                │
/// └───────────────────────┴─────────┴─────────────────────────────────────┘
/// ```
///
/// Map payloads come from device firmware and the gzip envelope can be
/// attacker-controlled. Callers that handle untrusted input should set a
/// limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    pub max_decompressed_size: Option<usize>,
}

impl DecoderConfig {
    /// A config that refuses envelopes inflating past `bytes`.
    #[must_use]
    pub fn with_limit(bytes: usize) -> Self {
        Self {
            max_decompressed_size: Some(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_limit() {
        assert_eq!(DecoderConfig::default().max_decompressed_size, None);
    }

    #[test]
    fn with_limit_sets_ceiling() {
        let config = DecoderConfig::with_limit(RECOMMENDED_MAX_DECOMPRESSED_SIZE);
        assert_eq!(config.max_decompressed_size, Some(64 * 1024 * 1024));
    }
}
