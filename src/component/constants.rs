/// Instance identifier used when a caller does not name one explicitly.
pub const DEFAULT_ENTRY_NAME: &str = "[DEFAULT]";
