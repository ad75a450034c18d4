pub use crate::component::constants::DEFAULT_ENTRY_NAME;
