pub const DATABASE_COMPONENT_NAME: &str = "database";

/// Host suffix of databases created in the default (`us-central1`) region.
pub const DEFAULT_DATABASE_DOMAIN: &str = "firebaseio.com";
