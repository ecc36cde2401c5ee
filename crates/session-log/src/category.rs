//! Known session log categories and logger naming

/// Namespace prefix for every category logger
pub const NAMESPACE: &str = "org.eclipse.persistence.logging";

/// Fallback category for entries without a known category
pub const DEFAULT_CATEGORY: &str = "default";

/// Categories the host framework logs under
pub const KNOWN_CATEGORIES: &[&str] = &[
    "cache",
    "connection",
    "ddl",
    "dms",
    "ejb",
    "event",
    "jpa",
    "jpars",
    "metadata",
    "metamodel",
    "misc",
    "monitoring",
    "moxy",
    "propagation",
    "properties",
    "query",
    "sequencing",
    "server",
    "sql",
    "transaction",
    "weaver",
];

/// Backend logger name for a category
pub fn logger_name(namespace: &str, category: &str) -> String {
    format!("{namespace}.{category}")
}
