//! Category to logger registry

use crate::Result;
use crate::category::{DEFAULT_CATEGORY, logger_name};
use persistence_logger::{Logger, LoggerFactory};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// One backend logger per category, built once and never mutated
pub(crate) struct CategoryLoggers {
    loggers: HashMap<String, Arc<dyn Logger>>,
    default: Arc<dyn Logger>,
}

impl CategoryLoggers {
    /// Acquire every category logger plus the default logger
    pub(crate) fn build(
        factory: &dyn LoggerFactory,
        namespace: &str,
        categories: &[String],
    ) -> Result<Self> {
        let mut loggers = HashMap::<String, Arc<dyn Logger>>::with_capacity(categories.len() + 1);

        for category in categories {
            if category.is_empty()
                || category == DEFAULT_CATEGORY
                || loggers.contains_key(category)
            {
                continue;
            }
            let logger = Self::acquire(factory, namespace, category)?;
            loggers.insert(category.clone(), logger);
        }

        let default = Self::acquire(factory, namespace, DEFAULT_CATEGORY)?;
        loggers.insert(DEFAULT_CATEGORY.to_string(), default.clone());

        debug!(
            "Created {} category loggers under {}",
            loggers.len(),
            namespace
        );

        Ok(Self { loggers, default })
    }

    fn acquire(
        factory: &dyn LoggerFactory,
        namespace: &str,
        category: &str,
    ) -> Result<Arc<dyn Logger>> {
        let name = logger_name(namespace, category);
        factory.get_logger(&name).map_err(|e| {
            error!("Failed to create logger for category {}: {}", category, e);
            e.into()
        })
    }

    /// Logger for a category; absent, empty and unknown names get the default
    #[inline]
    pub(crate) fn resolve(&self, category: Option<&str>) -> &Arc<dyn Logger> {
        match category.and_then(|name| self.loggers.get(name)) {
            Some(logger) => logger,
            None => &self.default,
        }
    }

    /// Number of registered categories, including the default
    pub(crate) fn len(&self) -> usize {
        self.loggers.len()
    }

    /// Every registered handle
    pub(crate) fn handles(&self) -> impl Iterator<Item = &Arc<dyn Logger>> {
        self.loggers.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::category::{KNOWN_CATEGORIES, NAMESPACE};
    use persistence_logger::{Error as LoggerError, MemoryLoggerFactory};

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_builds_one_logger_per_category_plus_default() {
        let factory = MemoryLoggerFactory::new();
        let registry =
            CategoryLoggers::build(&factory, NAMESPACE, &categories(KNOWN_CATEGORIES)).unwrap();

        assert_eq!(registry.len(), KNOWN_CATEGORIES.len() + 1);
        assert_eq!(factory.acquisitions().len(), KNOWN_CATEGORIES.len() + 1);
        assert_eq!(
            factory.acquisition_count("org.eclipse.persistence.logging.default"),
            1
        );
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let factory = MemoryLoggerFactory::new();
        let registry = CategoryLoggers::build(&factory, "ns", &categories(&["sql"])).unwrap();

        let default = registry.resolve(Some(DEFAULT_CATEGORY));
        assert_eq!(default.name(), "ns.default");
        assert_eq!(registry.resolve(Some("sql")).name(), "ns.sql");

        for category in [None, Some(""), Some("nope"), Some("SQL")] {
            assert!(Arc::ptr_eq(registry.resolve(category), default));
        }
    }

    #[test]
    fn test_duplicate_and_reserved_names_are_skipped() {
        let factory = MemoryLoggerFactory::new();
        let names = categories(&["sql", "sql", "default", ""]);
        let registry = CategoryLoggers::build(&factory, "ns", &names).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(factory.acquisitions(), vec!["ns.sql", "ns.default"]);
        assert_eq!(registry.handles().count(), 2);
    }

    #[test]
    fn test_acquisition_failure_propagates() {
        let factory = MemoryLoggerFactory::new().fail_on("ns.cache");
        let result = CategoryLoggers::build(&factory, "ns", &categories(&["sql", "cache"]));

        assert!(matches!(result, Err(Error::Logger(LoggerError::Acquisition { .. }))));
    }
}
