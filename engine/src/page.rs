//! Page descriptors and the route registry.
//!
//! Pages declare themselves as immutable descriptor records; the registry is
//! owned by [`crate::App`] (the routing collaborator) and populated once at
//! startup. The TUI mounts the component identified by [`PageKind`] when the
//! current route matches a descriptor's path, and uses `display_name` for
//! navigation UI.

use thiserror::Error;

/// Identifies the renderable component behind a descriptor.
///
/// Closed enum instead of dynamic dispatch: the render layer matches on the
/// kind to mount the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    BenchmarkSubmission,
}

/// Metadata record registering a page with the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    path: &'static str,
    name: &'static str,
    display_name: &'static str,
    kind: PageKind,
}

impl PageDescriptor {
    /// The benchmark submission page.
    #[must_use]
    pub const fn benchmark_submission() -> Self {
        Self {
            path: "/benchmark-submission",
            name: "BenchmarkSubmission",
            display_name: "Benchmark",
            kind: PageKind::BenchmarkSubmission,
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Internal identifier, stable across display renames.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable label shown in navigation UI.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    #[must_use]
    pub const fn kind(&self) -> PageKind {
        self.kind
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageRegistryError {
    /// Paths are the routing key; two pages on one path would shadow each
    /// other.
    #[error("page path already registered: {path}")]
    DuplicatePath { path: &'static str },
}

/// Route table populated at startup, iterated in registration order.
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: Vec<PageDescriptor>,
}

impl PageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: PageDescriptor) -> Result<(), PageRegistryError> {
        if self.pages.iter().any(|p| p.path() == descriptor.path()) {
            return Err(PageRegistryError::DuplicatePath {
                path: descriptor.path(),
            });
        }
        self.pages.push(descriptor);
        Ok(())
    }

    #[must_use]
    pub fn find(&self, path: &str) -> Option<&PageDescriptor> {
        self.pages.iter().find(|p| p.path() == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn other_page(path: &'static str) -> PageDescriptor {
        PageDescriptor {
            path,
            name: "Other",
            display_name: "Other",
            kind: PageKind::BenchmarkSubmission,
        }
    }

    #[test]
    fn benchmark_submission_descriptor() {
        let descriptor = PageDescriptor::benchmark_submission();
        assert_eq!(descriptor.path(), "/benchmark-submission");
        assert_eq!(descriptor.name(), "BenchmarkSubmission");
        assert_eq!(descriptor.display_name(), "Benchmark");
        assert_eq!(descriptor.kind(), PageKind::BenchmarkSubmission);
    }

    #[test]
    fn register_and_find() {
        let mut registry = PageRegistry::new();
        registry
            .register(PageDescriptor::benchmark_submission())
            .unwrap();

        let found = registry.find("/benchmark-submission").unwrap();
        assert_eq!(found.name(), "BenchmarkSubmission");
        assert!(registry.find("/no-such-page").is_none());
    }

    #[test]
    fn duplicate_path_rejected() {
        let mut registry = PageRegistry::new();
        registry
            .register(PageDescriptor::benchmark_submission())
            .unwrap();

        let err = registry
            .register(other_page("/benchmark-submission"))
            .unwrap_err();
        assert_eq!(
            err,
            PageRegistryError::DuplicatePath {
                path: "/benchmark-submission"
            }
        );
        assert_eq!(registry.iter().count(), 1, "rejected page was not added");
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let mut registry = PageRegistry::new();
        registry.register(other_page("/a")).unwrap();
        registry
            .register(PageDescriptor::benchmark_submission())
            .unwrap();
        registry.register(other_page("/z")).unwrap();

        let paths: Vec<_> = registry.iter().map(PageDescriptor::path).collect();
        assert_eq!(paths, vec!["/a", "/benchmark-submission", "/z"]);
    }
}
