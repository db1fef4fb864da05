//! Construction-site capture for mocks.

use std::fmt;
use std::panic::Location;

/// Where a [`MockFunc`](super::MockFunc) was created.
///
/// Captured through `#[track_caller]`, so it points at the line that
/// constructed the mock (usually a field initializer of a test double)
/// rather than at this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    name: Option<&'static str>,
    location: &'static Location<'static>,
}

impl CallSite {
    /// Capture the caller's location.
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        Self {
            name: None,
            location: Location::caller(),
        }
    }

    /// Capture the caller's location and attach a readable name.
    #[must_use]
    #[track_caller]
    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            location: Location::caller(),
        }
    }

    /// The name given at construction, if any.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Source file of the construction site.
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// Line of the construction site.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.location.line()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "`{name}` ({})", self.location),
            None => write!(f, "{}", self.location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_here_points_at_caller() {
        let line = line!() + 1;
        let site = CallSite::here();

        assert_eq!(site.file(), file!());
        assert_eq!(site.line(), line);
        assert!(site.name().is_none());
    }

    #[test]
    fn test_display() {
        let site = CallSite::named("load_mock");
        let shown = site.to_string();

        assert!(shown.starts_with("`load_mock` ("));
        assert!(shown.contains(&format!("{}:{}", file!(), site.line())));
        assert!(!CallSite::here().to_string().contains('`'));
    }
}
