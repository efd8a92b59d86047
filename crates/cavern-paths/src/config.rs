/// Tunables for [`PathFinder`](crate::PathFinder) searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of locations an A* search may finalize before giving
    /// up with [`PathError::ExpansionLimit`](crate::PathError::ExpansionLimit).
    /// `None` (the default) searches until the frontier is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Builder: cap the number of expanded locations.
    #[must_use]
    pub fn max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Builder: remove any expansion cap.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_expansions = None;
        self
    }

    /// Whether a search that has already expanded `expanded` locations must
    /// stop before expanding another.
    #[inline]
    pub(crate) fn exhausted(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.max_expansions, None);
        assert!(!cfg.exhausted(usize::MAX));
    }

    #[test]
    fn builder_sets_cap() {
        let cfg = SearchConfig::default().max_expansions(2);
        assert!(!cfg.exhausted(1));
        assert!(cfg.exhausted(2));
        assert_eq!(cfg.unbounded(), SearchConfig::default());
    }
}
