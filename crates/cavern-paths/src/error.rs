use std::fmt;

use crate::Cost;

/// Errors reported by path searches and graph validation.
///
/// An unreachable goal is not an error: searches return an infinite cost
/// instead (see [`PathResult::is_reachable`](crate::PathResult::is_reachable)).
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// The start location is not a key of the graph. Holds its `Debug`
    /// rendering.
    UndefinedStart(String),
    /// An edge weight is negative or NaN.
    MalformedGraph {
        from: String,
        to: String,
        weight: Cost,
    },
    /// The search finalized `expanded` locations without reaching the goal,
    /// hitting [`SearchConfig::max_expansions`](crate::SearchConfig::max_expansions).
    ExpansionLimit { expanded: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedStart(start) => {
                write!(f, "start location {start} is not defined in the graph")
            }
            Self::MalformedGraph { from, to, weight } => {
                write!(f, "edge {from} -> {to} has invalid weight {weight}")
            }
            Self::ExpansionLimit { expanded } => {
                write!(f, "search gave up after expanding {expanded} locations")
            }
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        let e = PathError::UndefinedStart("\"Nowhere\"".to_string());
        assert_eq!(e.to_string(), "start location \"Nowhere\" is not defined in the graph");

        let e = PathError::MalformedGraph {
            from: "A".into(),
            to: "B".into(),
            weight: -1.0,
        };
        assert_eq!(e.to_string(), "edge A -> B has invalid weight -1");

        let e = PathError::ExpansionLimit { expanded: 3 };
        assert!(e.to_string().contains('3'));
    }
}
