use serde::Serialize;

use crate::entity::{LocationId, LocationSelector, PlayerId};

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when querying or mutating the world.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The requested location id does not exist.
    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    /// The requested player id does not exist.
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    /// No link with exactly this pair of endpoints exists.
    #[error("link {from} -> {to} not found")]
    LinkNotFound {
        /// Origin of the missing link.
        from: LocationId,
        /// Destination of the missing link.
        to: LocationId,
    },

    /// The start location is permanent.
    #[error("location {0} is the start location and cannot be removed")]
    StartLocation(LocationId),

    /// A link with the same endpoints already exists.
    #[error("link {from} -> {to} already exists")]
    DuplicateLink {
        /// Origin of the existing link.
        from: LocationId,
        /// Destination of the existing link.
        to: LocationId,
    },

    /// A link endpoint references a location that does not exist.
    #[error("link endpoint references non-existent location {0}")]
    DanglingEndpoint(LocationId),

    /// No outbound link from the player's location leads to the destination.
    #[error("no route from location {from} to {destination}")]
    NoRoute {
        /// The player's current location.
        from: LocationId,
        /// The destination that could not be reached.
        destination: LocationSelector,
    },
}

/// Coarse failure classes reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A referenced entity does not exist (or may not be touched).
    NotFound,
    /// The operation would break a link integrity rule.
    Integrity,
    /// A move destination is unreachable from the current location.
    NoRoute,
}

impl WorldError {
    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::LocationNotFound(_)
            | Self::PlayerNotFound(_)
            | Self::LinkNotFound { .. }
            | Self::StartLocation(_) => FailureKind::NotFound,
            Self::DuplicateLink { .. } | Self::DanglingEndpoint(_) => FailureKind::Integrity,
            Self::NoRoute { .. } => FailureKind::NoRoute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_location_counts_as_not_found() {
        let err = WorldError::StartLocation(LocationId::START);
        assert_eq!(err.kind(), FailureKind::NotFound);
    }

    #[test]
    fn link_errors_are_integrity_failures() {
        let dup = WorldError::DuplicateLink {
            from: LocationId(0),
            to: LocationId(1),
        };
        assert_eq!(dup.kind(), FailureKind::Integrity);
        assert_eq!(
            WorldError::DanglingEndpoint(LocationId(9)).kind(),
            FailureKind::Integrity
        );
    }

    #[test]
    fn no_route_message_names_destination() {
        let err = WorldError::NoRoute {
            from: LocationId(1),
            destination: LocationSelector::ByName("home".to_string()),
        };
        insta::assert_snapshot!(err.to_string(), @r#"no route from location 1 to "home""#);

        let err = WorldError::NoRoute {
            from: LocationId(1),
            destination: LocationSelector::ById(LocationId(4)),
        };
        insta::assert_snapshot!(err.to_string(), @"no route from location 1 to location 4");
    }

    #[test]
    fn missing_link_message() {
        let err = WorldError::LinkNotFound {
            from: LocationId(2),
            to: LocationId(3),
        };
        insta::assert_snapshot!(err.to_string(), @"link 2 -> 3 not found");
    }
}
