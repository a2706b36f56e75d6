//! Type-safe wrappers shared by the storage and HTTP layers.

pub mod ids;

pub use ids::{AvailabilityId, MatchId, PlayerId, StatisticId, TeamId};
