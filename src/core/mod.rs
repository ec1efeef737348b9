pub mod engine;
pub mod filter;
pub mod selector;

pub use crate::domain::model::{
    Budget, Club, Player, PlayerId, Position, Squad, SquadEntry, SquadRules, TeamId,
    TransferRecommendation,
};
pub use crate::domain::ports::{Chooser, PlayerDirectory, SquadSource};
pub use crate::utils::error::Result;
