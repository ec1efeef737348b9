use crate::domain::model::{Club, ClubId, Player, PlayerId, Position, TeamId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only view of the player pool.
#[cfg_attr(test, mockall::automock)]
pub trait PlayerDirectory: Send + Sync {
    fn find_by_id(&self, id: PlayerId) -> Result<Player>;

    /// Players at a position, ordered by id.
    fn players_at(&self, position: Position) -> Vec<Player>;

    fn find_club(&self, id: ClubId) -> Result<Club>;
}

/// Uniform "pick one of `len`" capability. `len` is always non-zero.
pub trait Chooser {
    fn pick(&mut self, len: usize) -> usize;
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Where a user's current squad comes from.
#[async_trait]
pub trait SquadSource: Send + Sync {
    async fn fetch_squad_ids(&self, team_id: &TeamId) -> Result<Vec<PlayerId>>;
}
