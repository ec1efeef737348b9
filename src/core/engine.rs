use crate::core::selector::TransferSelector;
use crate::core::{
    Budget, Chooser, PlayerDirectory, Result, Squad, SquadEntry, SquadRules, SquadSource, TeamId,
    TransferRecommendation,
};

/// Ties a player directory to a squad source.
pub struct TransferEngine<D: PlayerDirectory, S: SquadSource> {
    directory: D,
    source: S,
    rules: SquadRules,
}

impl<D: PlayerDirectory, S: SquadSource> TransferEngine<D, S> {
    pub fn new(directory: D, source: S) -> Self {
        Self::with_rules(directory, source, SquadRules::default())
    }

    pub fn with_rules(directory: D, source: S, rules: SquadRules) -> Self {
        Self {
            directory,
            source,
            rules,
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn selector(&self) -> TransferSelector<'_, D> {
        TransferSelector::with_rules(&self.directory, self.rules)
    }

    /// Current squad of an external team as `(name, club, position, price)` rows.
    pub async fn fetch_squad(&self, team_id: &TeamId) -> Result<Vec<SquadEntry>> {
        tracing::info!("Fetching squad for team {}", team_id);
        let ids = self.source.fetch_squad_ids(team_id).await?;

        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            let player = self.directory.find_by_id(id)?;
            let club = self.directory.find_club(player.club_id)?;
            entries.push(SquadEntry(
                player.name,
                club.name,
                player.position,
                player.price,
            ));
        }

        tracing::debug!("Resolved {} squad entries", entries.len());
        Ok(entries)
    }

    /// Scrapes a team's squad, then suggests a transfer for it.
    pub async fn suggest_for_team<C: Chooser>(
        &self,
        team_id: &TeamId,
        budget: Budget,
        chooser: &mut C,
    ) -> Result<Option<TransferRecommendation>> {
        tracing::info!("Suggesting transfer for team {} (budget {})", team_id, budget);

        let ids = self.source.fetch_squad_ids(team_id).await?;
        tracing::info!("Fetched {} squad ids", ids.len());

        let squad = Squad::new(ids, &self.rules)?;
        self.selector().suggest(&squad, budget, chooser)
    }
}
