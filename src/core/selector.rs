use crate::core::filter::find_replacements;
use crate::domain::model::{Budget, Player, PlayerId, Squad, SquadRules, TransferRecommendation};
use crate::domain::ports::{Chooser, PlayerDirectory};
use crate::utils::error::{Result, TransferError};
use rust_decimal::Decimal;

/// Picks one player to sell and one to buy for a squad.
///
/// Holds nothing but a borrowed directory and the game rules, so one selector
/// can serve any number of requests. Randomness is supplied per call.
pub struct TransferSelector<'a, D: PlayerDirectory + ?Sized> {
    directory: &'a D,
    rules: SquadRules,
}

impl<'a, D: PlayerDirectory + ?Sized> TransferSelector<'a, D> {
    pub fn new(directory: &'a D) -> Self {
        Self::with_rules(directory, SquadRules::default())
    }

    pub fn with_rules(directory: &'a D, rules: SquadRules) -> Self {
        Self { directory, rules }
    }

    pub fn rules(&self) -> &SquadRules {
        &self.rules
    }

    /// Validates raw input, then runs [`Self::suggest`].
    ///
    /// Returns `InvalidInput` before touching the directory when the squad
    /// has the wrong size or repeats a player, or when `budget` is negative.
    pub fn suggest_transfer<C: Chooser>(
        &self,
        squad_ids: &[PlayerId],
        budget: Decimal,
        chooser: &mut C,
    ) -> Result<Option<TransferRecommendation>> {
        let squad = Squad::new(squad_ids.to_vec(), &self.rules)?;
        let budget = Budget::new(budget)?;
        self.suggest(&squad, budget, chooser)
    }

    /// `Ok(None)` means every squad member was tried as the outgoing player
    /// and none had a legal replacement.
    pub fn suggest<C: Chooser>(
        &self,
        squad: &Squad,
        budget: Budget,
        chooser: &mut C,
    ) -> Result<Option<TransferRecommendation>> {
        if squad.len() != self.rules.squad_size {
            return Err(TransferError::InvalidInput {
                field: "squad".to_string(),
                reason: format!(
                    "expected {} players, got {}",
                    self.rules.squad_size,
                    squad.len()
                ),
            });
        }

        let players = squad
            .ids()
            .iter()
            .map(|id| self.directory.find_by_id(*id))
            .collect::<Result<Vec<Player>>>()?;

        // drawn without replacement, so at most one round per squad member
        let mut untried: Vec<usize> = (0..players.len()).collect();
        while !untried.is_empty() {
            let out = &players[untried.remove(draw(chooser, untried.len()))];
            let candidates = find_replacements(self.directory, &players, out, budget, &self.rules);

            tracing::debug!(
                "Out-candidate {} ({}, {}): {} legal replacements",
                out.id,
                out.name,
                out.position,
                candidates.len()
            );

            if candidates.is_empty() {
                continue;
            }

            let incoming = &candidates[draw(chooser, candidates.len())];
            tracing::info!(
                "Suggesting {} ({}) -> {} ({}) with budget {}",
                out.name,
                out.price,
                incoming.name,
                incoming.price,
                budget
            );
            return Ok(Some(TransferRecommendation::new(out, incoming)));
        }

        tracing::warn!(
            "No legal transfer for any of the {} squad members with budget {}",
            players.len(),
            budget
        );
        Ok(None)
    }
}

fn draw<C: Chooser>(chooser: &mut C, len: usize) -> usize {
    chooser.pick(len).min(len - 1)
}
