use crate::domain::model::{Budget, Player, SquadRules};
use crate::domain::ports::PlayerDirectory;

/// Legal replacements for `out` given the resolved squad and remaining budget.
///
/// `squad` must contain `out`. A candidate is legal when it plays the same
/// position, is not already held, costs at most `budget` more than `out`, and
/// its club would not exceed `rules.max_per_club` once `out` has left.
/// Results come back in directory order (by id).
pub fn find_replacements<D: PlayerDirectory + ?Sized>(
    directory: &D,
    squad: &[Player],
    out: &Player,
    budget: Budget,
    rules: &SquadRules,
) -> Vec<Player> {
    directory
        .players_at(out.position)
        .into_iter()
        .filter(|candidate| candidate.position == out.position)
        .filter(|candidate| !squad.iter().any(|held| held.id == candidate.id))
        .filter(|candidate| candidate.price - out.price <= budget.amount())
        .filter(|candidate| {
            let same_club = squad
                .iter()
                .filter(|held| held.id != out.id && held.club_id == candidate.club_id)
                .count();
            same_club < rules.max_per_club
        })
        .collect()
}
