use crate::domain::model::{Club, ClubId, Player, PlayerId, Position};
use crate::domain::ports::PlayerDirectory;
use crate::utils::error::{Result, TransferError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// Player pool held in memory, keyed by id so every listing is id-ordered.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    players: BTreeMap<PlayerId, Player>,
    clubs: BTreeMap<ClubId, Club>,
}

#[derive(Debug, Deserialize)]
struct PlayerRow {
    id: PlayerId,
    name: String,
    club_id: ClubId,
    position: String,
    price: String,
}

#[derive(Debug, Deserialize)]
struct ClubRow {
    id: ClubId,
    name: String,
}

impl InMemoryDirectory {
    pub fn new(
        players: impl IntoIterator<Item = Player>,
        clubs: impl IntoIterator<Item = Club>,
    ) -> Self {
        Self {
            players: players.into_iter().map(|p| (p.id, p)).collect(),
            clubs: clubs.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    /// Loads `id,name,club_id,position,price` and `id,name` CSV files.
    pub fn from_csv_files<P: AsRef<Path>, C: AsRef<Path>>(players: P, clubs: C) -> Result<Self> {
        let players_csv = std::fs::read_to_string(&players)?;
        let clubs_csv = std::fs::read_to_string(&clubs)?;
        let directory = Self::from_csv_str(&players_csv, &clubs_csv)?;

        tracing::info!(
            "Loaded {} players and {} clubs from {}",
            directory.players.len(),
            directory.clubs.len(),
            players.as_ref().display()
        );
        Ok(directory)
    }

    pub fn from_csv_str(players_csv: &str, clubs_csv: &str) -> Result<Self> {
        let mut players = Vec::new();
        let mut reader = csv::Reader::from_reader(players_csv.as_bytes());
        for row in reader.deserialize::<PlayerRow>() {
            players.push(parse_player(row?)?);
        }

        let mut clubs = Vec::new();
        let mut reader = csv::Reader::from_reader(clubs_csv.as_bytes());
        for row in reader.deserialize::<ClubRow>() {
            let row = row?;
            clubs.push(Club {
                id: row.id,
                name: row.name,
            });
        }

        Ok(Self::new(players, clubs))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

fn parse_player(row: PlayerRow) -> Result<Player> {
    let price = Decimal::from_str(row.price.trim()).map_err(|e| TransferError::InvalidInput {
        field: format!("players[{}].price", row.id),
        reason: format!("'{}' is not a number: {}", row.price, e),
    })?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(TransferError::InvalidInput {
            field: format!("players[{}].price", row.id),
            reason: "price cannot be negative".to_string(),
        });
    }

    Ok(Player {
        id: row.id,
        name: row.name,
        club_id: row.club_id,
        position: Position::from_str(&row.position)?,
        price,
    })
}

impl PlayerDirectory for InMemoryDirectory {
    fn find_by_id(&self, id: PlayerId) -> Result<Player> {
        self.players
            .get(&id)
            .cloned()
            .ok_or(TransferError::UnresolvedPlayer { id })
    }

    fn players_at(&self, position: Position) -> Vec<Player> {
        self.players
            .values()
            .filter(|p| p.position == position)
            .cloned()
            .collect()
    }

    fn find_club(&self, id: ClubId) -> Result<Club> {
        self.clubs
            .get(&id)
            .cloned()
            .ok_or(TransferError::UnresolvedClub { id })
    }
}
