use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{Result, TransferError};

pub type PlayerId = u32;
pub type ClubId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = TransferError;

    /// Accepts full names and the usual short codes (GKP, DEF, MID, FWD).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goalkeeper" | "gk" | "gkp" => Ok(Position::Goalkeeper),
            "defender" | "def" => Ok(Position::Defender),
            "midfielder" | "mid" => Ok(Position::Midfielder),
            "forward" | "fwd" => Ok(Position::Forward),
            _ => Err(TransferError::InvalidInput {
                field: "position".to_string(),
                reason: format!("unknown position '{}'", s),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub club_id: ClubId,
    pub position: Position,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
}

/// Game rules a squad must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadRules {
    pub squad_size: usize,
    pub max_per_club: usize,
}

impl Default for SquadRules {
    fn default() -> Self {
        Self {
            squad_size: 15,
            max_per_club: 3,
        }
    }
}

/// The player ids currently held, in caller order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Squad {
    ids: Vec<PlayerId>,
}

impl Squad {
    pub fn new(ids: Vec<PlayerId>, rules: &SquadRules) -> Result<Self> {
        if ids.len() != rules.squad_size {
            return Err(TransferError::InvalidInput {
                field: "squad".to_string(),
                reason: format!(
                    "expected {} players, got {}",
                    rules.squad_size,
                    ids.len()
                ),
            });
        }

        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
            return Err(TransferError::InvalidInput {
                field: "squad".to_string(),
                reason: format!("player {} appears more than once", dup),
            });
        }

        Ok(Self { ids })
    }

    pub fn ids(&self) -> &[PlayerId] {
        &self.ids
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Budget(Decimal);

impl Budget {
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(TransferError::InvalidInput {
                field: "budget".to_string(),
                reason: format!("budget cannot be negative ({})", amount),
            });
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Budget {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TransferError::InvalidInput {
                field: "budget".to_string(),
                reason: "budget cannot be blank".to_string(),
            });
        }
        let amount = Decimal::from_str(trimmed).map_err(|e| TransferError::InvalidInput {
            field: "budget".to_string(),
            reason: format!("'{}' is not a number: {}", trimmed, e),
        })?;
        Self::new(amount)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferRecommendation {
    pub out: String,
    #[serde(rename = "in")]
    pub incoming: String,
    #[serde(skip)]
    pub out_id: PlayerId,
    #[serde(skip)]
    pub in_id: PlayerId,
}

impl TransferRecommendation {
    pub fn new(out: &Player, incoming: &Player) -> Self {
        Self {
            out: out.name.clone(),
            incoming: incoming.name.clone(),
            out_id: out.id,
            in_id: incoming.id,
        }
    }
}

/// One row of a scraped squad: `[name, club, position, price]` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquadEntry(
    pub String,
    pub String,
    pub Position,
    #[serde(with = "rust_decimal::serde::float")] pub Decimal,
);

/// External (game site) team identifier. Digits only, never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamId(String);

impl TeamId {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TransferError::InvalidTeamId {
                value: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
