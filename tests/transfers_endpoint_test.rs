use fpl_transfers::app::handlers::{transfers, CONTENT_TYPE_JSON, INVALID_PARAMETERS};
use fpl_transfers::core::{Club, Player, Position};
use fpl_transfers::{FixedChooser, InMemoryDirectory, RngChooser, TransferSelector};
use rust_decimal::Decimal;

const FULL_SQUAD: &str = "[1,2,3,4,5,6,7,8,9,10,11,12,13,14,15]";

fn player(id: u32, name: &str, club_id: u32, position: Position, price: i64) -> Player {
    Player {
        id,
        name: name.to_string(),
        club_id,
        position,
        price: Decimal::from(price),
    }
}

/// Ids 1..=15: goalkeepers named "player", three at each of clubs 1..=5, priced 1.
fn directory_with(extra: Vec<Player>) -> InMemoryDirectory {
    let squad = (0..15).map(|i| player(i + 1, "player", i / 3 + 1, Position::Goalkeeper, 1));
    let clubs = (1..=6).map(|id| Club {
        id,
        name: format!("club{}", id),
    });
    InMemoryDirectory::new(squad.chain(extra), clubs)
}

fn suggest(directory: &InMemoryDirectory, squad: Option<&str>, cash: Option<&str>) -> (u16, String) {
    let selector = TransferSelector::new(directory);
    let response = transfers(&selector, squad, cash, &mut FixedChooser::new(0));
    assert_eq!(response.content_type, CONTENT_TYPE_JSON);
    (response.status, response.body)
}

#[test]
fn test_suggests_transfer_which_excludes_current_squad() {
    let dir = directory_with(vec![player(16, "player16", 6, Position::Goalkeeper, 1)]);

    let (status, body) = suggest(&dir, Some(FULL_SQUAD), Some("10"));

    assert_eq!(status, 200);
    assert_eq!(body, r#"{"out":"player","in":"player16"}"#);
}

#[test]
fn test_same_club_replacement_is_within_quota() {
    // out-player 1 plays for club 1, so swapping in another club 1 keeper keeps it at three
    let dir = directory_with(vec![player(16, "player16", 1, Position::Goalkeeper, 1)]);

    let (status, body) = suggest(&dir, Some(FULL_SQUAD), Some("10"));

    assert_eq!(status, 200);
    assert_eq!(body, r#"{"out":"player","in":"player16"}"#);
}

#[test]
fn test_suggests_a_transfer_of_correct_position() {
    let dir = directory_with(vec![
        player(16, "player16", 6, Position::Goalkeeper, 1),
        player(17, "player17", 6, Position::Defender, 1),
    ]);

    let (status, body) = suggest(&dir, Some(FULL_SQUAD), Some("10"));

    assert_eq!(status, 200);
    assert_eq!(body, r#"{"out":"player","in":"player16"}"#);
}

#[test]
fn test_suggests_transfer_that_does_not_exceed_cash() {
    let dir = directory_with(vec![
        player(16, "player16", 6, Position::Goalkeeper, 11),
        player(17, "player17", 6, Position::Goalkeeper, 12),
    ]);

    for _ in 0..5 {
        let (status, body) = suggest(&dir, Some(FULL_SQUAD), Some("10"));
        assert_eq!(status, 200);
        assert_eq!(body, r#"{"out":"player","in":"player16"}"#);
    }
}

#[test]
fn test_suggests_transfer_that_does_not_exceed_max_players_per_team() {
    let dir = directory_with(vec![
        player(16, "player16", 2, Position::Goalkeeper, 1),
        player(17, "player17", 6, Position::Goalkeeper, 1),
    ]);

    let (status, body) = suggest(&dir, Some(FULL_SQUAD), Some("10"));

    assert_eq!(status, 200);
    assert_eq!(body, r#"{"out":"player","in":"player17"}"#);
}

#[test]
fn test_no_legal_transfer_returns_null() {
    let dir = directory_with(vec![player(16, "player16", 6, Position::Goalkeeper, 20)]);

    let (status, body) = suggest(&dir, Some(FULL_SQUAD), Some("10"));

    assert_eq!(status, 200);
    assert_eq!(body, "null");
}

#[test]
fn test_random_suggestions_respect_every_rule() {
    let dir = directory_with(vec![
        player(16, "cheap_keeper", 6, Position::Goalkeeper, 1),
        player(17, "dear_keeper", 6, Position::Goalkeeper, 12),
        player(18, "full_club_keeper", 3, Position::Goalkeeper, 1),
        player(19, "defender", 6, Position::Defender, 1),
    ]);
    let selector = TransferSelector::new(&dir);

    for seed in 0..100 {
        let response = transfers(
            &selector,
            Some(FULL_SQUAD),
            Some("10"),
            &mut RngChooser::seeded(seed),
        );
        assert_eq!(response.status, 200);
        // full_club_keeper is only legal when one of club 3's keepers goes out
        assert!(
            response.body.ends_with(r#""in":"cheap_keeper"}"#)
                || response.body.ends_with(r#""in":"full_club_keeper"}"#),
            "seed {} gave {}",
            seed,
            response.body
        );
    }
}

#[test]
fn test_unknown_squad_player_is_not_found() {
    let dir = directory_with(vec![]);
    let squad = "[1,2,3,4,5,6,7,8,9,10,11,12,13,14,99]";

    let (status, body) = suggest(&dir, Some(squad), Some("10"));

    assert_eq!(status, 404);
    assert_eq!(body, "Unknown player id 99");
}

mod parameter_validation {
    use super::*;

    fn assert_invalid(squad: Option<&str>, cash: Option<&str>) {
        let dir = directory_with(vec![player(16, "player16", 6, Position::Goalkeeper, 1)]);
        let (status, body) = suggest(&dir, squad, cash);
        assert_eq!(status, 400);
        assert_eq!(body, INVALID_PARAMETERS);
    }

    #[test]
    fn test_error_if_no_squad_parameter() {
        assert_invalid(None, Some("10"));
    }

    #[test]
    fn test_error_if_squad_is_blank() {
        assert_invalid(Some(""), Some("10"));
    }

    #[test]
    fn test_error_if_squad_is_not_the_correct_size() {
        assert_invalid(Some("[1,2,3,4,5,6,7,8,9,10,11,12,13,14]"), Some("10"));
        assert_invalid(Some("[1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16]"), Some("10"));
    }

    #[test]
    fn test_error_if_squad_repeats_a_player() {
        assert_invalid(Some("[1,2,3,4,5,6,7,8,9,10,11,12,13,14,14]"), Some("10"));
    }

    #[test]
    fn test_error_if_cash_not_provided() {
        assert_invalid(Some(FULL_SQUAD), None);
    }

    #[test]
    fn test_error_if_cash_is_blank() {
        assert_invalid(Some(FULL_SQUAD), Some(""));
    }

    #[test]
    fn test_error_if_cash_is_non_numeric() {
        assert_invalid(Some(FULL_SQUAD), Some("123abc"));
    }

    #[test]
    fn test_error_if_cash_is_negative() {
        assert_invalid(Some(FULL_SQUAD), Some("-0.5"));
    }
}
