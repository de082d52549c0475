use battle_client::{Game, GameError, GameStatus, InMemoryTransport, FLEET};
use proptest::prelude::*;
use serde_json::{json, Value};

fn sunk_name() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(FLEET.to_vec()).prop_map(|s| Some(s.to_string())),
        Just(Some("Zeppelin".to_string())),
    ]
}

fn reply(sunk: &Option<String>, x: i64, y: i64) -> Value {
    match sunk {
        Some(name) => json!({"status": "hit", "sunk": name, "x": x, "y": y}),
        None => json!({"status": "miss", "x": x, "y": y}),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Ships only ever leave the fleet, and never more than one per shot.
    #[test]
    fn fleet_only_shrinks(sunk in prop::collection::vec(sunk_name(), 1..20)) {
        let replies = sunk
            .iter()
            .enumerate()
            .map(|(i, s)| reply(s, i as i64, 0))
            .collect::<Vec<_>>();
        let mut game = Game::resume("1", InMemoryTransport::with_replies(replies));
        let mut removed: Vec<String> = Vec::new();

        for (i, s) in sunk.iter().enumerate() {
            if game.is_finished() {
                break;
            }
            let before = game.ships().len();
            game.nuke(i as u32, 0).unwrap();
            let after = game.ships().len();
            prop_assert!(after == before || after + 1 == before);
            if after + 1 == before {
                removed.push(s.clone().unwrap());
            }
            for name in &removed {
                prop_assert!(game.ships().iter().all(|ship| !ship.is(name)));
            }
            prop_assert_eq!(game.sunk(), s.as_deref());
            prop_assert_eq!(game.coords().x, Some(i as i64));
            prop_assert_eq!(game.status() == GameStatus::Victory, game.ships().is_empty());
        }
    }

    /// A finished game refuses to fire and sends nothing.
    #[test]
    fn finished_game_rejects_nuke(x in 0u32..10, y in 0u32..10, won in any::<bool>()) {
        let last = if won {
            json!({"status": "hit", "prize": "p", "x": 0, "y": 0})
        } else {
            json!({"status": "miss", "game_status": "lost", "x": 0, "y": 0})
        };
        let mut game = Game::resume("1", InMemoryTransport::with_replies(vec![last, json!({})]));
        game.nuke(0, 0).unwrap();
        prop_assert!(game.is_finished());

        prop_assert!(matches!(game.nuke(x, y), Err(GameError::GameAlreadyFinished)));
        prop_assert_eq!(game.transport().requests().len(), 1);
        prop_assert_eq!(game.transport().pending_replies(), 1);
    }
}
