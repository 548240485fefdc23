use crate::models::Player;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory store of every player, keyed by player id.
///
/// A single mutex covers the whole map and is held for the full duration of
/// each operation, including the copy taken by [`PlayerRegistry::list`], so
/// all operations are linearizable with respect to each other.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: Mutex<HashMap<String, Player>>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // No operation can leave the map half-written, so a poisoned lock is still
    // safe to use.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Player>> {
        self.players.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts the player, replacing any record with the same id.
    pub fn put(&self, player: Player) {
        self.lock().insert(player.id.clone(), player);
    }

    pub fn get(&self, id: &str) -> Option<Player> {
        self.lock().get(id).cloned()
    }

    /// Sets the score of an existing player in place.
    ///
    /// Returns `false` without touching the map when `id` is unknown.
    pub fn update_score(&self, id: &str, score: i64) -> bool {
        match self.lock().get_mut(id) {
            Some(player) => {
                player.score = score;
                true
            }
            None => false,
        }
    }

    /// Snapshot of all players in unspecified order.
    pub fn list(&self) -> Vec<Player> {
        self.lock().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get_returns_player() {
        let registry = PlayerRegistry::new();
        registry.put(Player::new("p1", "Ann", 0));

        assert_eq!(registry.get("p1"), Some(Player::new("p1", "Ann", 0)));
    }

    #[test]
    fn last_put_wins() {
        let registry = PlayerRegistry::new();
        registry.put(Player::new("p1", "Ann", 10));
        registry.put(Player::new("p1", "Bob", 3));
        registry.put(Player::new("p1", "Cid", 7));

        assert_eq!(registry.get("p1"), Some(Player::new("p1", "Cid", 7)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn update_score_only_touches_target_score() {
        let registry = PlayerRegistry::new();
        registry.put(Player::new("p1", "Ann", 0));
        registry.put(Player::new("p2", "Bob", 5));

        assert!(registry.update_score("p1", 42));

        assert_eq!(registry.get("p1"), Some(Player::new("p1", "Ann", 42)));
        assert_eq!(registry.get("p2"), Some(Player::new("p2", "Bob", 5)));
    }

    #[test]
    fn missing_id_is_never_created() {
        let registry = PlayerRegistry::new();

        assert!(!registry.update_score("missing", 1));
        assert_eq!(registry.get("missing"), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn list_returns_every_distinct_player() {
        let registry = PlayerRegistry::new();
        assert!(registry.list().is_empty());

        for i in 0..5 {
            registry.put(Player::new(format!("p{i}"), format!("name{i}"), i));
        }
        registry.update_score("p3", 99);

        let mut players = registry.list();
        players.sort_by(|a, b| a.id.cmp(&b.id));

        assert_eq!(players.len(), 5);
        assert_eq!(players[3], Player::new("p3", "name3", 99));
        assert_eq!(players[4], Player::new("p4", "name4", 4));
    }

    #[test]
    fn survives_poisoned_lock() {
        let registry = std::sync::Arc::new(PlayerRegistry::new());
        registry.put(Player::new("p1", "Ann", 1));

        let poisoner = registry.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.players.lock().unwrap();
            panic!("poison the registry lock");
        })
        .join();

        assert!(registry.players.is_poisoned());
        assert!(registry.update_score("p1", 2));
        assert_eq!(registry.get("p1"), Some(Player::new("p1", "Ann", 2)));
    }
}
