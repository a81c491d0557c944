//! Player profile persistence
//!
//! The profile is stored as one JSON object under [`PLAYER_KEY`]:
//!
//! ```json
//! {"played":12,"won":10,"currStreak":3,"longestStreak":6,
//!  "stats":[0,1,4,3,2,0],"hiContrast":false,"hardMode":false}
//! ```
//!
//! Counters are written as integers. Older data wrote them as floats
//! (`12.0`), which is still accepted on read.

use super::KeyValueStore;
use crate::error::StorageError;
use crate::game::MAX_GUESSES;
use crate::stats::Player;
use log::{info, warn};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Key the player profile lives under
pub const PLAYER_KEY: &str = "PLAYER";

/// Loads and saves the player profile through a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct PlayerRepository<S> {
    store: S,
}

impl<S: KeyValueStore> PlayerRepository<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored profile, or a fresh one if nothing is stored yet
    ///
    /// # Errors
    /// Returns `StorageError::Read` if the store fails and
    /// `StorageError::Serialization` if the stored bytes are not a profile.
    ///
    /// # Examples
    /// ```
    /// use cliordle::stats::Player;
    /// use cliordle::storage::{MemoryStore, PlayerRepository};
    ///
    /// let repo = PlayerRepository::new(MemoryStore::new());
    /// assert_eq!(repo.load().unwrap(), Player::default());
    /// ```
    pub fn load(&self) -> Result<Player, StorageError> {
        let Some(bytes) = self.store.get(PLAYER_KEY)? else {
            info!("no stored player, starting fresh");
            return Ok(Player::default());
        };

        let stored: StoredPlayer = serde_json::from_slice(&bytes)?;
        let player = Player::from(stored);
        if let Some(violation) = player.invariant_violation() {
            warn!("stored player is inconsistent: {violation}");
        }
        info!(
            "loaded player: {} played, {} won",
            player.games_played, player.games_won
        );
        Ok(player)
    }

    /// Write the profile in a single atomic put
    ///
    /// # Errors
    /// Returns `StorageError::Write` if the store rejects the write.
    pub fn save(&self, player: &Player) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(&StoredPlayer::from(player))?;
        self.store.put(PLAYER_KEY, &bytes)?;
        info!(
            "saved player: {} played, {} won",
            player.games_played, player.games_won
        );
        Ok(())
    }
}

/// Wire shape of the profile
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPlayer {
    #[serde(deserialize_with = "counter")]
    played: u32,
    #[serde(deserialize_with = "counter")]
    won: u32,
    #[serde(deserialize_with = "counter")]
    curr_streak: u32,
    #[serde(deserialize_with = "counter")]
    longest_streak: u32,
    #[serde(deserialize_with = "counters")]
    stats: [u32; MAX_GUESSES],
    hi_contrast: bool,
    hard_mode: bool,
}

impl From<&Player> for StoredPlayer {
    fn from(player: &Player) -> Self {
        Self {
            played: player.games_played,
            won: player.games_won,
            curr_streak: player.current_streak,
            longest_streak: player.longest_streak,
            stats: player.guess_distribution,
            hi_contrast: player.high_contrast,
            hard_mode: player.hard_mode,
        }
    }
}

impl From<StoredPlayer> for Player {
    fn from(stored: StoredPlayer) -> Self {
        Self {
            games_played: stored.played,
            games_won: stored.won,
            current_streak: stored.curr_streak,
            longest_streak: stored.longest_streak,
            guess_distribution: stored.stats,
            high_contrast: stored.hi_contrast,
            hard_mode: stored.hard_mode,
        }
    }
}

/// Accept `3` or `3.0`; reject negatives, fractions and non-finite values
fn whole_number(value: f64) -> Result<u32, String> {
    #[allow(clippy::float_cmp)] // exact integrality check
    let integral = value.fract() == 0.0;
    if value.is_finite() && integral && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(format!("counter must be a non-negative whole number, got {value}"))
    }
}

fn counter<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    whole_number(value).map_err(de::Error::custom)
}

fn counters<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u32; MAX_GUESSES], D::Error> {
    let values = <[f64; MAX_GUESSES]>::deserialize(deserializer)?;
    let mut result = [0; MAX_GUESSES];
    for (slot, value) in result.iter_mut().zip(values) {
        *slot = whole_number(value).map_err(de::Error::custom)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::{Value, json};

    fn seasoned() -> Player {
        Player {
            games_played: 12,
            games_won: 10,
            current_streak: 3,
            longest_streak: 6,
            guess_distribution: [0, 1, 4, 3, 2, 0],
            high_contrast: true,
            hard_mode: false,
        }
    }

    #[test]
    fn empty_store_loads_default_player() {
        let repo = PlayerRepository::new(MemoryStore::new());
        let player = repo.load().unwrap();

        assert_eq!(player, Player::default());
        assert_eq!(player.games_played, 0);
        assert_eq!(player.guess_distribution, [0; MAX_GUESSES]);
        assert!(!player.high_contrast);
        assert!(!player.hard_mode);
    }

    #[test]
    fn save_then_load_round_trips() {
        let repo = PlayerRepository::new(MemoryStore::new());
        repo.save(&seasoned()).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, seasoned());

        repo.save(&loaded).unwrap();
        assert_eq!(repo.load().unwrap(), seasoned());
    }

    #[test]
    fn saved_shape_uses_integer_counters() {
        let store = MemoryStore::new();
        PlayerRepository::new(&store).save(&seasoned()).unwrap();

        let bytes = store.get(PLAYER_KEY).unwrap().unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({
                "played": 12,
                "won": 10,
                "currStreak": 3,
                "longestStreak": 6,
                "stats": [0, 1, 4, 3, 2, 0],
                "hiContrast": true,
                "hardMode": false
            })
        );
    }

    #[test]
    fn legacy_float_counters_are_read() {
        let store = MemoryStore::new();
        let legacy = r#"{"played":12,"won":10,"currStreak":3,"longestStreak":6,
            "stats":[0,1,4,3,2,0],"hiContrast":true,"hardMode":false}"#
            .replace("12", "12.0")
            .replace("[0,1,4", "[0.0,1.0,4.0");
        store.put(PLAYER_KEY, legacy.as_bytes()).unwrap();

        let player = PlayerRepository::new(&store).load().unwrap();
        assert_eq!(player, seasoned());
    }

    #[test]
    fn malformed_data_is_a_serialization_error() {
        let cases = [
            "not json",
            r#"{"played":1}"#,
            r#"{"played":-1,"won":0,"currStreak":0,"longestStreak":0,"stats":[0,0,0,0,0,0],"hiContrast":false,"hardMode":false}"#,
            r#"{"played":1.5,"won":0,"currStreak":0,"longestStreak":0,"stats":[0,0,0,0,0,0],"hiContrast":false,"hardMode":false}"#,
            r#"{"played":1,"won":0,"currStreak":0,"longestStreak":0,"stats":[0,0,0],"hiContrast":false,"hardMode":false}"#,
        ];
        for case in cases {
            let store = MemoryStore::new();
            store.put(PLAYER_KEY, case.as_bytes()).unwrap();
            let err = PlayerRepository::new(&store).load().unwrap_err();
            assert!(
                matches!(err, StorageError::Serialization(_)),
                "{case} should fail to parse"
            );
        }
    }

    #[test]
    fn whole_number_bounds() {
        assert_eq!(whole_number(0.0), Ok(0));
        assert_eq!(whole_number(42.0), Ok(42));
        assert!(whole_number(-1.0).is_err());
        assert!(whole_number(0.5).is_err());
        assert!(whole_number(f64::NAN).is_err());
        assert!(whole_number(f64::INFINITY).is_err());
        assert!(whole_number(1e12).is_err());
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                source: std::io::Error::other("disk gone"),
            })
        }

        fn put(&self, key: &str, _value: &[u8]) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                source: std::io::Error::other("disk full"),
            })
        }
    }

    #[test]
    fn store_failures_surface() {
        let repo = PlayerRepository::new(FailingStore);
        assert!(matches!(repo.load(), Err(StorageError::Read { .. })));
        assert!(matches!(
            repo.save(&seasoned()),
            Err(StorageError::Write { .. })
        ));
    }
}
