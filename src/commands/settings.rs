//! Preference command

use crate::error::Result;
use crate::output::print_settings;
use crate::stats::Player;
use crate::storage::{KeyValueStore, PlayerRepository};
use std::io::Write;

/// Requested preference changes; `None` keeps the stored value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub high_contrast: Option<bool>,
    pub hard_mode: Option<bool>,
}

impl SettingsUpdate {
    fn apply(self, player: &mut Player) {
        if let Some(high_contrast) = self.high_contrast {
            player.high_contrast = high_contrast;
        }
        if let Some(hard_mode) = self.hard_mode {
            player.hard_mode = hard_mode;
        }
    }
}

/// Apply and persist preference changes, then print the result
///
/// # Errors
/// Returns a storage error if the player cannot be saved, or an I/O error
/// from the writer.
pub fn run_settings<K: KeyValueStore>(
    player: &mut Player,
    repo: &PlayerRepository<K>,
    update: SettingsUpdate,
    mut out: impl Write,
) -> Result<()> {
    update.apply(player);
    repo.save(player)?;
    print_settings(&mut out, player)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn settings_are_persisted() {
        colored::control::set_override(false);
        let repo = PlayerRepository::new(MemoryStore::new());
        let mut player = Player {
            games_played: 3,
            ..Player::default()
        };
        let mut out = Vec::new();

        let update = SettingsUpdate {
            high_contrast: Some(true),
            hard_mode: Some(true),
        };
        run_settings(&mut player, &repo, update, &mut out).unwrap();

        let stored = repo.load().unwrap();
        assert!(stored.high_contrast);
        assert!(stored.hard_mode);
        assert_eq!(stored.games_played, 3);
        assert!(String::from_utf8(out).unwrap().contains("High-contrast\t|\ttrue"));
    }

    #[test]
    fn omitted_flags_keep_stored_values() {
        colored::control::set_override(false);
        let repo = PlayerRepository::new(MemoryStore::new());
        let mut player = Player {
            high_contrast: true,
            hard_mode: true,
            ..Player::default()
        };

        let update = SettingsUpdate {
            hard_mode: Some(false),
            ..SettingsUpdate::default()
        };
        run_settings(&mut player, &repo, update, Vec::new()).unwrap();

        assert!(player.high_contrast);
        assert!(!player.hard_mode);
        assert_eq!(repo.load().unwrap(), player);
    }
}
