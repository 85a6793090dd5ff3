//! Keyboard input mapping
//!
//! Turns a key identifier into game actions. Applying them is the session's job.

use crate::sim::{Player, PlayerId};

/// Action requested by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    TogglePause,
    Shoot(PlayerId),
}

/// Actions for one key press: pause first, then shots in player order.
///
/// Pause and shoot are checked independently, so a key bound to both yields
/// both actions.
pub fn actions_for_key(key: &str, pause_key: &str, players: &[Player]) -> Vec<InputAction> {
    let mut actions = Vec::new();
    if key.to_lowercase() == pause_key.to_lowercase() {
        actions.push(InputAction::TogglePause);
    }
    actions.extend(
        players
            .iter()
            .filter(|p| p.is_shoot_key(key))
            .map(|p| InputAction::Shoot(p.id)),
    );
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::KeyBindings;
    use crate::sim::GameState;
    use glam::Vec2;

    #[test]
    fn test_maps_pause_and_shots() {
        let state = GameState::default();
        assert_eq!(
            actions_for_key("P", "p", &state.players),
            vec![InputAction::TogglePause]
        );
        assert_eq!(
            actions_for_key("f", "p", &state.players),
            vec![InputAction::Shoot(PlayerId::One)]
        );
        assert_eq!(
            actions_for_key("L", "p", &state.players),
            vec![InputAction::Shoot(PlayerId::Two)]
        );
        assert!(actions_for_key("x", "p", &state.players).is_empty());
    }

    #[test]
    fn test_shared_key_triggers_everything() {
        let keys = KeyBindings {
            pause: "space".into(),
            player_one: "Space".into(),
            player_two: "SPACE".into(),
        };
        let state = GameState::new(Vec2::new(800.0, 600.0), &keys);
        assert_eq!(
            actions_for_key("space", &keys.pause, &state.players),
            vec![
                InputAction::TogglePause,
                InputAction::Shoot(PlayerId::One),
                InputAction::Shoot(PlayerId::Two),
            ]
        );
    }
}
