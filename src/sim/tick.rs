//! Per-frame simulation tick
//!
//! Moves every bullet one step and drops the ones that left the canvas.

use super::state::GameState;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    let width = state.width();
    for player in &mut state.players {
        for bullet in &mut player.bullets {
            bullet.advance();
        }
        // Stable filter so neighbours of a removed bullet are never skipped
        player.bullets.retain(|b| b.on_screen(width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, PlayerId};
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_player_one_bullet_crosses_canvas() {
        let mut state = GameState::default();
        assert_eq!(state.width(), 800.0);
        state.player_mut(PlayerId::One).shoot();

        for _ in 0..10 {
            tick(&mut state);
        }
        let bullet = &state.player(PlayerId::One).bullets[0];
        assert_eq!(bullet.pos.x, 170.0);

        // 126 more ticks puts it at x = 800, still on the edge
        for _ in 0..126 {
            tick(&mut state);
        }
        assert_eq!(state.player(PlayerId::One).bullets[0].pos.x, 800.0);

        // Tick 137 leaves the canvas
        tick(&mut state);
        assert!(state.player(PlayerId::One).bullets.is_empty());
    }

    #[test]
    fn test_player_two_bullet_moves_left() {
        let mut state = GameState::default();
        state.player_mut(PlayerId::Two).shoot();
        let x0 = state.player(PlayerId::Two).bullets[0].pos.x;

        tick(&mut state);
        tick(&mut state);
        let bullet = &state.player(PlayerId::Two).bullets[0];
        assert_eq!(bullet.direction, -1.0);
        assert_eq!(bullet.pos.x, x0 - 10.0);
    }

    #[test]
    fn test_adjacent_removals_not_skipped() {
        let mut state = GameState::default();
        let edge = |x: f32| Bullet {
            pos: Vec2::new(x, 10.0),
            radius: 5.0,
            speed: 5.0,
            direction: 1.0,
        };
        // Two neighbours leave on the same tick, one survivor after them
        state.player_mut(PlayerId::One).bullets = vec![edge(798.0), edge(799.0), edge(400.0)];

        tick(&mut state);

        let bullets = &state.player(PlayerId::One).bullets;
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].pos.x, 405.0);
    }

    #[test]
    fn test_other_player_untouched_by_removal() {
        let mut state = GameState::default();
        state.player_mut(PlayerId::One).shoot();
        state.player_mut(PlayerId::Two).shoot();

        tick(&mut state);

        assert_eq!(state.player(PlayerId::One).bullets.len(), 1);
        assert_eq!(state.player(PlayerId::Two).bullets.len(), 1);
        assert_eq!(state.player(PlayerId::One).bullets[0].pos.x, 125.0);
        assert_eq!(state.player(PlayerId::Two).bullets[0].pos.x, 675.0);
    }

    proptest! {
        #[test]
        fn bullet_position_is_linear_until_removed(
            x0 in 0u32..=800,
            rightward in any::<bool>(),
            ticks in 0u32..400,
        ) {
            let mut state = GameState::default();
            let direction = if rightward { 1.0 } else { -1.0 };
            state.player_mut(PlayerId::One).bullets.push(Bullet {
                pos: Vec2::new(x0 as f32, 100.0),
                radius: 5.0,
                speed: 5.0,
                direction,
            });

            let mut expected = x0 as f32;
            let mut alive = true;
            for _ in 0..ticks {
                tick(&mut state);
                if alive {
                    expected += 5.0 * direction;
                    alive = (0.0..=800.0).contains(&expected);
                }
            }

            let bullets = &state.player(PlayerId::One).bullets;
            if alive {
                prop_assert_eq!(bullets.len(), 1);
                prop_assert_eq!(bullets[0].pos.x, expected);
            } else {
                prop_assert!(bullets.is_empty());
            }
        }
    }
}
