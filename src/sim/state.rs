//! Game state and entity types
//!
//! Bullets live inside the player that fired them, so ownership never changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::KeyBindings;

/// Player identity. Fixed at creation; decides shot direction and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Horizontal direction of this player's shots (+1 right, -1 left)
    pub fn direction(self) -> f32 {
        match self {
            PlayerId::One => 1.0,
            PlayerId::Two => -1.0,
        }
    }

    /// 1-based player number
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per tick
    pub speed: f32,
    /// +1.0 or -1.0
    pub direction: f32,
}

impl Bullet {
    /// Advance one tick along the x axis
    pub fn advance(&mut self) {
        self.pos.x += self.speed * self.direction;
    }

    /// Whether the bullet is still within `[0, width]` horizontally
    pub fn on_screen(&self, width: f32) -> bool {
        (0.0..=width).contains(&self.pos.x)
    }
}

/// One of the two shooters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Key identifier that fires a shot, compared case-insensitively
    pub shoot_key: String,
    /// Bullets fired by this player, oldest first
    pub bullets: Vec<Bullet>,
}

impl Player {
    pub fn new(id: PlayerId, pos: Vec2, shoot_key: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            shoot_key: shoot_key.into(),
            bullets: Vec::new(),
        }
    }

    /// Build a bullet leaving the center of this player's top edge
    pub fn create_bullet(&self) -> Bullet {
        Bullet {
            pos: Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y),
            radius: BULLET_RADIUS,
            speed: BULLET_SPEED,
            direction: self.id.direction(),
        }
    }

    /// Fire a bullet and keep it in this player's collection. Returns the
    /// bullet as fired.
    pub fn shoot(&mut self) -> Bullet {
        let bullet = self.create_bullet();
        self.bullets.push(bullet.clone());
        bullet
    }

    /// Whether `key` is this player's trigger
    pub fn is_shoot_key(&self, key: &str) -> bool {
        key.to_lowercase() == self.shoot_key.to_lowercase()
    }
}

/// Fixed starting position of a player on a canvas of the given size
pub fn start_position(id: PlayerId, canvas: Vec2) -> Vec2 {
    let y = canvas.y - PLAYER_BOTTOM_OFFSET;
    match id {
        PlayerId::One => Vec2::new(PLAYER_ONE_X, y),
        PlayerId::Two => Vec2::new(canvas.x - PLAYER_TWO_RIGHT_OFFSET, y),
    }
}

/// Complete entity model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Canvas width and height in pixels
    pub canvas: Vec2,
    /// Always `[player 1, player 2]`
    pub players: [Player; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(
            Vec2::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            &KeyBindings::default(),
        )
    }
}

impl GameState {
    pub fn new(canvas: Vec2, keys: &KeyBindings) -> Self {
        let players = [
            Player::new(
                PlayerId::One,
                start_position(PlayerId::One, canvas),
                keys.player_one.clone(),
            ),
            Player::new(
                PlayerId::Two,
                start_position(PlayerId::Two, canvas),
                keys.player_two.clone(),
            ),
        ];
        Self { canvas, players }
    }

    pub fn width(&self) -> f32 {
        self.canvas.x
    }

    pub fn height(&self) -> f32 {
        self.canvas.y
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Put both players back on their starting spots
    pub fn reset_players(&mut self) {
        let canvas = self.canvas;
        for player in &mut self.players {
            player.pos = start_position(player.id, canvas);
        }
    }

    /// Drop every bullet of every player
    pub fn clear_bullets(&mut self) {
        for player in &mut self.players {
            player.bullets.clear();
        }
    }

    /// Total bullets in flight
    pub fn bullet_count(&self) -> usize {
        self.players.iter().map(|p| p.bullets.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_positions_follow_canvas() {
        let state = GameState::default();
        assert_eq!(state.player(PlayerId::One).pos, Vec2::new(100.0, 550.0));
        assert_eq!(state.player(PlayerId::Two).pos, Vec2::new(660.0, 550.0));

        let wide = GameState::new(Vec2::new(1200.0, 400.0), &KeyBindings::default());
        assert_eq!(wide.player(PlayerId::Two).pos, Vec2::new(1060.0, 350.0));
    }

    #[test]
    fn test_bullet_direction_from_identity() {
        let state = GameState::default();

        let b1 = state.player(PlayerId::One).create_bullet();
        assert_eq!(b1.pos, Vec2::new(120.0, 550.0));
        assert_eq!(b1.direction, 1.0);
        assert_eq!(b1.radius, 5.0);
        assert_eq!(b1.speed, 5.0);

        let b2 = state.player(PlayerId::Two).create_bullet();
        assert_eq!(b2.pos, Vec2::new(680.0, 550.0));
        assert_eq!(b2.direction, -1.0);
    }

    #[test]
    fn test_shoot_returns_stored_bullet() {
        let mut state = GameState::default();
        let fired = state.player_mut(PlayerId::Two).shoot();
        let again = state.player_mut(PlayerId::Two).shoot();

        let bullets = &state.player(PlayerId::Two).bullets;
        assert_eq!(bullets.len(), 2);
        assert_eq!(bullets[0], fired);
        assert_eq!(bullets[1], again);
        assert!(state.player(PlayerId::One).bullets.is_empty());
    }

    #[test]
    fn test_shoot_key_case_insensitive() {
        let state = GameState::default();
        let p1 = state.player(PlayerId::One);
        assert!(p1.is_shoot_key("f"));
        assert!(p1.is_shoot_key("F"));
        assert!(!p1.is_shoot_key("l"));
    }

    #[test]
    fn test_reset_players_and_clear_bullets() {
        let mut state = GameState::default();
        state.player_mut(PlayerId::One).pos = Vec2::new(3.0, 4.0);
        state.player_mut(PlayerId::Two).pos = Vec2::ZERO;
        state.player_mut(PlayerId::One).shoot();
        state.player_mut(PlayerId::Two).shoot();
        assert_eq!(state.bullet_count(), 2);

        state.reset_players();
        state.clear_bullets();

        assert_eq!(state.player(PlayerId::One).pos, Vec2::new(100.0, 550.0));
        assert_eq!(state.player(PlayerId::Two).pos, Vec2::new(660.0, 550.0));
        assert_eq!(state.bullet_count(), 0);
    }
}
