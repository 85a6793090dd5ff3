//! 2D rendering
//!
//! `draw` is a pure function of the game state that emits shapes into a
//! `Surface`. The browser surface is the canvas 2D context; `DrawList`
//! records commands for headless runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use crate::sim::{GameState, PlayerId};

/// Fill colors, as CSS color strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl Color {
    pub fn as_css(&self) -> &'static str {
        self.0
    }
}

/// Fixed per-entity colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub player_one: Color,
    pub player_two: Color,
    pub bullet: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player_one: Color("blue"),
            player_two: Color("red"),
            bullet: Color("yellow"),
        }
    }
}

impl Palette {
    pub fn player(&self, id: PlayerId) -> Color {
        match id {
            PlayerId::One => self.player_one,
            PlayerId::Two => self.player_two,
        }
    }
}

/// Drawing primitives the renderer needs
pub trait Surface {
    /// Clear the rectangle from the origin to `(width, height)`
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
}

/// Redraw the whole scene
pub fn draw(state: &GameState, surface: &mut impl Surface, palette: &Palette) {
    surface.clear(state.width(), state.height());
    for player in &state.players {
        surface.fill_rect(
            player.pos.x,
            player.pos.y,
            player.size.x,
            player.size.y,
            palette.player(player.id),
        );
        for bullet in &player.bullets {
            surface.fill_circle(bullet.pos.x, bullet.pos.y, bullet.radius, palette.bullet);
        }
    }
}

/// A recorded drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
}

/// Surface that records commands instead of drawing
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    /// Number of `clear` calls, i.e. frames drawn
    pub frames: usize,
}

impl DrawList {
    /// Commands of the most recent frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }
}

impl Surface for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.frames += 1;
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_order_and_colors() {
        let mut state = GameState::default();
        state.player_mut(PlayerId::One).shoot();
        state.player_mut(PlayerId::Two).shoot();
        state.player_mut(PlayerId::Two).shoot();

        let mut list = DrawList::default();
        draw(&state, &mut list, &Palette::default());

        assert_eq!(
            list.commands,
            vec![
                DrawCommand::Clear {
                    width: 800.0,
                    height: 600.0
                },
                DrawCommand::Rect {
                    x: 100.0,
                    y: 550.0,
                    width: 40.0,
                    height: 40.0,
                    color: Color("blue"),
                },
                DrawCommand::Circle {
                    x: 120.0,
                    y: 550.0,
                    radius: 5.0,
                    color: Color("yellow"),
                },
                DrawCommand::Rect {
                    x: 660.0,
                    y: 550.0,
                    width: 40.0,
                    height: 40.0,
                    color: Color("red"),
                },
                DrawCommand::Circle {
                    x: 680.0,
                    y: 550.0,
                    radius: 5.0,
                    color: Color("yellow"),
                },
                DrawCommand::Circle {
                    x: 680.0,
                    y: 550.0,
                    radius: 5.0,
                    color: Color("yellow"),
                },
            ]
        );
    }

    #[test]
    fn test_draw_leaves_state_alone() {
        let mut state = GameState::default();
        state.player_mut(PlayerId::One).shoot();
        let before = state.player(PlayerId::One).bullets.clone();

        let mut list = DrawList::default();
        draw(&state, &mut list, &Palette::default());
        draw(&state, &mut list, &Palette::default());

        assert_eq!(state.player(PlayerId::One).bullets, before);
        assert_eq!(list.frames, 2);
        assert_eq!(list.last_frame().len(), 4);
    }
}
