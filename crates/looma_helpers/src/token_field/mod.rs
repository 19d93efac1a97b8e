//! Bouncing token simulation shared by the mood picker and the home
//! screen decoration: a handful of draggable circular tokens that drift,
//! bounce off the viewport edges and off each other, and can be dropped
//! into a target zone to make a selection.
//!
//! Coordinates are viewport pixels with a top-left origin; a token's
//! `position` is its top-left corner, so every token stays inside
//! `[0, extent - size]` on both axes. Velocities are px/s and each step
//! integrates elapsed time, so the feel does not depend on refresh rate.

mod drag;
mod drop_zone;
mod physics;

pub use drag::{
    DragGesture, begin_token_drag, end_token_drag, update_token_drag,
};
pub use drop_zone::{DropZone, DropZoneHover, TokenDeposited};
pub use physics::tick_token_field;

use bevy::prelude::*;

use crate::emoji::Mood;

/// Default token diameter in px.
pub const TOKEN_SIZE: f32 = 64.0;
/// Initial speed range per axis: uniform in [-INIT_SPEED, INIT_SPEED] px/s
/// (2 px/frame at the 60 Hz reference rate).
pub const INIT_SPEED: f32 = 120.0;
/// Velocity damping applied when two tokens collide.
pub const RESTITUTION: f32 = 0.8;
/// Scale from estimated release speed to resumed velocity after a flick.
pub const RELEASE_DAMPING: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(u32);

/// What a token depicts. A tagged variant rather than separate token
/// types, so the physics and collision loop stay uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenGlyph {
    Mood(Mood),
    Letter(char),
}

/// Per-token mode flag gating which subsystem owns its position:
/// `Free ⇄ Dragged → Deposited | Free`. Deposited is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenState {
    #[default]
    Free,
    Dragged,
    Deposited,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: TokenId,
    pub glyph: TokenGlyph,
    /// Top-left corner, viewport px.
    pub position: Vec2,
    /// px/s.
    pub velocity: Vec2,
    pub size: f32,
    pub state: TokenState,
}

impl Token {
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.size / 2.0)
    }

    /// Whether the token participates in physics and collisions this tick.
    pub const fn is_active(&self) -> bool {
        matches!(self.state, TokenState::Free)
    }
}

/// Authoritative owner of the token list. Mutation goes through the
/// accessors below; each physics tick computes a fresh list from a
/// snapshot and swaps it in with [`TokenField::replace`], so readers never
/// observe a half-updated tick.
#[derive(Resource, Debug, Clone)]
pub struct TokenField {
    tokens: Vec<Token>,
    viewport: Vec2,
    dragged: Option<TokenId>,
}

impl TokenField {
    /// One token per glyph, uniformly random position inside the viewport
    /// and velocity components uniform in `[-INIT_SPEED, INIT_SPEED]`.
    /// An empty glyph list yields an empty field with a no-op tick.
    pub fn new(glyphs: impl IntoIterator<Item = TokenGlyph>, viewport: Vec2, size: f32) -> Self {
        let tokens = glyphs
            .into_iter()
            .enumerate()
            .map(|(index, glyph)| {
                let max = (viewport - Vec2::splat(size)).max(Vec2::ZERO);
                Token {
                    id: TokenId(index as u32),
                    glyph,
                    position: Vec2::new(
                        fastrand::f32() * max.x,
                        fastrand::f32() * max.y,
                    ),
                    velocity: Vec2::new(
                        (fastrand::f32() - 0.5) * 2.0 * INIT_SPEED,
                        (fastrand::f32() - 0.5) * 2.0 * INIT_SPEED,
                    ),
                    size,
                    state: TokenState::Free,
                }
            })
            .collect();

        Self {
            tokens,
            viewport,
            dragged: None,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub const fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|token| token.id == id)
    }

    fn get_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.iter_mut().find(|token| token.id == id)
    }

    pub const fn dragged(&self) -> Option<TokenId> {
        self.dragged
    }

    /// Atomically swaps in a freshly computed token list.
    pub fn replace(&mut self, tokens: Vec<Token>) {
        self.tokens = tokens;
    }

    /// Advances the simulation by `dt` seconds. Collision resolution runs
    /// against the pre-tick snapshot, then the whole batch is committed.
    pub fn step(&mut self, dt: f32) {
        if self.tokens.is_empty() {
            return;
        }
        let next = physics::step_snapshot(&self.tokens, self.viewport, dt);
        self.replace(next);
    }

    /// Viewport resize: clamp everything back into the new bounds.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        for token in &mut self.tokens {
            let max = (viewport - Vec2::splat(token.size)).max(Vec2::ZERO);
            token.position = token.position.clamp(Vec2::ZERO, max);
        }
    }

    /// Topmost free token under the given point, for drag pickup.
    pub fn token_at(&self, point: Vec2) -> Option<TokenId> {
        self.tokens
            .iter()
            .filter(|token| token.is_active())
            .filter(|token| token.center().distance(point) <= token.size / 2.0)
            .min_by(|a, b| {
                a.center()
                    .distance(point)
                    .total_cmp(&b.center().distance(point))
            })
            .map(|token| token.id)
    }

    /// Starts a drag. Only one token may be dragged at a time; a dragged
    /// token leaves the physics and collision set until release.
    pub fn begin_drag(&mut self, id: TokenId) -> bool {
        if self.dragged.is_some() {
            return false;
        }
        let Some(token) = self.get_mut(id) else {
            return false;
        };
        if token.state != TokenState::Free {
            return false;
        }
        token.state = TokenState::Dragged;
        token.velocity = Vec2::ZERO;
        self.dragged = Some(id);
        true
    }

    /// Pointer-authoritative positioning while dragged: the token center
    /// tracks the pointer, clamped to the viewport.
    pub fn drag_to(&mut self, id: TokenId, point: Vec2) {
        let viewport = self.viewport;
        let Some(token) = self.get_mut(id) else {
            return;
        };
        if token.state != TokenState::Dragged {
            return;
        }
        let max = (viewport - Vec2::splat(token.size)).max(Vec2::ZERO);
        token.position = (point - Vec2::splat(token.size / 2.0)).clamp(Vec2::ZERO, max);
        token.velocity = Vec2::ZERO;
    }

    /// Releases a drag outside any drop zone: back to `Free`, seeded with
    /// the flick velocity scaled by [`RELEASE_DAMPING`].
    pub fn end_drag(&mut self, id: TokenId, release_velocity: Vec2) {
        if self.dragged != Some(id) {
            return;
        }
        self.dragged = None;
        let Some(token) = self.get_mut(id) else {
            return;
        };
        token.state = TokenState::Free;
        token.velocity = release_velocity * RELEASE_DAMPING;
    }

    /// Releases a drag at `point`. If the point lands in `zone` the token
    /// is deposited (snapped to the zone center, terminal state) and its
    /// glyph is returned; otherwise this is a normal [`Self::end_drag`].
    pub fn end_drag_over(
        &mut self,
        id: TokenId,
        point: Vec2,
        zone: &DropZone,
        release_velocity: Vec2,
    ) -> Option<TokenGlyph> {
        if self.dragged != Some(id) {
            return None;
        }
        if !zone.contains(point) {
            self.end_drag(id, release_velocity);
            return None;
        }

        self.dragged = None;
        let center = zone.center();
        let token = self.get_mut(id)?;
        token.state = TokenState::Deposited;
        token.velocity = Vec2::ZERO;
        token.position = center - Vec2::splat(token.size / 2.0);
        Some(token.glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(count: usize, viewport: Vec2) -> TokenField {
        TokenField::new(
            (0..count).map(|_| TokenGlyph::Letter('o')),
            viewport,
            TOKEN_SIZE,
        )
    }

    #[test]
    fn empty_candidate_list_yields_empty_field() {
        let mut field = TokenField::new([], Vec2::new(800.0, 600.0), TOKEN_SIZE);
        assert!(field.tokens().is_empty());
        field.step(1.0 / 60.0);
        assert!(field.tokens().is_empty());
    }

    #[test]
    fn only_one_token_dragged_per_gesture() {
        let mut field = letters(3, Vec2::new(800.0, 600.0));
        let (first, second) = (field.tokens()[0].id, field.tokens()[1].id);

        assert!(field.begin_drag(first));
        assert!(!field.begin_drag(second), "second drag must be refused");
        assert_eq!(field.dragged(), Some(first));
    }

    #[test]
    fn drag_zeroes_velocity_and_tracks_pointer_clamped() {
        let mut field = letters(1, Vec2::new(800.0, 600.0));
        let id = field.tokens()[0].id;
        assert!(field.begin_drag(id));

        let token = field.get(id).unwrap();
        assert_eq!(token.velocity, Vec2::ZERO);

        field.drag_to(id, Vec2::new(400.0, 300.0));
        let token = field.get(id).unwrap();
        assert_eq!(token.center(), Vec2::new(400.0, 300.0));

        // Pointer outside the viewport clamps to the boundary
        field.drag_to(id, Vec2::new(-500.0, 10_000.0));
        let token = field.get(id).unwrap();
        assert_eq!(token.position.x, 0.0);
        assert_eq!(token.position.y, 600.0 - TOKEN_SIZE);
    }

    #[test]
    fn release_velocity_is_scaled_by_damping_constant() {
        let mut field = letters(1, Vec2::new(800.0, 600.0));
        let id = field.tokens()[0].id;
        assert!(field.begin_drag(id));
        field.drag_to(id, Vec2::new(400.0, 300.0));
        field.end_drag(id, Vec2::new(50.0, 0.0));

        let token = field.get(id).unwrap();
        assert_eq!(token.state, TokenState::Free);
        assert_eq!(token.velocity, Vec2::new(50.0 * RELEASE_DAMPING, 0.0));
    }

    #[test]
    fn drop_at_zone_center_deposits_once() {
        let mut field = letters(2, Vec2::new(800.0, 600.0));
        let id = field.tokens()[0].id;
        let zone = DropZone::new(Rect::new(300.0, 200.0, 500.0, 400.0), 0.0);

        assert!(field.begin_drag(id));
        field.drag_to(id, zone.center());
        let glyph = field.end_drag_over(id, zone.center(), &zone, Vec2::ZERO);
        assert_eq!(glyph, Some(TokenGlyph::Letter('o')));

        let token = field.get(id).unwrap();
        assert_eq!(token.state, TokenState::Deposited);
        assert_eq!(token.center(), zone.center());

        // Terminal: a second release reports nothing and physics skips it
        let again = field.end_drag_over(id, zone.center(), &zone, Vec2::ZERO);
        assert_eq!(again, None);
        let before = field.get(id).unwrap().position;
        field.step(0.5);
        assert_eq!(field.get(id).unwrap().position, before);
    }

    #[test]
    fn shrinking_the_viewport_clamps_tokens_back_inside() {
        let mut field = letters(4, Vec2::new(800.0, 600.0));
        field.set_viewport(Vec2::new(200.0, 150.0));

        for token in field.tokens() {
            assert!(token.position.x <= 200.0 - token.size);
            assert!(token.position.y <= 150.0 - token.size);
        }
    }

    #[test]
    fn miss_far_from_zone_returns_to_free_without_deposit() {
        let mut field = letters(1, Vec2::new(800.0, 600.0));
        let id = field.tokens()[0].id;
        let zone = DropZone::new(Rect::new(300.0, 200.0, 500.0, 400.0), 20.0);

        assert!(field.begin_drag(id));
        field.drag_to(id, Vec2::ZERO);
        let glyph = field.end_drag_over(id, Vec2::ZERO, &zone, Vec2::new(50.0, 0.0));

        assert_eq!(glyph, None);
        let token = field.get(id).unwrap();
        assert_eq!(token.state, TokenState::Free);
        assert_eq!(token.velocity, Vec2::new(50.0 * RELEASE_DAMPING, 0.0));
    }
}
