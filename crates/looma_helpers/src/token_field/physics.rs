use bevy::prelude::*;

use super::{RESTITUTION, Token, TokenField};

/// Buffer added to the collision distance so neighbors part before they
/// visually touch.
const COLLISION_BUFFER: f32 = 2.0;
/// Below this fraction of the token size a pair gets an extra separation
/// push to break up degenerate simultaneous collisions.
const STUCK_FRACTION: f32 = 0.8;

/// Frame-driven tick: advances the field by the elapsed frame time.
pub fn tick_token_field(time: Res<Time>, mut field: ResMut<TokenField>) {
    field.step(time.delta_secs());
}

/// Advances every free token by one tick against the pre-tick snapshot
/// and returns the next token list. Dragged tokens are pointer-owned and
/// deposited tokens are parked, so both pass through untouched.
///
/// Per token: integrate, reflect on the viewport walls (sign flip only,
/// no energy loss), then resolve overlaps with every other active token
/// by reversing and dampening the velocity and pushing out along the line
/// of centers. Collision response is the deliberately simple reflect-and-
/// dampen model rather than a line-of-centers elastic exchange.
pub(super) fn step_snapshot(prev: &[Token], viewport: Vec2, dt: f32) -> Vec<Token> {
    prev.iter()
        .map(|token| {
            if !token.is_active() {
                return token.clone();
            }

            let max = (viewport - Vec2::splat(token.size)).max(Vec2::ZERO);
            let mut position = token.position + token.velocity * dt;
            let mut velocity = token.velocity;

            // Elastic wall bounce, each axis independently.
            if position.x <= 0.0 || position.x >= max.x {
                velocity.x = -velocity.x;
                position.x = position.x.clamp(0.0, max.x);
            }
            if position.y <= 0.0 || position.y >= max.y {
                velocity.y = -velocity.y;
                position.y = position.y.clamp(0.0, max.y);
            }

            // O(n²) pair check against the snapshot; n stays tiny here.
            let half = Vec2::splat(token.size / 2.0);
            for other in prev {
                if other.id == token.id || !other.is_active() {
                    continue;
                }
                let delta = (position + half) - other.center();
                let distance = delta.length();
                let min_distance = token.size + COLLISION_BUFFER;

                // distance == 0 means coincident centers; no usable
                // separation axis, skip the pair this tick.
                if distance < min_distance && distance > 0.0 {
                    velocity = -velocity * RESTITUTION;

                    let separation = (delta / distance) * (min_distance - distance);
                    position += separation;

                    // Anti-sticking: still overlapping deeply, push further.
                    if distance < token.size * STUCK_FRACTION {
                        position += separation * 0.5;
                    }
                }
            }

            // Numeric anomalies are corrected, never surfaced.
            if !position.is_finite() {
                position = token.position;
            }
            position = position.clamp(Vec2::ZERO, max);

            Token {
                position,
                velocity,
                ..token.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::{TOKEN_SIZE, TokenGlyph, TokenId, TokenState};
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn token(id: u32, position: Vec2, velocity: Vec2, size: f32) -> Token {
        Token {
            id: TokenId(id),
            glyph: TokenGlyph::Letter('o'),
            position,
            velocity,
            size,
            state: TokenState::Free,
        }
    }

    #[test]
    fn eight_tokens_stay_in_bounds_for_100_ticks() {
        let viewport = Vec2::new(800.0, 600.0);
        let mut field = TokenField::new(
            "oooooooo".chars().map(TokenGlyph::Letter),
            viewport,
            TOKEN_SIZE,
        );

        for _ in 0..100 {
            field.step(DT);
        }

        assert_eq!(field.tokens().len(), 8, "token set must not shrink");
        for token in field.tokens() {
            assert_eq!(token.glyph, TokenGlyph::Letter('o'));
            assert!(
                token.position.x >= 0.0 && token.position.x <= viewport.x - token.size,
                "x out of bounds: {}",
                token.position.x
            );
            assert!(
                token.position.y >= 0.0 && token.position.y <= viewport.y - token.size,
                "y out of bounds: {}",
                token.position.y
            );
        }
    }

    #[test]
    fn wall_bounce_flips_sign_and_keeps_magnitude() {
        let viewport = Vec2::new(800.0, 600.0);
        // Heading into the right wall, alone in the field
        let start = token(
            0,
            Vec2::new(viewport.x - TOKEN_SIZE - 1.0, 300.0),
            Vec2::new(240.0, 30.0),
            TOKEN_SIZE,
        );

        let next = step_snapshot(&[start], viewport, DT);
        let bounced = &next[0];
        assert_eq!(bounced.velocity, Vec2::new(-240.0, 30.0));
        assert_eq!(bounced.position.x, viewport.x - TOKEN_SIZE);
    }

    #[test]
    fn overlapping_tokens_separate_monotonically() {
        let viewport = Vec2::new(800.0, 600.0);
        let a = token(0, Vec2::new(300.0, 300.0), Vec2::new(60.0, 0.0), TOKEN_SIZE);
        let b = token(1, Vec2::new(330.0, 300.0), Vec2::new(-60.0, 0.0), TOKEN_SIZE);
        let before = (a.center() - b.center()).length();

        let next = step_snapshot(&[a, b], viewport, DT);
        let after = (next[0].center() - next[1].center()).length();

        assert!(
            after >= before,
            "separation must not decrease: {before} -> {after}"
        );
        // Reverse-and-dampen response
        assert_eq!(next[0].velocity.x, -60.0 * RESTITUTION);
        assert_eq!(next[1].velocity.x, 60.0 * RESTITUTION);
    }

    #[test]
    fn coincident_tokens_unstick_without_nan() {
        let viewport = Vec2::new(800.0, 600.0);
        let size = 64.0;
        // Same spot, slightly different velocities so integration breaks
        // the exact overlap before the pair check runs.
        let a = token(0, Vec2::new(400.0, 300.0), Vec2::new(90.0, 0.0), size);
        let b = token(1, Vec2::new(400.0, 300.0), Vec2::new(-90.0, 30.0), size);

        let next = step_snapshot(&[a, b], viewport, DT);
        for token in &next {
            assert!(
                token.position.is_finite(),
                "position must never go NaN: {:?}",
                token.position
            );
        }
        let after = (next[0].center() - next[1].center()).length();
        assert!(after > 1.0, "pair must separate, got {after}");
    }

    #[test]
    fn exactly_coincident_pair_is_skipped_not_crashed() {
        let viewport = Vec2::new(800.0, 600.0);
        let a = token(0, Vec2::new(400.0, 300.0), Vec2::ZERO, TOKEN_SIZE);
        let b = token(1, Vec2::new(400.0, 300.0), Vec2::ZERO, TOKEN_SIZE);

        let next = step_snapshot(&[a, b], viewport, DT);
        for token in &next {
            assert!(token.position.is_finite());
            assert_eq!(token.position, Vec2::new(400.0, 300.0));
        }
    }

    #[test]
    fn dragged_token_is_never_moved_by_the_stepper() {
        let viewport = Vec2::new(800.0, 600.0);
        let mut dragged = token(
            0,
            Vec2::new(100.0, 100.0),
            Vec2::new(300.0, 300.0),
            TOKEN_SIZE,
        );
        dragged.state = TokenState::Dragged;
        // A free neighbor overlapping the dragged token
        let free = token(1, Vec2::new(110.0, 100.0), Vec2::new(-60.0, 0.0), TOKEN_SIZE);

        let next = step_snapshot(&[dragged.clone(), free], viewport, DT);
        assert_eq!(next[0].position, dragged.position);
        assert_eq!(next[0].state, TokenState::Dragged);
    }
}
