use super::arena::{EntityArena, EntityKind};
use super::constants::{
    COLLISION_FACTOR, GROUND_PROBE_DISTANCE, HEAD_HALF_HEIGHT, MIN_LOOK_DISTANCE,
    SEGMENT_LERP_MULT, SELF_COLLISION_SKIP, SETTLE_PROBE_DISTANCE, STARTING_SEGMENTS,
};
use super::direction::{DirectionController, DirectionIntent};
use super::environment::GroundProbe;
use super::history::PathHistory;
use super::math::{look_rotation, smoothing_factor};
use super::types::{BodySegment, DeathCause, HeadState};
use glam::Vec3;

/// Movement tuning for one snake.
#[derive(Debug, Clone, Copy)]
pub struct SnakeParams {
    pub move_speed: f32,
    pub turn_rate: f32,
    pub spacing: f32,
    pub sample_interval: f32,
    pub starting_segments: usize,
}

impl Default for SnakeParams {
    fn default() -> Self {
        Self {
            move_speed: super::constants::MOVE_SPEED,
            turn_rate: super::constants::HEAD_TURN_RATE,
            spacing: super::constants::BODY_SPACING,
            sample_interval: super::constants::SAMPLE_INTERVAL,
            starting_segments: STARTING_SEGMENTS,
        }
    }
}

/// The head plus its trailing segment chain. Segments do not simulate on
/// their own; each tick they chase a point resampled from the head's
/// recorded path at a fixed arc-length offset, which keeps the chain rigidly
/// spaced through abrupt turns.
#[derive(Debug)]
pub struct SnakeBody {
    head: HeadState,
    direction: DirectionController,
    segments: Vec<BodySegment>,
    history: PathHistory,
    params: SnakeParams,
    alive: bool,
}

impl SnakeBody {
    /// Creates a snake settled onto the ground at `origin`, facing
    /// `initial_direction`, with its starter segments trailing behind. The
    /// head orientation is fixed before the segments spawn so they line up
    /// along the initial heading.
    pub fn spawn(
        origin: Vec3,
        initial_direction: Vec3,
        params: SnakeParams,
        ground: &dyn GroundProbe,
        arena: &mut EntityArena,
    ) -> Self {
        let direction = DirectionController::new(initial_direction);
        let mut position = origin;
        if let Some(hit) = ground.probe_down(origin, SETTLE_PROBE_DISTANCE) {
            position.y = hit.point.y + HEAD_HALF_HEIGHT;
        }
        let rotation = look_rotation(direction.current(), Vec3::Y);

        let mut body = Self {
            head: HeadState { position, rotation },
            direction,
            segments: Vec::new(),
            history: PathHistory::new(params.spacing, params.sample_interval),
            params,
            alive: true,
        };
        for _ in 0..params.starting_segments {
            body.add_segment(arena);
        }
        let count = body.segments.len();
        body.history.push(body.head.position, count);
        body
    }

    pub fn head(&self) -> &HeadState {
        &self.head
    }

    pub fn direction(&self) -> Vec3 {
        self.direction.current()
    }

    pub fn segments(&self) -> &[BodySegment] {
        &self.segments
    }

    pub fn history(&self) -> &PathHistory {
        &self.history
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Queues a steering intent for the next step. Last writer wins within
    /// a tick.
    pub fn submit_intent(&mut self, intent: DirectionIntent) {
        self.direction.submit(intent);
    }

    /// Appends one segment at the current tail (or one spacing behind the
    /// head when the chain is empty), orientation copied from its
    /// predecessor.
    pub fn add_segment(&mut self, arena: &mut EntityArena) {
        let (parent_position, parent_rotation) = match self.segments.last() {
            Some(tail) => (tail.position, tail.rotation),
            None => (self.head.position, self.head.rotation),
        };
        let position = parent_position - (parent_rotation * Vec3::Z) * self.params.spacing;
        let entity = arena.create(EntityKind::BodySegment, position, parent_rotation);
        self.segments.push(BodySegment {
            position,
            rotation: parent_rotation,
            entity,
        });
    }

    /// Advances one simulation tick: resolve direction, move and turn the
    /// head, record the path, pull each segment along it, then evaluate the
    /// death conditions. Returns the cause of death on the Alive -> Dead
    /// transition.
    pub fn step(
        &mut self,
        dt: f32,
        ground: &dyn GroundProbe,
        arena: &mut EntityArena,
    ) -> Option<DeathCause> {
        if !self.alive {
            return None;
        }

        let direction = self
            .direction
            .resolve(self.head.rotation, self.segments.len());

        // Facing is presentational; the head translates along the raw
        // cardinal direction even while the visual turn is still catching up.
        let target_rotation = look_rotation(direction, Vec3::Y);
        let turn = smoothing_factor(self.params.turn_rate, dt);
        self.head.rotation = self.head.rotation.slerp(target_rotation, turn);
        self.head.position += direction * self.params.move_speed * dt;

        self.history.push(self.head.position, self.segments.len());
        self.follow_history(dt, arena);

        if let Some(cause) = self.check_death(ground) {
            self.alive = false;
            tracing::debug!(?cause, "snake died");
            return Some(cause);
        }
        None
    }

    fn follow_history(&mut self, dt: f32, arena: &mut EntityArena) {
        let interval = self.history.sample_interval();
        let chase = smoothing_factor(self.params.move_speed * SEGMENT_LERP_MULT, dt);
        let turn = smoothing_factor(self.params.turn_rate, dt);

        for (index, segment) in self.segments.iter_mut().enumerate() {
            let history_index =
                ((index + 1) as f32 * self.params.spacing / interval).floor() as usize;
            let Some(target) = self.history.sample(history_index) else {
                continue;
            };
            segment.position = segment.position.lerp(target, chase);

            let look_target = if history_index == 0 {
                self.head.position
            } else {
                // Clamped sampling keeps this valid even when history_index
                // was itself clamped to the oldest sample.
                self.history
                    .sample(history_index - 1)
                    .unwrap_or(self.head.position)
            };
            if segment.position.distance(look_target) > MIN_LOOK_DISTANCE {
                let face = look_rotation(look_target - segment.position, Vec3::Y);
                segment.rotation = segment.rotation.slerp(face, turn);
            }
            arena.set_pose(segment.entity, segment.position, segment.rotation);
        }
    }

    fn check_death(&self, ground: &dyn GroundProbe) -> Option<DeathCause> {
        // The first two segments sit next to the head by construction and
        // would trip the check on every turn.
        let threshold = self.params.spacing * COLLISION_FACTOR;
        for segment in self.segments.iter().skip(SELF_COLLISION_SKIP) {
            if segment.position.distance(self.head.position) < threshold {
                return Some(DeathCause::SelfCollision);
            }
        }
        if ground
            .probe_down(self.head.position, GROUND_PROBE_DISTANCE)
            .is_none()
        {
            return Some(DeathCause::GroundLost);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::RelativeDirection;
    use crate::game::environment::Environment;
    use glam::Vec2;

    const DT: f32 = 0.1;

    fn flat_ground() -> Environment {
        Environment::flat(Vec2::splat(100.0))
    }

    fn spawn_default(arena: &mut EntityArena) -> SnakeBody {
        SnakeBody::spawn(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::Z,
            SnakeParams::default(),
            &flat_ground(),
            arena,
        )
    }

    #[test]
    fn spawn_settles_head_on_ground_with_starter_segments() {
        let mut arena = EntityArena::new();
        let snake = spawn_default(&mut arena);
        assert!(snake.is_alive());
        assert_eq!(snake.segments().len(), STARTING_SEGMENTS);
        assert!((snake.head().position.y - HEAD_HALF_HEIGHT).abs() < 1e-6);
        // Starter segments trail behind the head along -Z.
        assert!(snake.segments()[0].position.z < snake.head().position.z);
        assert_eq!(snake.history().len(), 1);
    }

    #[test]
    fn head_advances_by_direction_speed_dt() {
        let mut arena = EntityArena::new();
        let mut snake = SnakeBody::spawn(
            Vec3::new(0.0, 0.1, 0.0),
            Vec3::Z,
            SnakeParams::default(),
            &flat_ground(),
            &mut arena,
        );
        snake.head.position = Vec3::ZERO;
        assert!(snake.step(DT, &flat_ground(), &mut arena).is_none());
        let head = snake.head().position;
        assert!((head - Vec3::new(0.0, 0.0, 0.5)).length() < 1e-5);
    }

    #[test]
    fn growth_appends_exactly_one_segment_at_the_tail() {
        let mut arena = EntityArena::new();
        let mut snake = spawn_default(&mut arena);
        let before = snake.segments().len();
        let tail = *snake.segments().last().unwrap();

        snake.add_segment(&mut arena);

        assert_eq!(snake.segments().len(), before + 1);
        let added = snake.segments().last().unwrap();
        let expected = tail.position - (tail.rotation * Vec3::Z) * snake.params.spacing;
        assert!((added.position - expected).length() < 1e-5);
        assert!(arena.get(added.entity).is_some());
    }

    #[test]
    fn growth_on_empty_chain_offsets_behind_head() {
        let mut arena = EntityArena::new();
        let mut snake = SnakeBody::spawn(
            Vec3::ZERO,
            Vec3::Z,
            SnakeParams {
                starting_segments: 0,
                ..SnakeParams::default()
            },
            &flat_ground(),
            &mut arena,
        );
        snake.add_segment(&mut arena);
        let added = snake.segments()[0];
        let expected = snake.head().position - Vec3::Z * snake.params.spacing;
        assert!((added.position - expected).length() < 1e-5);
    }

    #[test]
    fn segment_targets_never_skip_forward() {
        let mut arena = EntityArena::new();
        let mut snake = spawn_default(&mut arena);
        let ground = flat_ground();
        let interval = snake.history().sample_interval();
        let spacing = snake.params.spacing;

        let mut previous: Vec<usize> = vec![0; snake.segments().len()];
        for _ in 0..100 {
            snake.step(DT, &ground, &mut arena);
            for (i, previous_index) in previous.iter_mut().enumerate() {
                let raw = ((i + 1) as f32 * spacing / interval).floor() as usize;
                let clamped = raw.min(snake.history().len() - 1);
                // On a straight path the resolved index only grows as the
                // history fills, then settles; it never steps back.
                assert!(clamped >= *previous_index);
                *previous_index = clamped;
            }
        }
    }

    #[test]
    fn segments_settle_into_even_spacing() {
        let mut arena = EntityArena::new();
        let mut snake = spawn_default(&mut arena);
        let ground = flat_ground();
        for _ in 0..300 {
            snake.step(0.02, &ground, &mut arena);
        }
        assert!(snake.is_alive());
        // Exponential chasing leaves each segment lagging its resampled
        // target by the same amount, so consecutive gaps stay even.
        let positions: Vec<Vec3> = snake.segments().iter().map(|s| s.position).collect();
        for pair in positions.windows(2) {
            let gap = pair[0].distance(pair[1]);
            assert!(gap > 0.35 && gap < 0.9, "gap was {gap}");
        }
        let head_gap = snake.head().position.distance(positions[0]);
        assert!(head_gap > 0.5 && head_gap < 2.0, "head gap was {head_gap}");
    }

    #[test]
    fn close_segment_beyond_index_two_kills_the_snake() {
        let mut arena = EntityArena::new();
        let mut snake = spawn_default(&mut arena);
        let ground = flat_ground();
        snake.segments[2].position = snake.head.position + Vec3::X * 0.3;

        // A tiny step barely disturbs the planted segment, so the proximity
        // check sees it within 0.8 * spacing of the head.
        let cause = snake.step(0.001, &ground, &mut arena);
        assert_eq!(cause, Some(DeathCause::SelfCollision));
        assert!(!snake.is_alive());
        // Dead snakes stop stepping.
        assert!(snake.step(DT, &ground, &mut arena).is_none());
    }

    #[test]
    fn first_two_segments_never_trigger_collision() {
        let mut arena = EntityArena::new();
        let mut snake = spawn_default(&mut arena);
        let ground = flat_ground();
        snake.segments[0].position = snake.head.position;
        snake.segments[1].position = snake.head.position;
        assert!(snake.step(DT, &ground, &mut arena).is_none());
        assert!(snake.is_alive());
    }

    #[test]
    fn leaving_the_floor_kills_the_snake() {
        let mut arena = EntityArena::new();
        let ground = Environment::flat(Vec2::splat(1.0));
        let mut snake = SnakeBody::spawn(
            Vec3::new(0.0, 0.1, 0.0),
            Vec3::Z,
            SnakeParams::default(),
            &ground,
            &mut arena,
        );
        // One step at speed 5 carries the head past the 1-unit half extent.
        let mut cause = None;
        for _ in 0..10 {
            cause = snake.step(DT, &ground, &mut arena);
            if cause.is_some() {
                break;
            }
        }
        assert_eq!(cause, Some(DeathCause::GroundLost));
    }

    #[test]
    fn turning_never_reverses_into_the_body() {
        let mut arena = EntityArena::new();
        let mut snake = spawn_default(&mut arena);
        let ground = flat_ground();
        snake.submit_intent(DirectionIntent::Relative(RelativeDirection::Back));
        snake.step(DT, &ground, &mut arena);
        assert_eq!(snake.direction(), Vec3::Z);

        snake.submit_intent(DirectionIntent::Relative(RelativeDirection::Left));
        snake.step(DT, &ground, &mut arena);
        assert_eq!(snake.direction(), -Vec3::X);
    }
}
