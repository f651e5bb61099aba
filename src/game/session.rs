use super::arena::EntityArena;
use super::camera::{CameraConfig, FollowCamera};
use super::constants::FOOD_TRIGGER_RADIUS;
use super::direction::DirectionIntent;
use super::environment::Environment;
use super::snake::{SnakeBody, SnakeParams};
use super::spawner::FoodSpawner;
use super::types::{FoodItem, SessionEvent, SessionSnapshot, SnakeSnapshot};
use anyhow::{ensure, Result};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub seed: u64,
    pub spawn_position: Vec3,
    pub initial_direction: Vec3,
    pub snake: SnakeParams,
    pub camera: CameraConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            spawn_position: Vec3::new(0.0, 1.0, 0.0),
            initial_direction: Vec3::Z,
            snake: SnakeParams::default(),
            camera: CameraConfig::default(),
        }
    }
}

/// One game session: the snake, the single active food item, the follow
/// camera and the entity registry, advanced by one logical tick per frame.
/// Everything is owned here and mutated only through `tick`, so no locking
/// is ever involved.
#[derive(Debug)]
pub struct GameSession {
    environment: Environment,
    arena: EntityArena,
    snake: SnakeBody,
    spawner: FoodSpawner,
    camera: FollowCamera,
    food: Option<FoodItem>,
    rng: StdRng,
    tick_count: u64,
}

impl GameSession {
    /// Builds a session over the given environment. Core movement
    /// parameters are validated here, once; a bad camera configuration only
    /// disables the camera (see `FollowCamera::new`).
    pub fn new(config: SessionConfig, environment: Environment) -> Result<Self> {
        let snake = &config.snake;
        ensure!(
            snake.move_speed.is_finite() && snake.move_speed > 0.0,
            "move_speed must be positive, got {}",
            snake.move_speed
        );
        ensure!(
            snake.spacing.is_finite() && snake.spacing > 0.0,
            "spacing must be positive, got {}",
            snake.spacing
        );
        ensure!(
            snake.sample_interval.is_finite() && snake.sample_interval > 0.0,
            "sample_interval must be positive, got {}",
            snake.sample_interval
        );
        ensure!(
            snake.turn_rate.is_finite() && snake.turn_rate > 0.0,
            "turn_rate must be positive, got {}",
            snake.turn_rate
        );

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut arena = EntityArena::new();
        let snake = SnakeBody::spawn(
            config.spawn_position,
            config.initial_direction,
            config.snake,
            &environment,
            &mut arena,
        );
        let spawner = FoodSpawner::default();
        let food = spawner.spawn(&mut rng, &environment, &mut arena);
        let camera = FollowCamera::new(config.camera);

        Ok(Self {
            environment,
            arena,
            snake,
            spawner,
            camera,
            food,
            rng,
            tick_count: 0,
        })
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn food(&self) -> Option<&FoodItem> {
        self.food.as_ref()
    }

    pub fn arena(&self) -> &EntityArena {
        &self.arena
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Queues a steering intent for the next tick. Intents submitted after
    /// death are dropped.
    pub fn submit_intent(&mut self, intent: DirectionIntent) {
        if self.snake.is_alive() {
            self.snake.submit_intent(intent);
        }
    }

    /// Advances one tick: snake movement and death checks first, then food
    /// consumption and replacement, camera last so it frames fully resolved
    /// positions. On the death tick a `ReloadRequested` event is returned
    /// exactly once; afterwards the session is inert.
    pub fn tick(&mut self, dt: f32) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if !self.snake.is_alive() {
            return events;
        }
        self.tick_count += 1;

        if self.snake.step(dt, &self.environment, &mut self.arena).is_some() {
            events.push(SessionEvent::ReloadRequested);
            return events;
        }

        if self.head_touches_food() {
            self.consume_food(&mut events);
        } else if self.food.is_none() {
            // An earlier placement failed; keep retrying until a free,
            // grounded cell turns up.
            self.food = self
                .spawner
                .spawn(&mut self.rng, &self.environment, &mut self.arena);
        }

        self.camera
            .update(self.snake.head(), self.snake.direction(), dt);
        events
    }

    fn head_touches_food(&self) -> bool {
        match &self.food {
            Some(item) => {
                self.snake.head().position.distance(item.position) < FOOD_TRIGGER_RADIUS
            }
            None => false,
        }
    }

    /// Consuming is one logical step: drop the food entity, grow, place a
    /// replacement. A failed placement still grows the snake and leaves the
    /// food slot empty until a later tick succeeds.
    fn consume_food(&mut self, events: &mut Vec<SessionEvent>) {
        let Some(item) = self.food.take() else { return };
        self.arena.destroy(item.entity);
        self.snake.add_segment(&mut self.arena);
        events.push(SessionEvent::FoodEaten);
        tracing::debug!(segments = self.snake.segments().len(), "food eaten");
        self.food = self
            .spawner
            .spawn(&mut self.rng, &self.environment, &mut self.arena);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tick: self.tick_count,
            snake: SnakeSnapshot {
                alive: self.snake.is_alive(),
                head: self.snake.head().position,
                direction: self.snake.direction(),
                segments: self
                    .snake
                    .segments()
                    .iter()
                    .map(|segment| segment.position)
                    .collect(),
            },
            food: self.food.as_ref().map(|item| item.position),
            camera: self.camera.pose().map(|pose| pose.position),
        }
    }
}
