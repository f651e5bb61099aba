use super::arena::{EntityArena, EntityKind};
use super::constants::{
    CELL_SIZE, FOOD_PROBE_DISTANCE, FOOD_PROBE_HEIGHT, FOOD_Y_OFFSET, GRID_CELLS_X, GRID_CELLS_Z,
    MAX_SPAWN_ATTEMPTS,
};
use super::environment::GroundProbe;
use super::types::FoodItem;
use glam::{Quat, Vec3};
use rand::Rng;

/// Places food on a random free, grounded cell of the playfield.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    grid_cells: (i32, i32),
    cell_size: f32,
    food_offset: f32,
    max_attempts: usize,
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self {
            grid_cells: (GRID_CELLS_X, GRID_CELLS_Z),
            cell_size: CELL_SIZE,
            food_offset: FOOD_Y_OFFSET,
            max_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }
}

impl FoodSpawner {
    pub fn new(grid_cells: (i32, i32), cell_size: f32) -> Self {
        Self {
            grid_cells,
            cell_size,
            ..Self::default()
        }
    }

    /// Tries up to `max_attempts` random cells. A candidate is accepted when
    /// a downward probe finds ground and no body segment occupies the cell;
    /// the food entity is created slightly above the hit point. Exhausting
    /// every attempt is a degraded outcome, not an error: no food exists
    /// until a later call succeeds.
    pub fn spawn<R: Rng>(
        &self,
        rng: &mut R,
        ground: &dyn GroundProbe,
        arena: &mut EntityArena,
    ) -> Option<FoodItem> {
        let (cells_x, cells_z) = self.grid_cells;
        for attempt in 0..self.max_attempts {
            let cell_x = rng.gen_range(-cells_x / 2..cells_x / 2);
            let cell_z = rng.gen_range(-cells_z / 2..cells_z / 2);
            let candidate = Vec3::new(
                cell_x as f32 * self.cell_size,
                FOOD_PROBE_HEIGHT,
                cell_z as f32 * self.cell_size,
            );

            let Some(hit) = ground.probe_down(candidate, FOOD_PROBE_DISTANCE) else {
                continue;
            };
            let position = hit.point + Vec3::Y * self.food_offset;
            if self.is_occupied(position, arena) {
                continue;
            }

            let entity = arena.create(EntityKind::Food, position, Quat::IDENTITY);
            tracing::debug!(attempt, ?position, "food placed");
            return Some(FoodItem { position, entity });
        }

        tracing::warn!(
            attempts = self.max_attempts,
            "no free cell found for food"
        );
        None
    }

    fn is_occupied(&self, position: Vec3, arena: &EntityArena) -> bool {
        let exclusion = self.cell_size * 0.5;
        arena
            .positions_of_kind(EntityKind::BodySegment)
            .any(|body| body.distance(position) < exclusion)
    }
}
