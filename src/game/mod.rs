pub mod arena;
pub mod camera;
pub mod constants;
pub mod direction;
pub mod environment;
pub mod history;
pub mod math;
pub mod session;
pub mod snake;
pub mod spawner;
pub mod types;

pub use arena::{EntityArena, EntityHandle, EntityKind};
pub use camera::{CameraConfig, FollowCamera};
pub use direction::{DirectionController, DirectionIntent, RelativeDirection};
pub use environment::{Environment, GroundHit, GroundProbe, Pit};
pub use history::PathHistory;
pub use session::{GameSession, SessionConfig};
pub use snake::{SnakeBody, SnakeParams};
pub use spawner::FoodSpawner;
pub use types::{DeathCause, SessionEvent, SessionSnapshot};
