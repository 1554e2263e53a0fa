pub mod game_flow;
pub mod registry;

pub use game_flow::GameFlowService;
pub use registry::{GameRegistry, SharedGame};
