pub mod agents;
pub mod context;
pub mod turn;

pub use context::SessionContext;
pub use turn::{TurnOutcome, handle_turn};
