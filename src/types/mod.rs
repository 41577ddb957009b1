pub mod decision;
pub mod results;
pub mod turn;

pub use decision::RoutingDecision;
pub use results::{ResultRow, ResultSet};
pub use turn::{Role, Turn};

// Include tests
#[cfg(test)]
mod tests;
