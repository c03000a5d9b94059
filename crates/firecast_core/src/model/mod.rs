mod accounts;
mod assumptions;
mod ids;
mod results;

pub use accounts::{AccountSet, StartingBalances};
pub use assumptions::{Assumptions, MAX_HORIZON_YEARS};
pub use ids::AccountId;
pub use results::{Projection, ProjectionSnapshot};
