//! Team balancer business logic: balancing and the shareable listing.

mod balance;
mod listing;

pub use balance::{generate_teams, generate_teams_with_rng};
pub use listing::format_team_list;
