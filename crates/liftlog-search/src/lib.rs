//! Name search over a loaded workout list.
//!
//! Searching is a pure projection: it never touches storage and never
//! trims the canonical list. Every query change is re-applied to the full
//! list.

mod filter;
mod view;

pub use filter::{NameFilter, filter_by_name};
pub use view::WorkoutSearch;
