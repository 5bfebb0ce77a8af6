pub mod daily_well_check;
pub mod fixtures;

// Re-export daily_well_check definitions
pub use daily_well_check::{DAILY_WELL_CHECK_RESPONSE, daily_well_check, daily_well_check_from_json};

// Re-export fixture definitions
pub use fixtures::{goto_next, goto_step, page_branches, two_pages};
