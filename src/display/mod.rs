//! Display formatting for terminal output
//!
//! Turns reports and models into text, honouring the currency symbol, date
//! format and locale from the settings.

pub mod category;
pub mod dashboard;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use dashboard::format_dashboard;
pub use transaction::{format_recent_table, format_transaction_details};
