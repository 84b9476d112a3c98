//! The views module contains the top-level pages of the app.

mod search_dashboard;
pub use search_dashboard::SearchDashboard;
