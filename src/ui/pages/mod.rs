//! Application screens
//!
//! - Landing page (signed out)
//! - Dashboard (batches, study material, AI tutor)
//! - Live class room (students)
//! - Admin control room (instructors)

mod admin_panel;
mod catalog_editor;
mod dashboard;
mod landing;
mod live_class;
mod not_found;

pub use admin_panel::AdminPanel;
pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use live_class::LiveClassRoom;
pub use not_found::NotFoundPage;
