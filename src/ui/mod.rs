pub mod ai_gateway;
pub mod ai_tutor_chat;
pub mod context;
pub mod form;
pub mod icon;
pub mod markdown;
pub mod navbar;
pub mod pages;
pub mod tabs;

pub use context::{AppContext, provide_app_context, use_app_context};
pub use icon::{Icon, icons};
pub use navbar::Navbar;
