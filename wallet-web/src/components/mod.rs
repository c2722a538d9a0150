//! UI Components

pub mod demo;
pub mod navbar;

pub use demo::{DemoView, ThemeToggle};
pub use navbar::Navbar;
