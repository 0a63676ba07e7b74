//! egui layer: app shell, pages, modals, widgets and theme.

pub mod app;
pub mod modals;
pub mod pages;
pub mod theme;
pub mod widgets;

pub use app::DashboardApp;
