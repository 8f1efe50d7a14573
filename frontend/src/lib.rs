pub mod app;
mod components;
mod pages;

pub use app::{render_document, App};

