//! Client sync view: the browser app that keeps the student table in step with the store.
//!
//! - **API** (`api/`) - reqwasm calls against the REST gateway (web builds only)
//! - **Model** (`model/`) - target-independent view state: form mode, table rows, toasts
//! - **Component** (`component/`) - reusable Dioxus building blocks
//! - **Route** (`route/`) - pages wired to the router

pub mod api;
pub mod app;
pub mod component;
pub mod constant;
pub mod model;
pub mod route;
pub mod router;

pub use app::App;
