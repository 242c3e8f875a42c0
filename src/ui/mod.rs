pub mod app;
pub mod cell;
pub mod diff;
pub mod events;
pub mod flow;
pub mod footer;
pub mod grid;
pub mod grid_view;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod pool;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
