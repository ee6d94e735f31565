//! Console surface: the menu loop plus its prompting and table-rendering
//! helpers.

mod app;
mod prompt;
mod table;

pub use app::App;
