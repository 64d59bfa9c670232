// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (bars, listing, search, legend)
// - render: Main orchestration function that coordinates all rendering
// - system_bar: Renders top bar (server, view, signed-in state)
// - breadcrumb: Renders the breadcrumb path and the listing panel
// - legend: Renders hotkey legend
// - search: Renders search input box with query and pending indicator
// - status_bar: Renders bottom status bar (items, sort, errors)
// - dialogs: Renders the new-folder and upload prompts
// - login: Renders the login form
// - toast: Renders toast notifications (brief pop-up messages)

pub mod breadcrumb;
pub mod dialogs;
pub mod layout;
pub mod legend;
pub mod login;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod system_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
