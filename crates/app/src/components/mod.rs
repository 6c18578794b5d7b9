pub mod dialog;
pub mod role_gate;
pub mod status;
pub mod ui;

pub use dialog::ConfirmDialog;
pub use role_gate::RoleGate;
pub use status::StatusBar;
pub use ui::*;
