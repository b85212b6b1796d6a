//! UI Components
//!
//! Reusable Leptos components.

mod banner;
mod circle_checkbox;
mod confirm_button;
mod date_input;
mod dropdown;
mod error_panel;
mod footer;
mod header;
mod list_buttons;
mod observation_dialog;
mod stage_card;
mod task_group;
mod text_area;
mod text_input;

pub use banner::ResultBanner;
pub use circle_checkbox::CircleCheckbox;
pub use confirm_button::ConfirmButton;
pub use date_input::DateInput;
pub use dropdown::Dropdown;
pub use error_panel::ErrorPanel;
pub use footer::Footer;
pub use header::Header;
pub use list_buttons::{AppendButton, RemoveButton};
pub use observation_dialog::ObservationDialog;
pub use stage_card::StageCard;
pub use task_group::TaskGroup;
pub use text_area::TextArea;
pub use text_input::TextInput;
