pub mod action;
pub mod clipboard;
pub mod stamp;

pub use action::{StampKind, TrayAction};
pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use stamp::{now, render};
