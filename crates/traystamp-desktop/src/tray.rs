//! Tray icon and context-menu construction.

use anyhow::{Context, Result};
use tray_icon::{
    Icon, TrayIcon, TrayIconBuilder,
    menu::{Menu, MenuItem, PredefinedMenuItem},
};
use traystamp_core::{StampKind, TrayAction};

pub const TRAY_ID: &str = "traystamp-tray";

const TOOLTIP: &str = "Copy the current date or time to the clipboard";

// Embedded at compile time so the binary carries its own icon
const ICON_BYTES: &[u8] = include_bytes!("../icons/traystamp.png");

/// Register the notification-area icon with its context menu.
///
/// Called once, after the event loop is live (on Linux the icon must
/// be created on the thread that owns the gtk loop). The returned
/// handle owns the registration; dropping it removes the icon.
pub fn register() -> Result<TrayIcon> {
    let menu = build_menu()?;
    let icon = load_icon()?;

    TrayIconBuilder::new()
        .with_id(TRAY_ID)
        .with_menu(Box::new(menu))
        .with_tooltip(TOOLTIP)
        .with_icon(icon)
        .build()
        .context("Failed to register tray icon")
}

/// Build the context menu: one entry per copyable stamp, a separator,
/// then Exit. Item ids are the stable action ids, so the menu-event
/// handler can resolve a selection without holding item handles.
fn build_menu() -> Result<Menu> {
    let copy_date = menu_item(TrayAction::Copy(StampKind::Date));
    let copy_time = menu_item(TrayAction::Copy(StampKind::Time));
    let copy_datetime = menu_item(TrayAction::Copy(StampKind::DateTime));
    let quit = menu_item(TrayAction::Quit);

    Menu::with_items(&[
        &copy_date,
        &copy_time,
        &copy_datetime,
        &PredefinedMenuItem::separator(),
        &quit,
    ])
    .context("Failed to build tray menu")
}

fn menu_item(action: TrayAction) -> MenuItem {
    MenuItem::with_id(action.as_str(), action.label(), true, None)
}

fn load_icon() -> Result<Icon> {
    let img = image::load_from_memory(ICON_BYTES).context("Failed to decode tray icon")?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Icon::from_rgba(rgba.into_raw(), width, height).context("Failed to create tray icon")
}
