//! Application context and event loop.
//!
//! One blocking `tao` loop on the main thread; every handler runs
//! synchronously inside it, so there is no locking anywhere in the
//! process. `App` owns the single tray registration for the process
//! lifetime: created once at loop start, dropped once at teardown.

use log::{debug, error, info};
use tao::event::{Event, StartCause};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tray_icon::menu::MenuEvent;
use tray_icon::{TrayIcon, TrayIconEvent};
use traystamp_core::{StampKind, TrayAction, clipboard, stamp};

use crate::tray;

/// Events forwarded into the loop by the tray machinery's handlers.
pub enum UserEvent {
    Menu(MenuEvent),
    Tray(TrayIconEvent),
}

/// What the loop should do after a handled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Owns the tray registration. At most one exists per process.
#[derive(Default)]
struct App {
    tray: Option<TrayIcon>,
}

impl App {
    /// Register the notification-area icon. Failure here is fatal:
    /// the caller exits with a non-zero status, no retry.
    fn register_tray(&mut self) -> anyhow::Result<()> {
        self.tray = Some(tray::register()?);
        info!("tray icon registered");
        Ok(())
    }

    /// Dispatch a chosen menu entry.
    fn handle_menu(&mut self, id: &str) -> Flow {
        match TrayAction::from_id(id) {
            Some(TrayAction::Copy(kind)) => {
                self.copy(kind);
                Flow::Continue
            }
            Some(TrayAction::Quit) => {
                info!("exit requested");
                Flow::Exit
            }
            None => {
                debug!("ignoring unknown menu id {id:?}");
                Flow::Continue
            }
        }
    }

    /// Icon clicks carry no action of their own; the context menu
    /// popup is driven by the OS integration.
    fn handle_tray_event(&self, event: &TrayIconEvent) {
        debug!("tray event: {event:?}");
    }

    /// Format the current local time and hand it to the clipboard.
    /// A failed copy is logged and abandoned; the process stays
    /// responsive to further menu invocations.
    fn copy(&self, kind: StampKind) {
        let text = stamp::now(kind);
        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => debug!("copied {text:?} to clipboard"),
            Err(err) => error!("copy abandoned: {err}"),
        }
    }

    /// Drop the tray registration so the shell removes the icon.
    fn teardown(&mut self) {
        if self.tray.take().is_some() {
            info!("tray icon removed");
        }
    }
}

/// Run the blocking event loop. Never returns: the process exits with
/// code 0 after a user-requested exit and code 1 on startup failure.
pub fn run() -> ! {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Menu(event));
    }));

    let proxy = event_loop.create_proxy();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Tray(event));
    }));

    let mut app = App::default();

    event_loop.run(move |event, _, control_flow| {
        // The control flow persists between events; it is set to Wait
        // once at startup and only touched again on the exit paths.
        match event {
            Event::NewEvents(StartCause::Init) => {
                *control_flow = ControlFlow::Wait;
                if let Err(err) = app.register_tray() {
                    error!("{err:#}");
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            }
            Event::UserEvent(UserEvent::Menu(menu_event)) => {
                if app.handle_menu(menu_event.id.as_ref()) == Flow::Exit {
                    app.teardown();
                    *control_flow = ControlFlow::Exit;
                }
            }
            Event::UserEvent(UserEvent::Tray(tray_event)) => {
                app.handle_tray_event(&tray_event);
            }
            Event::LoopDestroyed => app.teardown(),
            _ => {}
        }
    })
}
