//! Planet HUD terminal host
//!
//! Keys:
//!   1-4        pick SIM x1 / SIM x10 / SIM x100 / REAL WORLD
//!   Tab        open the mode menu
//!   Up/Down    scroll the city menu
//!   Enter      pick the highlighted city
//!   q / Esc    quit
//!
//! The mouse works too. Set `PLANET_HUD_LOG=<file>` to write logs; the
//! filter comes from `RUST_LOG`.

mod render;

use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use hud_core::HudResult;
use hud_runtime::{Hud, HudConfig, HudEvent, HudSender, HudService};
use hud_time::{SystemTimeSource, TimeSource};

/// Env var naming the log file
const LOG_ENV: &str = "PLANET_HUD_LOG";

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| err as Box<dyn std::error::Error>)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let (cols, rows) = terminal::size()?;
    let config = HudConfig {
        surface: render::surface_for(cols, rows),
        ..HudConfig::default()
    };
    let redraw = config.tick_interval;
    let source = SystemTimeSource;
    let hud = Hud::new(config, source.now())?;
    let (handle, mut signals) = HudService::spawn(hud, source);
    info!(cols, rows, "terminal host started");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let sender = handle.sender();
    let input = thread::spawn(move || read_input(sender));

    let result = draw_loop(&mut stdout, &handle, &mut signals, &input, redraw).await;

    if let Err(err) = execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen) {
        error!(?err, "failed to leave alternate screen");
    }
    if let Err(err) = terminal::disable_raw_mode() {
        error!(?err, "failed to disable raw mode");
    }

    let hud = handle.shutdown().await?;
    info!(ticks = hud.stats().ticks, events = hud.stats().events, "terminal host stopped");
    match input.join() {
        Ok(outcome) => outcome?,
        Err(_) => error!("input thread panicked"),
    }
    result.map_err(Into::into)
}

async fn draw_loop(
    stdout: &mut Stdout,
    handle: &hud_runtime::HudHandle,
    signals: &mut tokio::sync::mpsc::UnboundedReceiver<hud_runtime::HudSignal>,
    input: &thread::JoinHandle<HudResult<()>>,
    every: Duration,
) -> io::Result<()> {
    let mut redraw = tokio::time::interval(every);
    while !input.is_finished() {
        tokio::select! {
            _ = redraw.tick() => render::draw(stdout, &handle.frame())?,
            Some(signal) = signals.recv() => debug!(?signal, "hud signal"),
        }
    }
    Ok(())
}

/// Translate terminal input into HUD events until the user quits
/// or the service stops
fn read_input(sender: HudSender) -> HudResult<()> {
    loop {
        let ready = match event::poll(Duration::from_millis(100)) {
            Ok(ready) => ready,
            Err(err) => {
                error!(?err, "terminal poll failed");
                return Ok(());
            }
        };
        if !ready {
            if sender.is_closed() {
                debug!("service stopped, input thread exiting");
                return Ok(());
            }
            continue;
        }
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                error!(?err, "terminal read failed");
                return Ok(());
            }
        };

        let hud_event = match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(c @ '1'..='4') => Some(HudEvent::ModeIndexSelected(
                    c as usize - '1' as usize,
                )),
                KeyCode::Tab => Some(HudEvent::TogglePressed),
                KeyCode::Up => Some(HudEvent::ScrollCities(-1)),
                KeyCode::Down => Some(HudEvent::ScrollCities(1)),
                KeyCode::Enter => {
                    render::first_visible_city(&sender.frame()).map(HudEvent::CitySelected)
                }
                _ => None,
            },
            Event::Mouse(mouse) => {
                let at = render::cell_center(mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => Some(HudEvent::PointerPressed(at)),
                    MouseEventKind::Moved => Some(HudEvent::PointerMoved(at)),
                    MouseEventKind::ScrollDown => Some(HudEvent::Wheel { at, rotation: 1 }),
                    MouseEventKind::ScrollUp => Some(HudEvent::Wheel { at, rotation: -1 }),
                    _ => None,
                }
            }
            Event::FocusLost => Some(HudEvent::PointerExited),
            Event::Resize(cols, rows) => Some(HudEvent::Resized(render::surface_for(cols, rows))),
            _ => None,
        };

        if let Some(hud_event) = hud_event {
            sender.blocking_send(hud_event)?;
        }
    }
}
