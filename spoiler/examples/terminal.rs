//! Terminal demo: a long paragraph clamped to a few rows.
//!
//! Space/Enter toggles, click the toggle with the mouse, `+`/`-` change the
//! clamp height, `q` quits. Logs go to `spoiler.log`.

use std::fs::File;
use std::io::{self, Stdout, Write};

use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEventKind, MouseButton, MouseEventKind,
};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, execute, queue, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use spoiler::{
    ContentKey, ControlRef, Event, Key, Spoiler, SpoilerConfig, SpoilerView, TextProbe,
};

const TEXT: &str = "Rust is a multi-paradigm, general-purpose programming language that \
emphasizes performance, type safety, and concurrency. It enforces memory safety, meaning \
that all references point to valid memory, without a garbage collector.\n\n\
To simultaneously enforce memory safety and prevent data races, its borrow checker tracks \
the object lifetime of all references in a program during compilation. Rust was influenced \
by ideas from functional programming, including immutability, higher-order functions, \
algebraic data types, and pattern matching.\n\n\
Software developer Graydon Hoare created Rust as a personal project while working at \
Mozilla Research in 2006. Mozilla officially sponsored the project in 2009.";

const MARGIN: u16 = 2;
const TEXT_TOP: u16 = 2;

fn main() -> io::Result<()> {
    let log_file = File::create("spoiler.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&mut stdout);

    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout) -> io::Result<()> {
    let control_ref = ControlRef::new();
    let config = SpoilerConfig::new("[ Show more ]", "[ Hide ]").max_height(5.0);
    let mut spoiler = Spoiler::with_id("demo", config).control_ref(control_ref.clone());
    let mut probe = TextProbe::new();

    loop {
        let (width, _) = terminal::size()?;
        let text_width = width.saturating_sub(MARGIN * 2);

        probe.insert(spoiler.measure_target(), TEXT, text_width);
        spoiler.commit(ContentKey::of(&(TEXT, text_width)), &probe);
        let view = spoiler.render();

        let lines = probe.lines(spoiler.measure_target());
        let control_row = draw(stdout, &spoiler, &view, &lines)?;

        let event = match event::read()? {
            CtEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('+') => {
                    spoiler.set_max_height(spoiler.config().max_height + 1.0);
                    continue;
                }
                KeyCode::Char('-') => {
                    spoiler.set_max_height(spoiler.config().max_height - 1.0);
                    continue;
                }
                KeyCode::Enter => Event::Key {
                    target: control_ref.get(),
                    key: Key::Enter,
                },
                KeyCode::Char(c) => Event::Key {
                    target: control_ref.get(),
                    key: Key::Char(c),
                },
                _ => continue,
            },
            CtEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let on_control = control_row == Some(mouse.row);
                Event::Click {
                    target: on_control.then(|| spoiler.control_id()),
                }
            }
            _ => continue,
        };

        if let Some(toggled) = spoiler.handle_event(&event) {
            log::info!("toggled: {:?}", toggled);
        }
    }
}

/// Paint one frame. Returns the row of the toggle, if shown.
fn draw(
    stdout: &mut Stdout,
    spoiler: &Spoiler<&'static str>,
    view: &SpoilerView<&'static str>,
    lines: &[String],
) -> io::Result<Option<u16>> {
    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

    let status = format!(
        "max_height={} phase={:?} measured={:?} transition={}ms",
        spoiler.config().max_height,
        spoiler.phase(),
        spoiler.measured_height(),
        view.content.transition_duration.as_millis(),
    );
    queue!(
        stdout,
        cursor::MoveTo(MARGIN, 0),
        SetAttribute(Attribute::Dim),
        Print(status),
        SetAttribute(Attribute::Reset)
    )?;

    let visible = view
        .content
        .max_height
        .map(|rows| rows.floor() as usize)
        .unwrap_or(lines.len())
        .min(lines.len());

    let mut row = TEXT_TOP;
    for line in &lines[..visible] {
        queue!(stdout, cursor::MoveTo(MARGIN, row), Print(line))?;
        row = row.saturating_add(1);
    }

    let control_row = match &view.control {
        Some(control) => {
            let control_row = row.saturating_add(1);
            queue!(
                stdout,
                cursor::MoveTo(MARGIN, control_row),
                SetAttribute(Attribute::Reverse),
                Print(control.label),
                SetAttribute(Attribute::Reset)
            )?;
            Some(control_row)
        }
        None => None,
    };

    stdout.flush()?;
    Ok(control_row)
}
