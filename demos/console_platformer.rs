use platformer_phys::{ActorIntent, BodyView, SimulationConfig, Stage, StageLoader, StepClock, World, WorldSnapshot};
use crossterm::{
    ExecutableCommand, QueueableCommand,
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io::{stdout, Stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const FRAME_DURATION: Duration = Duration::from_millis(16); // ~60 FPS

// Terminals report presses, rarely releases: a press counts as held this long
const KEY_HOLD: Duration = Duration::from_millis(150);

const SPRINT_FACTOR: f32 = 1.8;

// One block is two columns wide and one row tall
const UNITS_PER_COLUMN: f32 = 15.0;
const UNITS_PER_ROW: f32 = 30.0;

#[derive(Debug, Default)]
struct Keys {
    left: Option<Instant>,
    right: Option<Instant>,
    sprint: bool,
    jump: bool,
    quit: bool,
}

impl Keys {
    fn press(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.left = Some(now);
                self.right = None;
                self.sprint = shifted;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.right = Some(now);
                self.left = None;
                self.sprint = shifted;
            }
            KeyCode::Char(' ') | KeyCode::Up => self.jump = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Intent for the next tick; a pending jump is handed over once
    fn intent(&mut self, now: Instant) -> ActorIntent {
        let held = |pressed: Option<Instant>| pressed.map_or(false, |t| now.duration_since(t) < KEY_HOLD);
        let direction = match (held(self.left), held(self.right)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        let speed = if self.sprint { SPRINT_FACTOR } else { 1.0 };

        ActorIntent {
            move_intent: direction * speed,
            jump: std::mem::take(&mut self.jump),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; run with `2>platformer.log` to keep them off the screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let stage = Stage::default_stage();
    let mut world = StageLoader::default().load(&stage, SimulationConfig::default())?;
    info!(bodies = world.body_count(), "world ready");

    let columns = (stage.width() as f32 * StageLoader::default().block_size / UNITS_PER_COLUMN) as usize;
    let rows = stage.height();

    let mut stdout = stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(Hide)?.execute(Clear(ClearType::All))?;

    let result = run(&mut world, &mut stdout, columns, rows);

    // Restore the terminal even if the loop failed
    stdout.execute(Show)?.execute(MoveTo(0, rows as u16 + 3))?;
    terminal::disable_raw_mode()?;
    result
}

fn run(world: &mut World, stdout: &mut Stdout, columns: usize, rows: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut keys = Keys::default();
    let mut clock = StepClock::new();

    loop {
        let frame = Instant::now();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                keys.press(key, frame);
            }
        }
        if keys.quit {
            info!(ticks = world.get_tick(), "quit");
            return Ok(());
        }

        world.set_intent(keys.intent(frame));
        if let Err(err) = world.advance(&mut clock) {
            warn!(%err, "tick dropped");
        }

        draw(stdout, &world.snapshot(), columns, rows)?;

        // Timing control
        let elapsed = frame.elapsed();
        if elapsed < FRAME_DURATION {
            sleep(FRAME_DURATION - elapsed);
        }
    }
}

fn draw(stdout: &mut Stdout, snapshot: &WorldSnapshot, columns: usize, rows: usize) -> std::io::Result<()> {
    let mut grid = vec![vec![' '; columns]; rows];

    for body in &snapshot.bodies {
        match (body.fixed, body.one_way) {
            (true, true) => paint(&mut grid, body, '='),
            (true, false) => paint(&mut grid, body, '#'),
            _ => {}
        }
    }

    let player = snapshot.player.as_ref();
    if let Some(view) = player.and_then(|p| snapshot.bodies.iter().find(|b| b.handle == p.handle)) {
        let center = view.rect().center();
        put(&mut grid, cell(center.x, UNITS_PER_COLUMN), cell(center.y, UNITS_PER_ROW), '@');
    }

    for (i, row) in grid.iter().enumerate() {
        stdout
            .queue(MoveTo(0, i as u16))?
            .queue(SetForegroundColor(Color::White))?
            .queue(Print(row.iter().collect::<String>()))?;
    }

    let status = player.map_or_else(|| "no player".to_string(), |p| p.to_string());
    stdout
        .queue(MoveTo(0, rows as u16 + 1))?
        .queue(SetForegroundColor(Color::Yellow))?
        .queue(Print(format!("{:<100}", status)))?
        .queue(MoveTo(0, rows as u16 + 2))?
        .queue(SetForegroundColor(Color::DarkGrey))?
        .queue(Print("A/D move, Shift sprint, Space jump, Esc quit"))?
        .queue(ResetColor)?;

    stdout.flush()
}

fn cell(coordinate: f32, units: f32) -> isize {
    (coordinate / units).floor() as isize
}

fn paint(grid: &mut [Vec<char>], body: &BodyView, glyph: char) {
    let rect = body.rect();
    let (left, right) = (cell(rect.left(), UNITS_PER_COLUMN), cell(rect.right() - 0.01, UNITS_PER_COLUMN));
    let (top, bottom) = (cell(rect.top(), UNITS_PER_ROW), cell(rect.bottom() - 0.01, UNITS_PER_ROW));

    for row in top..=bottom {
        for column in left..=right {
            put(grid, column, row, glyph);
        }
    }
}

fn put(grid: &mut [Vec<char>], column: isize, row: isize, glyph: char) {
    if column < 0 || row < 0 {
        return;
    }
    if let Some(slot) = grid.get_mut(row as usize).and_then(|r| r.get_mut(column as usize)) {
        *slot = glyph;
    }
}
