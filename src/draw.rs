//! Terminal front end: renders the grid and acts as the scheduler that
//! keeps stepping the controller while it runs.

use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use log::info;

use crate::config::Configuration;
use crate::proc::Grid;
use crate::sim::SimulationController;

/// Key polling period while paused.
const IDLE_POLL: Duration = Duration::from_millis(150);

pub struct App {
    sim: SimulationController,
    config: Configuration,
    should_exit: bool,
}

impl App {
    /// Configures a controller from `config`, surfacing its errors.
    pub fn new(config: Configuration) -> Result<Self> {
        let mut sim = SimulationController::new();
        sim.configure(&config)?;
        Ok(App {
            sim,
            config,
            should_exit: false,
        })
    }

    /// Starts from a hand-drawn grid; width, height and cell count of
    /// `config` are replaced by the pattern's.
    pub fn with_grid(mut config: Configuration, grid: Grid) -> Self {
        config.width = grid.width();
        config.height = grid.height();
        config.cell_count = grid.population();
        let mut sim = SimulationController::new();
        sim.load(grid, config.rules, config.interval);
        App {
            sim,
            config,
            should_exit: false,
        }
    }

    #[inline]
    pub fn sim(&self) -> &SimulationController {
        &self.sim
    }

    /// The "New" button: reseed with the same parameters. A fixed seed
    /// advances by one so every press gives a new, reproducible layout.
    fn reseed(&mut self) -> Result<()> {
        self.config.seed = self.config.seed.map(|s| s.wrapping_add(1));
        self.sim.configure(&self.config)?;
        info!("new grid, seed {:?}", self.config.seed);
        Ok(())
    }

    fn interval(&self) -> Duration {
        self.sim.interval().unwrap_or(self.config.interval)
    }

    fn status(&self) -> String {
        let state = if self.sim.is_running() { "running" } else { "paused" };
        let rule = self.sim.rules().map(|r| r.to_string()).unwrap_or_default();
        format!(
            "Step {}  [{state}]  {rule}  population {}  (p: play/pause, s: step, n: new, q: quit)",
            self.sim.current_step(),
            self.sim.population()
        )
    }
}

pub fn run(mut a: App) -> Result<()> {
    runup()?;
    let d = draw(&mut a);
    shutdown()?;
    d
}

fn runup() -> Result<()> {
    execute!(std::io::stderr(), EnterAlternateScreen, SetTitle("Life automaton"), Hide)?;
    enable_raw_mode()?;
    Ok(())
}

fn shutdown() -> Result<()> {
    execute!(std::io::stderr(), LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    Ok(())
}

fn draw(a: &mut App) -> Result<()> {
    render(a)?;
    let mut last_tick = Instant::now();

    while !a.should_exit {
        let timeout = if a.sim.is_running() {
            a.interval().saturating_sub(last_tick.elapsed())
        } else {
            IDLE_POLL
        };

        if hotkeys(a, timeout)? {
            last_tick = Instant::now();
            render(a)?;
        }

        if a.sim.is_running() && last_tick.elapsed() >= a.interval() {
            a.sim.step();
            last_tick = Instant::now();
            render(a)?;
        }
    }
    Ok(())
}

fn render(a: &App) -> Result<()> {
    let mut out = stdout().lock();
    write_frame(&mut out, a, terminal::size()?)?;
    out.flush()?;
    Ok(())
}

/// Clears the screen and draws the status line and as much of the grid
/// as fits in `(cols, rows)`, starting at the top-left corner.
fn write_frame(out: &mut impl Write, a: &App, (cols, rows): (u16, u16)) -> Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(out, "{}\n\r", a.status())?;
    if let Some(grid) = a.sim.current_grid() {
        write_grid(out, grid, (cols, rows))?;
    }
    Ok(())
}

fn write_grid(out: &mut impl Write, grid: &Grid, (cols, rows): (u16, u16)) -> Result<()> {
    for row in grid.rows().take(rows.saturating_sub(1) as usize) {
        let line: String = row
            .iter()
            .take(cols as usize)
            .map(|&c| if c { '#' } else { ' ' })
            .collect();
        write!(out, "{line}\n\r")?;
    }
    Ok(())
}

/// Waits up to `timeout` for a key press and applies it. Returns whether
/// the screen needs redrawing.
fn hotkeys(a: &mut App, timeout: Duration) -> Result<bool> {
    if !event::poll(timeout)? {
        return Ok(false);
    }
    let Event::Key(key) = event::read()? else {
        return Ok(false);
    };
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            a.should_exit = true;
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => a.should_exit = true,
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            a.sim.toggle();
            return Ok(true);
        }
        KeyCode::Char('s') => {
            a.sim.step();
            return Ok(true);
        }
        KeyCode::Char('n') => {
            a.reseed()?;
            return Ok(true);
        }
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawConfig;

    #[test]
    fn reseed_advances_fixed_seed() {
        let config = RawConfig::default().parse().unwrap().with_seed(10);
        let mut a = App::new(config).unwrap();
        let first = a.sim().current_grid().cloned();
        a.sim.play();
        a.reseed().unwrap();
        assert_eq!(a.config.seed, Some(11));
        assert!(!a.sim().is_running());
        assert_eq!(a.sim().current_step(), 0);
        assert_ne!(a.sim().current_grid().cloned(), first);
    }

    #[test]
    fn pattern_overrides_dimensions() {
        let config = RawConfig::default().parse().unwrap();
        let grid = Grid::from_text("...\n###\n...\n...\n").unwrap();
        let a = App::with_grid(config, grid.clone());
        assert_eq!((a.config.width, a.config.height, a.config.cell_count), (3, 4, 3));
        assert_eq!(a.sim().current_grid(), Some(&grid));
    }

    #[test]
    fn frame_starts_at_top_left_and_fits_terminal() {
        let config = RawConfig::default().parse().unwrap();
        let grid = Grid::from_text("#..#\n....\n.##.\n").unwrap();
        let a = App::with_grid(config, grid);

        let mut buf = Vec::new();
        write_frame(&mut buf, &a, (3, 3)).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("\x1b[2J\x1b[1;1HStep 0  [paused]"));
        // one line for the status, two grid rows cut to three columns
        assert!(text.ends_with("\n\r#  \n\r   \n\r"));
    }

    #[test]
    fn status_line() {
        let config = RawConfig::default().parse().unwrap().with_seed(1);
        let a = App::new(config).unwrap();
        let s = a.status();
        assert!(s.starts_with("Step 0  [paused]  B3/S23  population 1000"));
    }
}
