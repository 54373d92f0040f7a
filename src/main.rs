//! Rim Runner headless runner
//!
//! Plays the game against an in-memory screen with seeded random or scripted
//! input and prints a JSON summary of the run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use rim_runner::consts::RING_CAPACITY;
use rim_runner::sim::{Collision, GameEvent, GamePhase, GameState, Screen, TickInput, tick};
use rim_runner::{Difficulty, Settings};

#[derive(Parser, Debug)]
#[command(name = "rim-runner")]
#[command(about = "Run Rim Runner headless and report what happened")]
struct Args {
    /// Settings file (JSON); defaults are used when it does not exist
    #[arg(long, default_value = "rim-runner.json")]
    settings: PathBuf,
    /// Override the difficulty preset from the settings file
    #[arg(long)]
    difficulty: Option<String>,
    /// Ticks to simulate
    #[arg(long, default_value_t = 20_000)]
    ticks: u64,
    /// Seed for the random input script
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Chance per tick that the button changes state
    #[arg(long, default_value_t = 0.05)]
    press_rate: f64,
    /// Input script of `0`/`1` characters, one per tick, looped
    #[arg(long)]
    script: Option<PathBuf>,
    /// Write the final screen bitmap here
    #[arg(long)]
    screen: Option<PathBuf>,
}

/// Where the per-tick input comes from
enum InputSource {
    Random { rng: Pcg32, rate: f64, held: bool },
    Script { presses: Vec<bool>, next: usize },
}

impl InputSource {
    fn next(&mut self) -> TickInput {
        let pressed = match self {
            InputSource::Random { rng, rate, held } => {
                if rng.random_bool(*rate) {
                    *held = !*held;
                }
                *held
            }
            InputSource::Script { presses, next } => {
                let pressed = presses[*next % presses.len()];
                *next += 1;
                pressed
            }
        };
        TickInput { pressed }
    }
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    ticks: u64,
    games: u32,
    levels_cleared: u32,
    lives_lost: u32,
    flew_into_streak: u32,
    struck_by_streak: u32,
    game_overs: u32,
    victories: u32,
    best_level: usize,
    ring_peak: usize,
    final_phase: Option<GamePhase>,
    final_level: usize,
    lit_pixels: u32,
}

/// Game instance driven by the runner
struct Game {
    state: GameState,
    screen: Screen,
    summary: Summary,
    last_phase: GamePhase,
}

impl Game {
    fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(settings),
            screen: Screen::new(),
            summary: Summary::default(),
            last_phase: GamePhase::Intro,
        }
    }

    fn update(&mut self, input: &TickInput) {
        tick(&mut self.state, input, &mut self.screen);

        for event in &self.state.events {
            match event {
                GameEvent::LevelStarted { level, label } => {
                    log::debug!("Level {} ({}) started", level + 1, label);
                    if self.last_phase == GamePhase::Intro {
                        self.summary.games += 1;
                    }
                    self.summary.best_level = self.summary.best_level.max(*level);
                }
                GameEvent::ShipHit { collision } => match collision {
                    Collision::Flew => self.summary.flew_into_streak += 1,
                    Collision::Struck => self.summary.struck_by_streak += 1,
                },
                GameEvent::LevelCleared { .. } => self.summary.levels_cleared += 1,
                GameEvent::LifeLost { .. } => self.summary.lives_lost += 1,
                GameEvent::GameOver => self.summary.game_overs += 1,
                GameEvent::Victory => self.summary.victories += 1,
                GameEvent::Note { .. } | GameEvent::Restart => {}
            }
        }

        if self.state.phase != self.last_phase {
            log::debug!(
                "Tick {}: {:?} -> {:?}",
                self.state.time_ticks,
                self.last_phase,
                self.state.phase
            );
            self.last_phase = self.state.phase;
        }
    }

    fn finish(mut self) -> (Summary, Screen) {
        self.summary.ticks = self.state.time_ticks;
        self.summary.ring_peak = self.state.ring.peak();
        self.summary.final_phase = Some(self.state.phase);
        self.summary.final_level = self.state.level;
        self.summary.lit_pixels = self.screen.lit();
        (self.summary, self.screen)
    }
}

fn load_script(path: &Path) -> Result<Vec<bool>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed reading {}", path.display()))?;
    let presses: Vec<bool> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(anyhow::anyhow!("unexpected {other:?} in input script")),
        })
        .collect::<Result<_>>()?;
    if presses.is_empty() {
        bail!("input script {} is empty", path.display());
    }
    Ok(presses)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut settings = Settings::load_or_default(&args.settings)
        .with_context(|| format!("failed loading settings {}", args.settings.display()))?;
    if let Some(name) = &args.difficulty {
        match Difficulty::from_str(name) {
            Some(preset) => settings.apply_preset(preset),
            None => log::warn!(
                "Unknown difficulty {:?}, keeping {}",
                name,
                settings.difficulty.as_str()
            ),
        }
    }
    settings.validate()?;
    log::info!(
        "Rim Runner headless: {} difficulty, {} ticks",
        settings.difficulty.as_str(),
        args.ticks
    );

    let mut input = match &args.script {
        Some(path) => InputSource::Script {
            presses: load_script(path)?,
            next: 0,
        },
        None => InputSource::Random {
            rng: Pcg32::seed_from_u64(args.seed),
            rate: args.press_rate.clamp(0.0, 1.0),
            held: false,
        },
    };

    let mut game = Game::new(settings);
    for _ in 0..args.ticks {
        let tick_input = input.next();
        game.update(&tick_input);
    }

    let (summary, screen) = game.finish();
    if summary.ring_peak > RING_CAPACITY {
        bail!("ring peaked at {} cells", summary.ring_peak);
    }

    if let Some(path) = &args.screen {
        fs::write(path, screen.as_bytes())
            .with_context(|| format!("failed writing {}", path.display()))?;
        log::info!("Screen written to {}", path.display());
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
