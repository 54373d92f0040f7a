//! Game state and level sequencing
//!
//! All state the tick mutates lives here; nothing is held in globals.

use serde::Serialize;

use super::cell::CellTable;
use super::emitter::Emitter;
use super::levels::{CAMPAIGN, VICTORY_TUNE};
use super::ring::ActiveRing;
use super::ship::{Collision, Ship};
use super::surface::Surface;
use crate::consts::DEATH_TICKS;
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen, waiting for the control to be pressed
    Intro,
    /// Ship and emitter running
    Playing,
    /// Level cleared, counting down to the next one
    Flash { ticks_left: u16 },
    /// Death sequence running
    Dying,
    /// Game over screen
    GameOver { ticks_left: u16 },
    /// Whole campaign cleared, playing the victory tune
    Victory { note: usize, ticks_left: u8 },
}

/// Cues for the display and audio collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    LevelStarted { level: usize, label: &'static str },
    ShipHit { collision: Collision },
    LevelCleared { level: usize },
    LifeLost { lives_left: i8 },
    GameOver,
    Victory,
    Note { pitch: u8, ticks: u8 },
    /// Back to the title screen
    Restart,
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Campaign index
    pub level: usize,
    /// Spare lives
    pub lives: i8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    pub emitter: Emitter,
    pub ring: ActiveRing,
    /// Events raised during the last tick
    pub events: Vec<GameEvent>,
    pub settings: Settings,
    /// Control state on the previous tick (menus use the rising edge)
    pub last_input: bool,
    #[serde(skip)]
    table: CellTable,
}

impl GameState {
    /// Create a new game sitting on the title screen
    ///
    /// A start level past the end of the campaign is clamped to the last level.
    pub fn new(mut settings: Settings) -> Self {
        let last = CAMPAIGN.len() - 1;
        if settings.start_level > last {
            log::warn!(
                "Start level {} is past the campaign, starting at {}",
                settings.start_level + 1,
                last + 1
            );
            settings.start_level = last;
        }
        Self {
            phase: GamePhase::Intro,
            level: settings.start_level,
            lives: settings.lives,
            time_ticks: 0,
            ship: Ship::new(settings.ship_step),
            emitter: Emitter::Done,
            ring: ActiveRing::new(),
            events: Vec::new(),
            settings,
            last_input: false,
            table: CellTable::new(),
        }
    }

    pub fn table(&self) -> &CellTable {
        &self.table
    }

    /// Split borrow for the subsystems that run inside one tick
    pub(crate) fn parts(&mut self) -> (&mut Ship, &mut Emitter, &mut ActiveRing, &CellTable) {
        (&mut self.ship, &mut self.emitter, &mut self.ring, &self.table)
    }

    /// Begin a game from the configured level
    pub fn start_game(&mut self, surface: &mut impl Surface) {
        self.level = self.settings.start_level;
        self.lives = self.settings.lives;
        log::info!(
            "New game: level {}, {} spare lives",
            self.level + 1,
            self.lives
        );
        self.load_level(surface);
    }

    /// Wipe the field and start the current level from scratch
    pub fn load_level(&mut self, surface: &mut impl Surface) {
        self.table.wipe(surface);
        self.ring.clear();
        self.ship.reset();

        let level = &CAMPAIGN[self.level];
        self.emitter = level.start_emitter();
        log::info!("Level {}: {}", self.level + 1, level.label);
        self.events.push(GameEvent::LevelStarted {
            level: self.level,
            label: level.label,
        });
        self.phase = GamePhase::Playing;
    }

    /// Advance phase counters and switch phases; runs after the field update
    pub fn update_phase(&mut self, pressed: bool, emitter_done: bool, surface: &mut impl Surface) {
        match self.phase {
            GamePhase::Intro => {
                if pressed && !self.last_input {
                    self.start_game(surface);
                    self.ship.hold_input(pressed);
                }
            }
            GamePhase::Playing => {
                if !self.ship.is_alive() {
                    self.phase = GamePhase::Dying;
                } else if emitter_done {
                    log::info!("Level {} cleared", self.level + 1);
                    self.events.push(GameEvent::LevelCleared { level: self.level });
                    self.phase = GamePhase::Flash {
                        ticks_left: self.settings.flash_ticks,
                    };
                }
            }
            GamePhase::Flash { ticks_left } => {
                if ticks_left > 1 {
                    self.phase = GamePhase::Flash {
                        ticks_left: ticks_left - 1,
                    };
                } else {
                    self.next_level(surface);
                }
            }
            GamePhase::Dying => {
                if self.ship.dying >= DEATH_TICKS {
                    self.lose_life(surface);
                }
            }
            GamePhase::GameOver { ticks_left } => {
                if ticks_left > 1 {
                    self.phase = GamePhase::GameOver {
                        ticks_left: ticks_left - 1,
                    };
                } else {
                    self.restart(surface);
                }
            }
            GamePhase::Victory { note, ticks_left } => {
                if ticks_left > 1 {
                    self.phase = GamePhase::Victory {
                        note,
                        ticks_left: ticks_left - 1,
                    };
                } else if note + 1 < VICTORY_TUNE.len() {
                    self.play_note(note + 1);
                } else {
                    self.restart(surface);
                }
            }
        }
        self.last_input = pressed;
    }

    pub fn record_hit(&mut self, collision: Collision) {
        self.events.push(GameEvent::ShipHit { collision });
    }

    fn next_level(&mut self, surface: &mut impl Surface) {
        self.level += 1;
        if self.level >= CAMPAIGN.len() {
            log::info!("Campaign complete");
            self.table.wipe(surface);
            self.ship.forget_drawing();
            self.events.push(GameEvent::Victory);
            self.play_note(0);
        } else {
            self.load_level(surface);
        }
    }

    fn lose_life(&mut self, surface: &mut impl Surface) {
        self.lives -= 1;
        self.events.push(GameEvent::LifeLost {
            lives_left: self.lives,
        });
        if self.lives < 0 {
            log::info!("Game over on level {}", self.level + 1);
            self.table.wipe(surface);
            self.ship.forget_drawing();
            self.ring.clear();
            self.events.push(GameEvent::GameOver);
            self.phase = GamePhase::GameOver {
                ticks_left: self.settings.game_over_ticks,
            };
        } else {
            log::info!("Life lost, {} spare", self.lives);
            self.load_level(surface);
        }
    }

    fn play_note(&mut self, note: usize) {
        let (pitch, ticks) = VICTORY_TUNE[note];
        self.events.push(GameEvent::Note { pitch, ticks });
        self.phase = GamePhase::Victory {
            note,
            ticks_left: ticks,
        };
    }

    /// Back to the title screen with a fresh game
    fn restart(&mut self, surface: &mut impl Surface) {
        self.table.wipe(surface);
        self.ring.clear();
        self.ship.reset();
        self.emitter = Emitter::Done;
        self.level = self.settings.start_level;
        self.lives = self.settings.lives;
        self.events.push(GameEvent::Restart);
        self.phase = GamePhase::Intro;
    }
}
