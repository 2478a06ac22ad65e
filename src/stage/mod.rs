//! ASCII stage layouts and the loader that turns them into a [`World`]
//!
//! Each glyph is one `block_size` square cell; row `i`, column `j` lands at
//! `(j * block_size, i * block_size)`:
//!
//! * `o` – solid block, tag "block"
//! * `-` – one-way bridge, a tenth of a block tall, tag "bridge"
//! * anything else – empty
//!
//! The player starts above the first `o` of the bottom row, which therefore
//! must exist.

use crate::bodies::{tags, Body};
use crate::core::{BodyHandle, SimulationConfig, World};
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;
use tracing::debug;

/// Glyph for a solid block
pub const BLOCK_GLYPH: char = 'o';

/// Glyph for a one-way bridge
pub const BRIDGE_GLYPH: char = '-';

/// Glyph used for empty cells when generating stages
pub const AIR_GLYPH: char = '_';

/// The player spawns two rows above the bottom row, so shorter stages cannot hold it
pub const MIN_ROWS: usize = 3;

/// The stock 20x18 stage
pub const DEFAULT_STAGE: [&str; 18] = [
    "_________________o-o",
    "____________________",
    "____________o_______",
    "____________o_______",
    "________________o___",
    "________________o___",
    "____________________",
    "___________________o",
    "__________o--_---o_o",
    "___________________o",
    "____________________",
    "____________o----o__",
    "____________________",
    "____________________",
    "__________o----o____",
    "____________________",
    "____________________",
    "ooo-----oooo-----ooo",
];

/// A validated rectangular glyph grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    rows: Vec<Vec<char>>,
}

impl Stage {
    /// Builds a stage from rows of glyphs
    ///
    /// Rows must be non-empty and of equal width, there must be at least
    /// [`MIN_ROWS`] of them, and the bottom row needs
    /// at least one block for the player to start on.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let rows: Vec<Vec<char>> = rows.iter().map(|row| row.as_ref().chars().collect()).collect();

        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(PhysicsError::InvalidStage("stage is empty".to_string())),
        };
        if rows.len() < MIN_ROWS {
            return Err(PhysicsError::InvalidStage(format!(
                "stage has {} rows, need at least {}",
                rows.len(),
                MIN_ROWS
            )));
        }
        if let Some(i) = rows.iter().position(|row| row.len() != width) {
            return Err(PhysicsError::InvalidStage(format!(
                "row {} has {} cells, expected {}",
                i,
                rows[i].len(),
                width
            )));
        }

        let stage = Self { rows };
        if stage.spawn_column().is_none() {
            return Err(PhysicsError::InvalidStage(format!(
                "bottom row has no '{}' for the player to start on",
                BLOCK_GLYPH
            )));
        }
        Ok(stage)
    }

    /// Parses newline-separated rows; blank lines and surrounding whitespace are ignored
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&rows)
    }

    /// The stock stage
    pub fn default_stage() -> Self {
        Self {
            rows: DEFAULT_STAGE.iter().map(|row| row.chars().collect()).collect(),
        }
    }

    /// Generates a random stage
    ///
    /// Every third row counted from the bottom is drawn from `"_oo--"`; the
    /// others are air. The bottom row is solid so the player has a floor.
    #[cfg(feature = "procgen")]
    pub fn generate<R: rand::Rng + ?Sized>(rng: &mut R, width: usize, rows: usize) -> Result<Self> {
        use rand::seq::SliceRandom;

        const PALETTE: [char; 5] = ['_', 'o', 'o', '-', '-'];

        if width == 0 || rows < MIN_ROWS {
            return Err(PhysicsError::InvalidStage(format!(
                "cannot generate a {}x{} stage",
                width, rows
            )));
        }

        let mut grid: Vec<Vec<char>> = (0..rows)
            .rev()
            .map(|i| {
                if i % 3 == 0 {
                    (0..width)
                        .map(|_| *PALETTE.choose(&mut *rng).unwrap_or(&AIR_GLYPH))
                        .collect()
                } else {
                    vec![AIR_GLYPH; width]
                }
            })
            .collect();
        if let Some(bottom) = grid.last_mut() {
            bottom.fill(BLOCK_GLYPH);
        }

        Ok(Self { rows: grid })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Glyph at row `i`, column `j`
    pub fn glyph(&self, i: usize, j: usize) -> Option<char> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Iterates over `(row, column, glyph)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &glyph)| (i, j, glyph)))
    }

    /// Column of the first block in the bottom row
    pub fn spawn_column(&self) -> Option<usize> {
        self.rows.last()?.iter().position(|&glyph| glyph == BLOCK_GLYPH)
    }

    /// The rows as strings
    pub fn to_rows(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::default_stage()
    }
}

/// Turns a [`Stage`] into bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageLoader {
    /// Side of one grid cell in world units
    pub block_size: f32,

    /// Bridge height as a fraction of `block_size`
    pub bridge_thickness: f32,

    /// Player width and height as fractions of `block_size`
    pub player_scale: (f32, f32),
}

impl Default for StageLoader {
    fn default() -> Self {
        Self {
            block_size: 30.0,
            bridge_thickness: 0.1,
            player_scale: (0.3, 0.7),
        }
    }
}

impl StageLoader {
    /// Creates a loader with a custom cell size
    pub fn with_block_size(block_size: f32) -> Self {
        Self {
            block_size,
            ..Self::default()
        }
    }

    /// Terrain bodies for every block and bridge glyph, in row-major order
    pub fn terrain(&self, stage: &Stage) -> Result<Vec<Body>> {
        let bs = self.block_size;
        stage
            .cells()
            .filter_map(|(i, j, glyph)| {
                let position = Vector2::new(j as f32 * bs, i as f32 * bs);
                match glyph {
                    BLOCK_GLYPH => Some(Body::new_fixed(tags::BLOCK, position, Vector2::new(bs, bs))),
                    BRIDGE_GLYPH => Some(Body::new_bridge(
                        position,
                        Vector2::new(bs, bs * self.bridge_thickness),
                    )),
                    _ => None,
                }
            })
            .collect()
    }

    /// The player body at its starting position
    pub fn player(&self, stage: &Stage) -> Result<Body> {
        let bs = self.block_size;
        let column = stage.spawn_column().ok_or_else(|| {
            PhysicsError::InvalidStage("bottom row has no block to start on".to_string())
        })?;
        let row = stage.height().saturating_sub(3);

        let position = Vector2::new(column as f32 * bs + bs / 2.0, row as f32 * bs + bs / 2.0);
        let size = Vector2::new(bs * self.player_scale.0, bs * self.player_scale.1);
        Body::new_movable(tags::PLAYER, position, size)
    }

    /// Adds the stage's terrain and player to `world`; returns the player handle
    pub fn populate(&self, stage: &Stage, world: &mut World) -> Result<BodyHandle> {
        let player = world.add_body(self.player(stage)?);
        world.set_player(player)?;

        let terrain = self.terrain(stage)?;
        let count = terrain.len();
        for body in terrain {
            world.add_body(body);
        }

        debug!(
            rows = stage.height(),
            columns = stage.width(),
            terrain = count,
            "stage loaded"
        );
        Ok(player)
    }

    /// Builds a fresh world from a stage
    pub fn load(&self, stage: &Stage, config: SimulationConfig) -> Result<World> {
        let mut world = World::with_config(config);
        self.populate(stage, &mut world)?;
        Ok(world)
    }
}
