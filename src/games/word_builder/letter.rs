use rand::Rng;

use crate::config::{DifficultyProfile, SpawnConfig};
use crate::core::game::{Point, Viewport};

/// Everything a letter needs to place itself: the screen, the speed range of
/// the current difficulty and the spawn bands.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub viewport: Viewport,
    pub profile: &'a DifficultyProfile,
    pub spawn: &'a SpawnConfig,
}

impl Field<'_> {
    fn random_column<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.random_range(0..self.viewport.width.max(1)) as f32
    }

    fn random_speed<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.profile.min_speed..=self.profile.max_speed)
    }
}

fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> char {
    rng.random_range(b'A'..=b'Z') as char
}

#[derive(Debug, Clone, PartialEq)]
pub struct FallingLetter {
    pub x: f32,
    pub y: f32,
    pub symbol: char,
    pub fall_speed: f32,
    pub active: bool,
}

impl FallingLetter {
    pub fn new(x: f32, y: f32, symbol: char, fall_speed: f32) -> Self {
        Self {
            x,
            y,
            symbol,
            fall_speed,
            active: true,
        }
    }

    /// Round-start letter, anywhere from `preseed_rows` above the top down to
    /// the bottom edge so the screen starts out populated.
    pub fn spawn<R: Rng + ?Sized>(field: &Field<'_>, rng: &mut R) -> Self {
        let top = -field.spawn.preseed_rows;
        let bottom = i32::from(field.viewport.height);
        Self::new(
            field.random_column(rng),
            rng.random_range(top..=bottom) as f32,
            random_symbol(rng),
            field.random_speed(rng),
        )
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, field: &Field<'_>, rng: &mut R) {
        if !self.active {
            return;
        }
        self.y += self.fall_speed;
        if self.y > f32::from(field.viewport.height) {
            self.recycle(field, rng);
        }
    }

    /// Puts the letter back above the top edge as a fresh random glyph.
    pub fn recycle<R: Rng + ?Sized>(&mut self, field: &Field<'_>, rng: &mut R) {
        self.y = rng.random_range(field.spawn.recycle_min_row..=field.spawn.recycle_max_row) as f32;
        self.x = field.random_column(rng);
        self.symbol = random_symbol(rng);
        self.fall_speed = field.random_speed(rng);
        self.active = true;
    }

    /// The glyph is drawn in the one cell containing (x, y).
    pub fn hit_test(&self, point: Point) -> bool {
        self.active && point.x.floor() == self.x.floor() && point.y.floor() == self.y.floor()
    }
}
