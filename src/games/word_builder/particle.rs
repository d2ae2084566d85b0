use rand::Rng;
use ratatui::style::Color;

use crate::config::ParticleConfig;

/// Spark color of the hit burst.
pub const BURST_COLOR: Color = Color::Rgb(0, 255, 70);

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub remaining_life: u32,
    pub color: Color,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(x: f32, y: f32, color: Color, cfg: &ParticleConfig, rng: &mut R) -> Self {
        let speed = cfg.max_speed;
        Self {
            x,
            y,
            vx: rng.random_range(-speed..=speed),
            vy: rng.random_range(-speed..=speed),
            remaining_life: rng.random_range(cfg.min_life..=cfg.max_life),
            color,
        }
    }

    /// `cfg.burst` particles scattering from (x, y).
    pub fn burst<'a, R: Rng + ?Sized>(
        x: f32,
        y: f32,
        color: Color,
        cfg: &'a ParticleConfig,
        rng: &'a mut R,
    ) -> impl Iterator<Item = Particle> + 'a {
        (0..cfg.burst).map(move |_| Particle::new(x, y, color, cfg, &mut *rng))
    }

    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.remaining_life = self.remaining_life.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.remaining_life > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn burst_spawns_configured_count_at_origin() {
        let cfg = ParticleConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let particles: Vec<_> = Particle::burst(4.0, 9.0, BURST_COLOR, &cfg, &mut rng).collect();

        assert_eq!(particles.len(), 20);
        for p in &particles {
            assert_eq!((p.x, p.y), (4.0, 9.0));
            assert!((20..=40).contains(&p.remaining_life));
            assert!(p.vx.abs() <= cfg.max_speed && p.vy.abs() <= cfg.max_speed);
        }
    }

    #[test]
    fn advance_moves_and_ages() {
        let mut p = Particle {
            x: 1.0,
            y: 1.0,
            vx: 0.5,
            vy: -0.25,
            remaining_life: 2,
            color: BURST_COLOR,
        };
        p.advance();
        assert_eq!((p.x, p.y, p.remaining_life), (1.5, 0.75, 1));
        assert!(p.is_alive());

        p.advance();
        assert!(!p.is_alive());
        p.advance();
        assert_eq!(p.remaining_life, 0);
    }
}
