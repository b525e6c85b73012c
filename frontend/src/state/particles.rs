use rand::Rng;

use crate::config::{
    PARTICLE_DELAY_SECS, PARTICLE_DURATION_SECS, PARTICLE_POSITION, PARTICLE_SIZE,
};

/// One decorative bubble in the hero. Immutable once drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleDescriptor {
    pub id: usize,
    pub size: f64,
    /// Percentage of the container width, in `[0, 100)`.
    pub horizontal_position: f64,
    pub animation_duration: f64,
    pub animation_delay: f64,
}

impl ParticleDescriptor {
    fn draw<R: Rng + ?Sized>(rng: &mut R, id: usize) -> Self {
        Self {
            id,
            size: rng.gen_range(PARTICLE_SIZE.0..PARTICLE_SIZE.1),
            horizontal_position: rng.gen_range(PARTICLE_POSITION.0..PARTICLE_POSITION.1),
            animation_duration: rng.gen_range(PARTICLE_DURATION_SECS.0..PARTICLE_DURATION_SECS.1),
            animation_delay: rng.gen_range(PARTICLE_DELAY_SECS.0..PARTICLE_DELAY_SECS.1),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {left:.2}%; --duration: {duration:.2}s; animation-delay: {delay:.2}s;",
            size = self.size,
            left = self.horizontal_position,
            duration = self.animation_duration,
            delay = self.animation_delay,
        )
    }
}

/// Draws `count` independent descriptors.
pub fn generate_field<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ParticleDescriptor> {
    (0..count).map(|id| ParticleDescriptor::draw(rng, id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PARTICLE_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_range(value: f64, (lo, hi): (f64, f64)) -> bool {
        value >= lo && value < hi
    }

    #[test]
    fn every_field_stays_in_its_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2 {
            let field = generate_field(&mut rng, PARTICLE_COUNT);
            assert_eq!(field.len(), 20);
            for (index, particle) in field.iter().enumerate() {
                assert_eq!(particle.id, index);
                assert!(in_range(particle.size, PARTICLE_SIZE));
                assert!(in_range(particle.horizontal_position, (0.0, 100.0)));
                assert!(in_range(particle.animation_duration, PARTICLE_DURATION_SECS));
                assert!(in_range(particle.animation_delay, PARTICLE_DELAY_SECS));
            }
        }
    }

    #[test]
    fn two_mounts_differ() {
        let mut rng = rand::thread_rng();
        let first = generate_field(&mut rng, PARTICLE_COUNT);
        let second = generate_field(&mut rng, PARTICLE_COUNT);
        assert_ne!(first, second);
    }

    #[test]
    fn empty_field() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_field(&mut rng, 0).is_empty());
    }

    #[test]
    fn style_carries_all_fields() {
        let particle = ParticleDescriptor {
            id: 3,
            size: 12.5,
            horizontal_position: 40.0,
            animation_duration: 6.25,
            animation_delay: 1.0,
        };
        assert_eq!(
            particle.style(),
            "width: 12.50px; height: 12.50px; left: 40.00%; --duration: 6.25s; animation-delay: 1.00s;"
        );
    }
}
