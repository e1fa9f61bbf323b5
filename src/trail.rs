use egui::Pos2;

/// How long a trail dot lives, in seconds.
pub const TRAIL_LIFETIME: f32 = 0.6;

struct TrailDot {
    pos: Pos2,
    spawned: f32,
}

/// Decorative cursor trail: fire-and-forget dots recorded on pointer moves
/// and pruned by age. Never touches drawing state.
#[derive(Default)]
pub struct CursorTrail {
    dots: Vec<TrailDot>,
}

impl CursorTrail {
    pub fn push(&mut self, pos: Pos2, now: f32) {
        self.dots.push(TrailDot { pos, spawned: now });
    }

    /// Drop every dot older than [`TRAIL_LIFETIME`].
    pub fn prune(&mut self, now: f32) {
        self.dots.retain(|dot| now - dot.spawned < TRAIL_LIFETIME);
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Each live dot with its age fraction in `0..=1`, for fade-out
    /// rendering.
    pub fn dots(&self, now: f32) -> impl Iterator<Item = (Pos2, f32)> + '_ {
        self.dots.iter().map(move |dot| {
            let age = ((now - dot.spawned) / TRAIL_LIFETIME).clamp(0.0, 1.0);
            (dot.pos, age)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn dots_are_pruned_after_their_lifetime() {
        let mut trail = CursorTrail::default();
        trail.push(pos2(1.0, 1.0), 0.0);
        trail.push(pos2(2.0, 2.0), 0.5);

        trail.prune(0.65);
        assert_eq!(trail.len(), 1);

        trail.prune(1.2);
        assert!(trail.is_empty());
    }

    #[test]
    fn age_fraction_grows_toward_one() {
        let mut trail = CursorTrail::default();
        trail.push(pos2(0.0, 0.0), 0.0);

        let ages: Vec<f32> = trail.dots(0.3).map(|(_, age)| age).collect();
        assert_eq!(ages.len(), 1);
        assert!((ages[0] - 0.5).abs() < 1e-5);
    }
}
