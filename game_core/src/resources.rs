use rand::{Rng, SeedableRng};

/// Points scored per side
///
/// Bookkeeping only; the simulation never reads it back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left (human) player score
    pub right: u32, // Right (opponent) score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Random number generator used for ball serves
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the host's entropy source
    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }

    pub fn coin_flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    /// Uniform value in `[-1, 1)`
    pub fn unit_range(&mut self) -> f32 {
        self.0.gen::<f32>() * 2.0 - 1.0
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}
