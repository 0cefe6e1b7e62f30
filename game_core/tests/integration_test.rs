use game_core::*;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

/// Fires a fixed number of ticks synchronously
struct FixedTicks(usize);

impl TickSource for FixedTicks {
    fn start(self, mut on_tick: Box<dyn FnMut()>) {
        for _ in 0..self.0 {
            on_tick();
        }
    }
}

/// Counts draw calls, shared with the test through an Rc
#[derive(Clone, Default)]
struct CountingSurface {
    clears: Rc<RefCell<usize>>,
    circles: Rc<RefCell<Vec<Vec2>>>,
}

impl Surface for CountingSurface {
    fn size(&self) -> (f32, f32) {
        (800.0, 600.0)
    }

    fn clear(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
        *self.clears.borrow_mut() += 1;
    }

    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: &str) {}

    fn fill_circle(&mut self, center: Vec2, _radius: f32, _color: &str) {
        self.circles.borrow_mut().push(center);
    }

    fn draw_dashed_line(&mut self, _from: Vec2, _to: Vec2, _dash: &[f32], _color: &str) {}
}

fn new_game() -> Game {
    Game::new(Config::new(), GameRng::new(12345))
}

#[test]
fn test_first_frame_from_center() {
    let mut game = new_game();
    let config = game.config.clone();
    game.state.ball.pos = config.ball_spawn();
    game.state.ball.vel = Vec2::new(5.0, 0.0);
    let paddle_y = game.state.right.y;

    game.step();

    assert_eq!(game.state.ball.pos.x, config.ball_spawn().x + 5.0);
    assert_eq!(game.state.ball.pos.y, config.ball_spawn().y);
    assert_eq!(game.state.right.y, paddle_y, "Ball is inside the dead zone");
}

#[test]
fn test_ball_reflects_off_human_paddle() {
    let mut game = new_game();
    game.state.left.y = 260.0;
    game.state.ball.pos = Vec2::new(25.0, 300.0);
    game.state.ball.vel = Vec2::new(-5.0, 0.0);

    game.step();

    assert_eq!(game.state.ball.pos.x, 20.0);
    assert!(game.state.ball.vel.x > 0.0);
    assert!(game.events.ball_hit_paddle);
}

#[test]
fn test_english_added_on_paddle_hit() {
    let mut game = new_game();
    game.state.left.y = 260.0; // center 300
    // After integration the ball center sits at 280, 20 above the paddle center
    game.state.ball.pos = Vec2::new(25.0, 273.0);
    game.state.ball.vel = Vec2::new(-5.0, 0.0);

    game.step();

    assert!((game.state.ball.vel.y - -2.0).abs() < 1e-5);
}

#[test]
fn test_wall_bounce_flips_vertical_velocity() {
    let mut game = new_game();
    game.state.ball.pos = Vec2::new(400.0, 2.0);
    game.state.ball.vel = Vec2::new(5.0, -4.0);

    game.step();

    assert_eq!(game.state.ball.pos.y, 0.0);
    assert_eq!(game.state.ball.vel.y, 4.0);
}

#[test]
fn test_missed_ball_scores_and_reserves() {
    let mut game = new_game();
    let config = game.config.clone();
    game.state.left.y = 0.0;
    game.state.ball.pos = Vec2::new(-10.0, 500.0);
    game.state.ball.vel = Vec2::new(-5.0, 0.0);

    game.step();

    assert_eq!(game.score.right, 1);
    assert!(game.events.right_scored);
    assert_eq!(game.state.ball.pos, config.ball_spawn());
    assert_eq!(game.state.ball.vel.x.abs(), config.ball_speed);
    assert!(game.state.ball.vel.y.abs() <= config.ball_speed);
}

#[test]
fn test_paddles_stay_in_arena() {
    let mut game = new_game();
    let config = game.config.clone();
    let max_y = config.arena_height - config.paddle_height;
    let mut pointer = rand::rngs::StdRng::seed_from_u64(9);

    for _ in 0..5000 {
        if pointer.gen_bool(0.3) {
            let client_y = pointer.gen_range(-500.0..1500.0);
            game.pointer_moved(client_y, 20.0);
        }
        game.step();

        for paddle in [&game.state.left, &game.state.right] {
            assert!(
                (0.0..=max_y).contains(&paddle.y),
                "{:?} paddle out of bounds at {}",
                paddle.side,
                paddle.y
            );
        }
    }
}

#[test]
fn test_opponent_moves_at_most_ai_speed() {
    let mut game = new_game();
    let ai_speed = game.config.ai_speed;

    for _ in 0..2000 {
        let before = game.state.right.y;
        game.step();
        let moved = (game.state.right.y - before).abs();
        assert!(moved <= ai_speed, "Opponent moved {} in one frame", moved);
    }
}

#[test]
fn test_same_seed_same_rally() {
    let mut a = new_game();
    let mut b = new_game();

    for _ in 0..3000 {
        a.step();
        b.step();
    }

    assert_eq!(a.state.ball.pos, b.state.ball.pos);
    assert_eq!(a.state.ball.vel, b.state.ball.vel);
    assert_eq!(a.score, b.score);
}

#[test]
fn test_frame_loop_steps_and_draws_each_tick() {
    let game = Rc::new(RefCell::new(new_game()));
    let start = game.borrow().state.ball.pos;
    let vel = game.borrow().state.ball.vel;
    let surface = CountingSurface::default();

    run(FixedTicks(3), game.clone(), surface.clone());

    assert_eq!(*surface.clears.borrow(), 3, "One draw per tick");
    assert_eq!(surface.circles.borrow().len(), 3);

    // Ball starts at center and cannot reach a wall or paddle in 3 frames
    let ball = game.borrow().state.ball;
    assert!((ball.pos - (start + vel * 3.0)).length() < 1e-3);
}

#[test]
fn test_frame_loop_sees_input_between_ticks() {
    let game = Rc::new(RefCell::new(new_game()));

    run(FixedTicks(1), game.clone(), CountingSurface::default());
    game.borrow_mut().pointer_moved(60.0, 0.0);
    run(FixedTicks(1), game.clone(), CountingSurface::default());

    assert_eq!(game.borrow().state.left.y, 20.0);
}

#[test]
fn test_config_from_surface_size() {
    let surface = CountingSurface::default();
    let (width, height) = surface.size();
    let game = Game::new(Config::with_arena(width, height), GameRng::new(1));

    assert_eq!(game.state.left.y, height / 2.0 - game.config.paddle_height / 2.0);
    assert_eq!(game.state.right.y, game.state.left.y);
}
