use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rwg_pong::config::Config;
use rwg_pong::game::{Ball, GameEvent, Match, Side, Vec2i, Winner};
use rwg_pong::input::FrameInput;

/// A left player that simply follows the ball.
fn chase_input(game: &Match) -> FrameInput {
    let ball = game.ball.center().y;
    let paddle = game.left.center().y;
    let step = game.config().paddle_speed;
    FrameInput {
        left_up: ball < paddle - step,
        left_down: ball > paddle + step,
        ..FrameInput::default()
    }
}

fn assert_ball_parked(game: &Match) {
    if !game.ball.in_play {
        assert_eq!(game.ball.pos, Ball::home_position(game.config()));
        assert_eq!((game.ball.speed_x, game.ball.speed_y), (0, 0));
    }
}

#[test]
fn classic_rally_against_ai_speeds_up() {
    let mut rng = StdRng::seed_from_u64(2015);
    let mut game = Match::new(Config::new());
    assert!(game.start_match(false, false));
    assert!(game.serve(&mut rng));
    let cap = game.config().ball_speed_cap_x;

    let mut ai_hits = 0;
    let mut hit_last_tick = false;
    for _ in 0..20_000 {
        if !game.ball.in_play {
            assert!(game.serve(&mut rng));
            hit_last_tick = false;
        }
        let speed_x = game.ball.speed_x;
        let speed_y = game.ball.speed_y;

        let events = game.step(&chase_input(&game), &mut rng);
        assert_ball_parked(&game);

        let scored = events.iter().any(|e| matches!(e, GameEvent::Scored { .. }));
        if scored {
            continue;
        }

        if hit_last_tick && speed_x < cap {
            assert_eq!(game.ball.speed_x, speed_x + 1);
        } else {
            assert_eq!(game.ball.speed_x, speed_x);
        }
        assert!(game.ball.speed_x <= cap);

        let touched = events
            .iter()
            .any(|e| matches!(e, GameEvent::WallBounce(_) | GameEvent::PaddleHit(_)));
        if game.ball.speed_y != speed_y {
            assert!(touched, "vertical speed changed in free flight");
        }

        hit_last_tick = events.iter().any(|e| matches!(e, GameEvent::PaddleHit(_)));
        if events.contains(&GameEvent::PaddleHit(Side::Right)) {
            ai_hits += 1;
            if ai_hits == 3 {
                break;
            }
        }
    }
    assert_eq!(ai_hits, 3);
}

#[test]
fn eleven_nil_ends_match_and_freezes_play() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut game = Match::new(Config::new());
    game.start_match(false, false);

    let mut winner = None;
    for point in 1..=11 {
        assert!(game.serve(&mut rng));
        game.ball.dir_x = 1;
        game.ball.speed_x = 2;
        game.ball.pos = Vec2i::new(game.config().screen_width - 1, 10);
        let events = game.step(&FrameInput::default(), &mut rng);
        assert!(events.contains(&GameEvent::Scored { scorer: Side::Left, left: point, right: 0 }));
        for event in events {
            if let GameEvent::MatchOver(w) = event {
                winner = Some(w);
            }
        }
        assert_ball_parked(&game);
    }

    assert_eq!(winner, Some(Winner::Player1));
    assert!(!game.is_on());
    assert_eq!(game.title(), "11-0");
    assert_eq!(game.scores.digits(Side::Left), (1, 1));

    let left = game.left.pos;
    let right = game.right.pos;
    let input = FrameInput {
        left_up: true,
        right_down: true,
        ..FrameInput::default()
    };
    for _ in 0..30 {
        assert!(game.step(&input, &mut rng).is_empty());
    }
    assert!(!game.serve(&mut rng));
    assert_eq!(game.left.pos, left);
    assert_eq!(game.right.pos, right);
    assert_ball_parked(&game);

    assert!(game.start_match(true, false));
    assert_eq!(game.title(), "0-0");
}

#[test]
fn serve_after_right_point_always_heads_left() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Match::new(Config::new());
        game.start_match(true, false);
        game.serve(&mut rng);
        game.ball.dir_x = -1;
        game.ball.pos = Vec2i::new(-8, 300);
        game.step(&FrameInput::default(), &mut rng);
        assert_eq!(game.scores.last_scorer(), Some(Side::Right));

        assert!(game.serve(&mut rng));
        assert_eq!(game.ball.dir_x, -1);
    }
}

#[test]
fn first_serve_of_a_match_is_random() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut game = Match::new(Config::new());
    let mut seen = [false; 2];
    for _ in 0..64 {
        game.start_match(false, false);
        game.serve(&mut rng);
        seen[(game.ball.dir_x > 0) as usize] = true;
        game.abort_match();
    }
    assert!(seen[0] && seen[1]);
}

#[test]
fn random_play_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut keys = StdRng::seed_from_u64(78);
    let mut game = Match::new(Config::new());
    let max_y = game.config().paddle_max_y();

    for round in 0..4 {
        game.start_match(round % 2 == 0, round >= 2);
        for _ in 0..3_000 {
            if !game.is_on() {
                break;
            }
            if !game.ball.in_play {
                game.serve(&mut rng);
            }
            let input = FrameInput {
                left_up: keys.gen_bool(0.5),
                left_down: keys.gen_bool(0.5),
                left_color_prev: keys.gen_bool(0.1),
                left_color_next: keys.gen_bool(0.1),
                right_up: keys.gen_bool(0.5),
                right_down: keys.gen_bool(0.5),
                right_color_prev: keys.gen_bool(0.1),
                right_color_next: keys.gen_bool(0.1),
                ..FrameInput::default()
            };
            game.step(&input, &mut rng);

            assert!((0..=max_y).contains(&game.left.pos.y));
            assert!((0..=max_y).contains(&game.right.pos.y));
            assert!(game.ball.speed_x <= game.config().ball_speed_cap_x);
            assert!(game.ball.speed_y.abs() <= game.config().ball_speed_cap_y);
            assert_ball_parked(&game);
        }
        game.abort_match();
    }
}
