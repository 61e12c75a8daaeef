use grid_snake::game::{
    Direction, GameConfig, GameEngine, GameOverReason, GameSession, Phase, Snapshot,
};

fn toward_apple(session: &GameSession) -> Direction {
    let head = session.snake.head();
    let apple = session.apple.position();

    let preferred = if apple.x > head.x {
        Direction::Right
    } else if apple.x < head.x {
        Direction::Left
    } else if apple.y > head.y {
        Direction::Down
    } else {
        Direction::Up
    };

    if preferred.is_opposite(session.direction) {
        match preferred {
            Direction::Left | Direction::Right => Direction::Down,
            _ => Direction::Right,
        }
    } else {
        preferred
    }
}

#[test]
fn test_chasing_apples_keeps_invariants() {
    for seed in 0..20 {
        let mut engine = GameEngine::with_seed(GameConfig::default(), seed);
        let initial_highscore = 3;
        let mut session = engine.new_session(initial_highscore).unwrap();
        let mut last_score = session.score();

        for _ in 0..500 {
            session.queue_direction(toward_apple(&session));
            let result = engine.step(&mut session);

            if session.is_game_over() {
                assert!(result.game_over.is_some());
                break;
            }

            // Growth from an apple shows up on the following move
            if result.ate_apple {
                assert_eq!(session.snake.len() + 1, session.snake.length());
                assert_eq!(session.score(), last_score + 1);
            } else {
                assert_eq!(session.snake.len(), session.snake.length());
            }
            assert!(!session.snake.cells().any(|c| *c == session.apple.position()));
            assert!(session.score() >= last_score);
            assert_eq!(session.highscore, initial_highscore.max(session.score()));
            last_score = session.score();
        }

        assert!(last_score > 1, "seed {} never ate an apple", seed);
    }
}

#[test]
fn test_running_into_wall_ends_game() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 11);
    let mut session = engine.new_session(0).unwrap();
    let start_y = session.snake.head().y;

    let mut ticks = 0;
    while session.is_playing() {
        session.queue_direction(Direction::Up);
        let result = engine.step(&mut session);
        ticks += 1;
        // The apple can sit in the way and lengthen the snake; that's fine
        if result.game_over.is_some() {
            break;
        }
    }

    assert_eq!(ticks, start_y + 1);
    assert_eq!(session.phase, Phase::GameOver(GameOverReason::Wall));

    let snapshot = Snapshot::capture(&session, engine.config().tick_rate_hz);
    assert_eq!(snapshot.head().map(|c| c.y), Some(-1));
}

#[test]
fn test_restart_carries_highscore() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 3);
    let mut session = engine.new_session(0).unwrap();
    session.highscore = 12;
    session.end(GameOverReason::SelfCollision);

    let fresh = engine.new_session(session.highscore).unwrap();

    assert!(fresh.is_playing());
    assert_eq!(fresh.highscore, 12);
    assert_eq!(fresh.ticks, 0);
    assert_eq!(fresh.score(), 1);
}
