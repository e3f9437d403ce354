use dusk_othello::{Game, GameError, Player};
use dusk_player::{SearchConfig, Session, SessionError};
use std::thread;
use std::time::Duration;

fn first_legal_cell(session: &Session) -> usize {
    session
        .legal_cell_mask()
        .iter()
        .position(|&legal| legal)
        .expect("active player has a legal move")
}

#[test]
fn ai_plays_itself_to_the_end() {
    let mut session = Session::new(SearchConfig::default().with_depth(2));
    let mut moves = 0;

    while !session.is_over() {
        if session.request_ai_move().is_some() {
            moves += 1;
        } else {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(moves <= 60);
    }

    assert!(!session.is_searching());
    assert_eq!(session.game().history().len(), moves);
    let discs = u32::from(session.black_score()) + u32::from(session.white_score());
    assert!(discs <= 64);
    assert_eq!(session.request_ai_move(), None);
}

#[test]
fn human_against_ai() {
    let mut session = Session::new(SearchConfig::default().with_depth(3));

    while !session.is_over() {
        if session.active_player() == Player::Black {
            let cell = first_legal_cell(&session);
            session.apply_move(cell).unwrap();
        } else if session.request_ai_move().is_none() {
            thread::yield_now();
        }
    }

    let score = session.game().final_score();
    match session.game().winner() {
        Some(Player::Black) => assert!(score > 0),
        Some(Player::White) => assert!(score < 0),
        None => assert_eq!(score, 0),
    }
}

#[test]
fn reset_right_after_starting_does_not_hang() {
    let mut session = Session::new(SearchConfig::default().with_depth(14));
    session.start_search().unwrap();
    session.reset();

    assert!(!session.is_searching());
    assert_eq!(session.game(), &Game::new());
}

#[test]
fn abort_then_play_on() {
    let mut session = Session::new(SearchConfig::default().with_depth(12));
    session.start_search().unwrap();
    thread::sleep(Duration::from_millis(20));
    session.abort_search();

    assert_eq!(session.poll_result(), None);
    assert_eq!(session.game(), &Game::new());

    let cell = first_legal_cell(&session);
    session.apply_move(cell).unwrap();
    assert_eq!(session.active_player(), Player::White);
}

#[test]
fn poll_does_not_apply_the_move() {
    let mut session = Session::new(SearchConfig::default().with_depth(1));
    session.start_search().unwrap();

    let result = loop {
        if let Some(result) = session.poll_result() {
            break result;
        }
        thread::yield_now();
    };
    assert_eq!(session.game(), &Game::new());
    assert_eq!(session.poll_result(), Some(result));

    assert_eq!(session.finish_search(), Some(result));
    assert_eq!(session.active_player(), Player::White);
    assert_eq!(session.last_evaluation(), Some(result.value));
}

#[test]
fn requests_are_rejected_while_searching() {
    let mut session = Session::new(SearchConfig::default().with_depth(12));
    session.start_search().unwrap();

    assert!(matches!(
        session.start_search(),
        Err(SessionError::SearchInProgress)
    ));
    assert!(matches!(
        session.apply_move(first_legal_cell(&session)),
        Err(SessionError::SearchInProgress)
    ));
    session.abort_search();

    assert!(matches!(
        session.apply_move(99),
        Err(SessionError::Game(GameError::IllegalMove))
    ));
}
