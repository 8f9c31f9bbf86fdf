use psychosuite_instruments::get_instrument;
use psychosuite_instruments::session::{Session, SessionError, SessionState};

#[test]
fn answering_every_question_completes() {
    let mmse = get_instrument("mmse").unwrap();
    let mut session = Session::start(mmse.as_ref());
    assert_eq!(session.state(), SessionState::InProgress);
    assert_eq!(session.current_question(), 0);

    for _ in 0..5 {
        session.answer(mmse.as_ref(), 1).unwrap();
    }
    assert_eq!(session.state(), SessionState::Completed);
    assert_eq!(session.into_answers().unwrap(), vec![1, 1, 1, 1, 1]);
}

#[test]
fn invalid_option_is_rejected_without_advancing() {
    let mmse = get_instrument("mmse").unwrap();
    let mut session = Session::start(mmse.as_ref());
    // MMSE options score 0 or 1 only.
    let err = session.answer(mmse.as_ref(), 7).unwrap_err();
    assert!(matches!(
        err,
        SessionError::InvalidOption { question: 0, value: 7 }
    ));
    assert_eq!(session.current_question(), 0);
    assert!(session.answers().is_empty());
}

#[test]
fn back_undoes_one_answer_at_a_time() {
    let hads = get_instrument("hads").unwrap();
    let mut session = Session::start(hads.as_ref());
    session.answer(hads.as_ref(), 3).unwrap();
    session.answer(hads.as_ref(), 1).unwrap();
    session.answer(hads.as_ref(), 2).unwrap();
    assert_eq!(session.current_question(), 3);

    // Back exactly current_question times returns to the start.
    for _ in 0..3 {
        session.back().unwrap();
    }
    assert_eq!(session.state(), SessionState::InProgress);
    assert_eq!(session.current_question(), 0);
    assert!(session.answers().is_empty());

    // One more back from question 0 cancels.
    session.back().unwrap();
    assert_eq!(session.state(), SessionState::Cancelled);
}

#[test]
fn undone_answers_can_be_changed() {
    let hads = get_instrument("hads").unwrap();
    let mut session = Session::start(hads.as_ref());
    session.answer(hads.as_ref(), 3).unwrap();
    session.back().unwrap();
    session.answer(hads.as_ref(), 0).unwrap();
    assert_eq!(session.answers(), &[0]);
}

#[test]
fn completed_session_rejects_further_transitions() {
    let mmse = get_instrument("mmse").unwrap();
    let mut session = Session::start(mmse.as_ref());
    for _ in 0..5 {
        session.answer(mmse.as_ref(), 0).unwrap();
    }
    assert!(matches!(
        session.answer(mmse.as_ref(), 0),
        Err(SessionError::Finished)
    ));
    assert!(matches!(session.back(), Err(SessionError::Finished)));
}

#[test]
fn cancelled_session_rejects_further_transitions() {
    let mmse = get_instrument("mmse").unwrap();
    let mut session = Session::start(mmse.as_ref());
    session.back().unwrap();
    assert!(matches!(
        session.answer(mmse.as_ref(), 1),
        Err(SessionError::Finished)
    ));
    assert!(session.into_answers().is_err());
}

#[test]
fn partial_session_cannot_yield_answers() {
    let mmse = get_instrument("mmse").unwrap();
    let mut session = Session::start(mmse.as_ref());
    session.answer(mmse.as_ref(), 1).unwrap();
    assert!(session.into_answers().is_err());
}
