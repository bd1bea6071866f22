use photon_blocks::core::GameEngine;
use photon_blocks::term::{encode_diff_into, GameView, Viewport};
use photon_blocks::types::{GameOverReason, PieceKind};

#[test]
fn term_view_renders_rounded_border() {
    let snap = GameEngine::with_seed(1).snapshot();
    let view = GameView::default();

    // Board box is 10*2+2 wide and 20+2 tall; the info panel follows it.
    let fb = view.render(&snap, Viewport::new(38, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');
    assert_eq!(fb.get(21, 0).unwrap().ch, '╮');
    assert_eq!(fb.get(0, 21).unwrap().ch, '╰');
    assert_eq!(fb.get(21, 21).unwrap().ch, '╯');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameEngine::with_seed(1).snapshot();
    snap.board[19][0] = Some(PieceKind::I);
    snap.active = None;
    snap.ghost_y = None;

    let fb = GameView::default().render(&snap, Viewport::new(38, 22));

    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_flashes_clearing_rows() {
    let mut snap = GameEngine::with_seed(1).snapshot();
    snap.board[19] = [Some(PieceKind::Z); 10];
    snap.clearing[19] = true;
    snap.clear_progress = 0.5;

    let fb = GameView::default().render(&snap, Viewport::new(38, 22));
    assert_eq!(fb.get(1, 20).unwrap().ch, '▓');
}

#[test]
fn term_view_draws_info_panel() {
    let mut snap = GameEngine::with_seed(1).snapshot();
    snap.score = 1234;
    snap.lines = 10;
    snap.level = 2;

    let fb = GameView::default().render(&snap, Viewport::new(80, 30));
    for label in ["TIME", "SCORE", "LINES", "LEVEL", "NEXT", "CONTROLS"] {
        assert!(fb.contains_text(label), "missing {}", label);
    }
    assert!(fb.contains_text("1234"));
    assert!(fb.contains_text("00:00"));
}

#[test]
fn term_view_drops_controls_when_narrow() {
    let snap = GameEngine::with_seed(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(40, 24));
    assert!(!fb.contains_text("CONTROLS"));
    assert!(fb.contains_text("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = GameEngine::with_seed(1).snapshot();
    snap.game_over = Some(GameOverReason::BlockOut);
    snap.active = None;

    let fb = GameView::default().render(&snap, Viewport::new(80, 30));
    assert!(fb.contains_text("GAME OVER"));
    assert!(fb.contains_text("R restart"));
}

#[test]
fn term_diff_after_one_move_is_small() {
    let mut engine = GameEngine::with_seed(1);
    let view = GameView::default();
    let vp = Viewport::new(80, 30);

    let before = view.render(&engine.snapshot(), vp);
    let snap = engine.update(
        std::time::Duration::from_millis(16),
        photon_blocks::types::Intents::from(photon_blocks::types::Intent::MoveLeft),
    );
    let after = view.render(&snap, vp);

    let mut out = Vec::new();
    encode_diff_into(&before, &after, &mut out).unwrap();
    assert!(!out.is_empty());
    assert!(out.len() < 2000);
}
