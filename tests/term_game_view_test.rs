use blockfall::core::{Game, Phase};
use blockfall::term::{AnchorY, GameView, Viewport};
use blockfall::types::{PieceKind, Rgb};

fn screen_text(fb: &blockfall::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Game::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_two_chars_wide_in_its_color() {
    let mut snap = Game::new(1).snapshot();
    let color = Rgb::new(10, 200, 30);
    snap.board[19][0] = Some(color);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    for x in [1, 2] {
        let cell = fb.get(x, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color);
    }
    assert_ne!(fb.get(3, 20).unwrap().ch, '█');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = Game::new(1);
    game.new_game();
    let mut snap = game.snapshot();
    snap.score = 1230;
    snap.level = 2;
    snap.lines = 123;
    snap.next = PieceKind::T;

    let narrow = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(!narrow.contains("SCORE"));

    let all = screen_text(&GameView::default().render(&snap, Viewport::new(60, 22)));
    for word in ["SCORE", "1230", "LEVEL", "LINES", "123", "NEXT"] {
        assert!(all.contains(word), "missing {}", word);
    }
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = Game::new(1).snapshot();
    snap.phase = Phase::GameOver;

    let all = screen_text(&GameView::default().render(&snap, Viewport::new(40, 22)));
    assert!(all.contains("GAME OVER"));

    snap.phase = Phase::Running;
    let all = screen_text(&GameView::default().render(&snap, Viewport::new(40, 22)));
    assert!(!all.contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = Game::new(1).snapshot();

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
