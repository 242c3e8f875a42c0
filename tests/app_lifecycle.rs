mod common;

use chipgrid::ui::cell::Highlight;
use chipgrid::ui::grid::BATCH_SIZE;
use chipgrid::ui::render::draw;
use common::{app, parse_identity};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn screen_text(app: &chipgrid::ui::app::App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn activation_populates_the_grid() {
    let mut app = app(1);
    app.activate();

    assert_eq!(app.item_count(), BATCH_SIZE);
    let grid = app.grid();
    assert_eq!(grid.len(), BATCH_SIZE);
    for (index, label) in grid.labels().enumerate() {
        assert_eq!(label, app.state().items[index].identity());
    }
}

#[test]
fn clicking_a_chip_inserts_after_it() {
    let mut app = app(2);
    app.activate();
    // Let the initial load's highlights expire.
    for _ in 0..4 {
        app.on_tick();
    }
    let before = app.state().items.clone();

    let rect = app.grid().screen_rect(4).expect("chip 4 is on screen");
    app.on_mouse(click(rect.x + 1, rect.y + 1));

    let items = &app.state().items;
    assert_eq!(items.len(), 2 * BATCH_SIZE);
    assert_eq!(&items[..5], &before[..5]);
    assert_eq!(parse_identity(&items[5]).0, BATCH_SIZE);
    assert_eq!(&items[5 + BATCH_SIZE..], &before[5..]);

    let grid = app.grid();
    assert_eq!(grid.highlight(5), Some(Highlight::Inserted));
    assert_eq!(grid.highlight(15), Some(Highlight::Inserted));
    assert_eq!(grid.highlight(4), None);
    assert_eq!(grid.highlight(16), None);
    assert_eq!(grid.labels().count(), 2 * BATCH_SIZE);
}

#[test]
fn clicking_empty_space_does_nothing() {
    let mut app = app(3);
    app.activate();
    app.on_mouse(click(0, 0));
    app.on_mouse(click(0, 23));
    assert_eq!(app.item_count(), BATCH_SIZE);
}

#[test]
fn keyboard_focus_taps_chip() {
    let mut app = app(4);
    app.activate();
    app.on_key(KeyEvent::from(KeyCode::Right));
    app.on_key(KeyEvent::from(KeyCode::Right));
    assert_eq!(app.grid().focus(), Some(1));

    let second = app.state().items[1].clone();
    let last = app.state().items[BATCH_SIZE - 1].clone();
    app.on_key(KeyEvent::from(KeyCode::Enter));

    let items = &app.state().items;
    assert_eq!(items.len(), 2 * BATCH_SIZE);
    assert_eq!(items[1], second);
    assert_eq!(parse_identity(&items[2]).0, BATCH_SIZE);
    assert_eq!(items[2 * BATCH_SIZE - 1], last);
}

#[test]
fn rendered_screen_shows_every_chip_label() {
    let mut app = app(5);
    app.activate();

    let text = screen_text(&app);
    assert!(text.contains("chipgrid"));
    assert!(text.contains(&format!("{} items", BATCH_SIZE)));
    for item in &app.state().items {
        assert!(text.contains(item.identity()), "missing {:?}", item);
    }
}

#[test]
fn pool_reuses_cells_across_snapshots() {
    let mut app = app(6);
    app.activate();
    app.tap(0);
    let stats = app.grid().pool_stats().unwrap();
    assert_eq!(stats.checked_out, 2 * BATCH_SIZE);
    assert_eq!(stats.created, 2 * BATCH_SIZE);
    assert_eq!(stats.idle, 0);
}
