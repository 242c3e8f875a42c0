use crate::config::Config;
use crate::ui::grid::{GridIntent, GridMutator, GridReducer, GridState};
use crate::ui::grid_view::GridView;
use crate::ui::layout::body_rect;
use crate::ui::mvi::Store;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use parking_lot::{Mutex, MutexGuard};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use ratatui::layout::Rect;
use std::sync::Arc;

pub type GridStore = Store<GridMutator<Pcg32>, GridReducer>;

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    TapFocused,
    Focus(isize),
    Scroll(i32),
    /// Scroll by whole viewports.
    Page(i32),
    Top,
    Bottom,
}

/// One row of the grid's keyboard map.
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    keys: &'static [KeyCode],
    pub hint: &'static str,
    pub label: &'static str,
    action: KeyAction,
}

/// Keys handled by [`App::on_key`]. The footer is rendered from this table.
pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        keys: &[KeyCode::Enter, KeyCode::Char(' ')],
        hint: "Enter",
        label: "Insert",
        action: KeyAction::TapFocused,
    },
    KeyBinding {
        keys: &[KeyCode::Left, KeyCode::BackTab],
        hint: "←",
        label: "Focus",
        action: KeyAction::Focus(-1),
    },
    KeyBinding {
        keys: &[KeyCode::Right, KeyCode::Tab],
        hint: "→",
        label: "Focus",
        action: KeyAction::Focus(1),
    },
    KeyBinding {
        keys: &[KeyCode::Up],
        hint: "↑",
        label: "Scroll",
        action: KeyAction::Scroll(-1),
    },
    KeyBinding {
        keys: &[KeyCode::Down],
        hint: "↓",
        label: "Scroll",
        action: KeyAction::Scroll(1),
    },
    KeyBinding {
        keys: &[KeyCode::PageUp],
        hint: "PgUp",
        label: "Page",
        action: KeyAction::Page(-1),
    },
    KeyBinding {
        keys: &[KeyCode::PageDown],
        hint: "PgDn",
        label: "Page",
        action: KeyAction::Page(1),
    },
    KeyBinding {
        keys: &[KeyCode::Home],
        hint: "Home",
        label: "Jump",
        action: KeyAction::Top,
    },
    KeyBinding {
        keys: &[KeyCode::End],
        hint: "End",
        label: "Jump",
        action: KeyAction::Bottom,
    },
];

pub struct App {
    should_quit: bool,
    /// Set once the screen has fired its one-time `Load`.
    activated: bool,
    seed: u64,
    /// Intent → mutation → state loop (MVI pattern).
    store: GridStore,
    /// Renderer fed by the store subscription.
    grid: Arc<Mutex<GridView>>,
}

impl App {
    pub fn new(config: &Config, seed: u64) -> Self {
        let grid = Arc::new(Mutex::new(GridView::new(
            &config.layout,
            config.ui.highlight_ticks,
        )));
        let mut store = GridStore::new(GridMutator::new(Pcg32::seed_from_u64(seed)));

        let view = Arc::clone(&grid);
        store.subscribe(move |state: &GridState| {
            if let Err(err) = view.lock().apply(state.section()) {
                tracing::error!(%err, "failed to apply grid snapshot");
            }
        });

        Self {
            should_quit: false,
            activated: false,
            seed,
            store,
            grid,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GridState {
        self.store.state()
    }

    pub fn item_count(&self) -> usize {
        self.store.state().items.len()
    }

    /// Lock the renderer. Do not hold the guard across a dispatch.
    pub fn grid(&self) -> MutexGuard<'_, GridView> {
        self.grid.lock()
    }

    /// Screen became active. Fires `Load` the first time only.
    pub fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;
        self.store.dispatch(GridIntent::Load);
    }

    /// Chip at `index` was tapped.
    pub fn tap(&mut self, index: usize) {
        self.store.dispatch(GridIntent::ToggleAt { index });
    }

    /// Tap the keyboard-focused chip, if any.
    pub fn tap_focused(&mut self) {
        let focused = self.grid.lock().focus();
        if let Some(index) = focused {
            self.tap(index);
        }
    }

    pub fn on_tick(&mut self) {
        self.grid.lock().on_tick();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let body = body_rect(Rect::new(0, 0, cols, rows));
        self.grid.lock().set_viewport(body);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let Some(binding) = KEY_BINDINGS
            .iter()
            .find(|binding| binding.keys.contains(&key.code))
        else {
            return;
        };
        match binding.action {
            KeyAction::TapFocused => self.tap_focused(),
            KeyAction::Focus(delta) => self.grid.lock().move_focus(delta),
            KeyAction::Scroll(delta) => self.grid.lock().scroll_by(delta),
            KeyAction::Page(direction) => {
                let mut grid = self.grid.lock();
                let page = i32::from(grid.viewport().height.max(1));
                grid.scroll_by(direction * page);
            }
            KeyAction::Top => self.grid.lock().scroll_to_top(),
            KeyAction::Bottom => self.grid.lock().scroll_to_bottom(),
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self.grid.lock().index_at(mouse.column, mouse.row);
                if let Some(index) = hit {
                    tracing::debug!(index, "chip clicked");
                    self.tap(index);
                }
            }
            MouseEventKind::ScrollUp => self.grid.lock().scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown => self.grid.lock().scroll_by(WHEEL_STEP),
            _ => {}
        }
    }
}
