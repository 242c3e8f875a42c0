//! Shared test utilities.

#![allow(dead_code)]

use chipgrid::config::Config;
use chipgrid::ui::app::{App, GridStore};
use chipgrid::ui::grid::{GridMutator, Item};
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Split a generated identity into its number and the length of its x-run.
pub fn parse_identity(item: &Item) -> (usize, usize) {
    let (number, run) = item
        .identity()
        .split_once(' ')
        .unwrap_or_else(|| panic!("identity without space: {:?}", item));
    assert!(
        run.chars().all(|ch| ch == 'x'),
        "run is not all x: {:?}",
        item
    );
    (number.parse().expect("numeric prefix"), run.len())
}

pub fn seeded_store(seed: u64) -> GridStore {
    GridStore::new(GridMutator::new(Pcg32::seed_from_u64(seed)))
}

/// App with an 80x24 screen, not yet activated.
pub fn app(seed: u64) -> App {
    let mut app = App::new(&Config::default(), seed);
    app.on_resize(80, 24);
    app
}
