//! Behavioural tests for the opportunity grid scorer.

use std::cell::RefCell;

use geo::Coord;
use oppmap_core::{GridCell, GridConfig, Pin, score_grid};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn pins() -> RefCell<Vec<Pin>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn cells() -> RefCell<Vec<GridCell>> {
    RefCell::new(Vec::new())
}

#[given("no competitor pins")]
fn given_no_pins(#[from(pins)] pins: &RefCell<Vec<Pin>>) {
    pins.borrow_mut().clear();
}

#[given("a competitor pin at the map center")]
fn given_center_pin(#[from(pins)] pins: &RefCell<Vec<Pin>>) {
    let pin = Pin::new(Coord { x: 0.0, y: 0.0 }, "competitor").expect("valid pin");
    pins.borrow_mut().push(pin);
}

#[given("a crowded block of competitor pins")]
fn given_crowd(#[from(pins)] pins: &RefCell<Vec<Pin>>) {
    let mut pins = pins.borrow_mut();
    for i in 0..6 {
        let x = f64::from(i) * 0.004;
        let pin = Pin::new(Coord { x, y: 0.0 }, "competitor").expect("valid pin");
        pins.push(pin);
    }
}

#[when("I score the grid")]
fn when_score(
    #[from(pins)] pins: &RefCell<Vec<Pin>>,
    #[from(cells)] cells: &RefCell<Vec<GridCell>>,
) {
    let scored = score_grid(
        &pins.borrow(),
        Coord { x: 0.0, y: 0.0 },
        &GridConfig::default(),
    );
    *cells.borrow_mut() = scored;
}

#[then("every cell scores 100")]
fn then_fully_open(#[from(cells)] cells: &RefCell<Vec<GridCell>>) {
    let cells = cells.borrow();
    assert!(!cells.is_empty());
    assert!(cells.iter().all(|c| c.score == 100.0));
    assert!(cells.iter().all(|c| !c.in_competitor_zone));
}

#[then("the cell nearest the pin scores 0 inside a competitor zone")]
fn then_center_claimed(#[from(cells)] cells: &RefCell<Vec<GridCell>>) {
    let cells = cells.borrow();
    let nearest = cells
        .iter()
        .min_by(|a, b| {
            a.nearest_competitor_miles
                .total_cmp(&b.nearest_competitor_miles)
        })
        .expect("grid is non-empty");
    assert_eq!(nearest.score, 0.0);
    assert!(nearest.in_competitor_zone);
}

#[then("every score lies between 0 and 100")]
fn then_scores_in_range(#[from(cells)] cells: &RefCell<Vec<GridCell>>) {
    let cells = cells.borrow();
    assert!(cells.iter().all(|c| (0.0..=100.0).contains(&c.score)));
}

#[scenario(path = "tests/features/opportunity_grid.feature", index = 0)]
fn empty_market(pins: RefCell<Vec<Pin>>, cells: RefCell<Vec<GridCell>>) {
    let _ = (pins, cells);
}

#[scenario(path = "tests/features/opportunity_grid.feature", index = 1)]
fn competitor_at_center(pins: RefCell<Vec<Pin>>, cells: RefCell<Vec<GridCell>>) {
    let _ = (pins, cells);
}

#[scenario(path = "tests/features/opportunity_grid.feature", index = 2)]
fn crowded_block(pins: RefCell<Vec<Pin>>, cells: RefCell<Vec<GridCell>>) {
    let _ = (pins, cells);
}
