//! Behavioural coverage for ranking foods inside a single store.

use std::cell::RefCell;

use ratings_core::test_support::{assert_consistent, demo_store};
use ratings_core::{HighestRated, RankingStore};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Scenario state: the store under test.
#[derive(Debug, Default)]
struct RankingWorld {
    store: RefCell<RankingStore>,
}

#[fixture]
fn world() -> RankingWorld {
    RankingWorld::default()
}

#[given("a store seeded with the demo foods")]
fn seeded_store(#[from(world)] world: &RankingWorld) {
    world.store.replace(demo_store());
}

#[given("an empty store")]
fn empty_store(#[from(world)] world: &RankingWorld) {
    world.store.replace(RankingStore::new());
}

#[when("{food:word} is added to {cuisine:word} with rating {rating}")]
fn add_food(#[from(world)] world: &RankingWorld, food: String, cuisine: String, rating: i32) {
    world.store.borrow().add_food(&food, &cuisine, rating);
}

#[when("{food:word} is rated {rating}")]
fn rate_food(#[from(world)] world: &RankingWorld, food: String, rating: i32) {
    world.store.borrow().change_rating(&food, rating);
}

#[then("the highest rated {cuisine:word} food is {food:word}")]
fn highest_rated_is(#[from(world)] world: &RankingWorld, cuisine: String, food: String) {
    let store = world.store.borrow();
    assert_eq!(
        store.highest_rated(&cuisine),
        HighestRated::Found(food),
        "unexpected top food for {cuisine}"
    );
    assert_consistent(&store);
}

#[then("no {cuisine:word} food is rated")]
fn nothing_rated(#[from(world)] world: &RankingWorld, cuisine: String) {
    let result = world.store.borrow().highest_rated(&cuisine);
    assert_eq!(result, HighestRated::NotFound);
    assert_eq!(result.to_string(), "No foods found for this cuisine.");
}

#[then("the {cuisine:word} ranking is {names}")]
fn ranking_is(#[from(world)] world: &RankingWorld, cuisine: String, names: String) {
    let expected: Vec<_> = names.split(',').map(str::trim).collect();
    let actual: Vec<_> = world
        .store
        .borrow()
        .ranking(&cuisine)
        .into_iter()
        .map(|food| food.name)
        .collect();
    assert_eq!(actual, expected);
}

#[then("{food:word} still belongs to {cuisine:word} with rating {rating}")]
fn food_unchanged_cuisine(
    #[from(world)] world: &RankingWorld,
    food: String,
    cuisine: String,
    rating: i32,
) {
    let Some(item) = world.store.borrow().food(&food) else {
        panic!("food {food} should exist");
    };
    assert_eq!(item.cuisine, cuisine);
    assert_eq!(item.rating, rating);
}

#[then("the store still holds {count} foods")]
fn store_size(#[from(world)] world: &RankingWorld, count: usize) {
    let store = world.store.borrow();
    assert_eq!(store.len(), count);
    assert_consistent(&store);
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn demo_top_foods(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn lowering_a_rating(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn equal_ratings(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/ranking.feature", index = 3)]
fn re_adding_keeps_cuisine(world: RankingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/ranking.feature", index = 4)]
fn unknown_lookups(world: RankingWorld) {
    let _ = world;
}
