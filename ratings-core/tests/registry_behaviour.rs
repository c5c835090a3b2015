//! Behavioural coverage for the list registry.

use ratings_core::{HighestRated, ListRegistry};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn registry() -> ListRegistry {
    ListRegistry::new()
}

#[given("an empty registry")]
fn empty_registry(#[from(registry)] registry: &ListRegistry) {
    assert!(registry.is_empty());
}

#[when("the list {list:word} is created")]
fn create_list(#[from(registry)] registry: &ListRegistry, list: String) {
    registry.create_list(&list);
}

#[when("{food:word} is added to {cuisine:word} with rating {rating} in {list:word}")]
fn add_food_to_list(
    #[from(registry)] registry: &ListRegistry,
    food: String,
    cuisine: String,
    rating: i32,
    list: String,
) {
    let Some(store) = registry.get_list(&list) else {
        panic!("list {list} should exist");
    };
    store.add_food(&food, &cuisine, rating);
}

#[then("the registry holds {count} list")]
fn registry_size(#[from(registry)] registry: &ListRegistry, count: usize) {
    assert_eq!(registry.len(), count);
}

#[then("the highest rated {cuisine:word} food in {list:word} is {food:word}")]
fn highest_rated_in_list(
    #[from(registry)] registry: &ListRegistry,
    cuisine: String,
    list: String,
    food: String,
) {
    let Some(store) = registry.get_list(&list) else {
        panic!("list {list} should exist");
    };
    assert_eq!(store.highest_rated(&cuisine), HighestRated::Found(food));
}

#[then("no {cuisine:word} food is rated in {list:word}")]
fn nothing_rated_in_list(#[from(registry)] registry: &ListRegistry, cuisine: String, list: String) {
    let Some(store) = registry.get_list(&list) else {
        panic!("list {list} should exist");
    };
    assert_eq!(store.highest_rated(&cuisine), HighestRated::NotFound);
}

#[then("the list {list:word} does not exist")]
fn list_missing(#[from(registry)] registry: &ListRegistry, list: String) {
    assert!(registry.get_list(&list).is_none());
    assert!(!registry.list_names().contains(&list));
}

#[scenario(path = "tests/features/registry.feature", index = 0)]
fn creating_twice(registry: ListRegistry) {
    let _ = registry;
}

#[scenario(path = "tests/features/registry.feature", index = 1)]
fn isolated_lists(registry: ListRegistry) {
    let _ = registry;
}

#[scenario(path = "tests/features/registry.feature", index = 2)]
fn missing_list(registry: ListRegistry) {
    let _ = registry;
}
