use std::collections::{HashMap, HashSet};

use prefecture_quiz::quiz::{self, CHOICE_COUNT, InsufficientData};

fn sample_pool() -> Vec<String> {
    ["Tokyo", "Osaka", "Kyoto", "Hokkaido", "Okinawa"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn four_name_pool() -> Vec<String> {
    ["Tokyo", "Osaka", "Kyoto", "Hokkaido"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn choices_are_four_distinct_names_from_the_pool() {
    let pool = sample_pool();
    for _ in 0..100 {
        let payload = quiz::generate(&pool).unwrap();
        assert_eq!(payload.choices.len(), CHOICE_COUNT);
        let distinct: HashSet<&String> = payload.choices.iter().collect();
        assert_eq!(distinct.len(), CHOICE_COUNT);
        for choice in &payload.choices {
            assert!(pool.contains(choice), "{choice} is not in the pool");
        }
    }
}

#[test]
fn correct_answer_is_one_of_the_choices() {
    let pool = sample_pool();
    for _ in 0..100 {
        let payload = quiz::generate(&pool).unwrap();
        assert!(payload.choices.contains(&payload.correct_answer));
    }
}

#[test]
fn four_name_pool_uses_every_name() {
    let pool = four_name_pool();
    let payload = quiz::generate(&pool).unwrap();
    let choices: HashSet<&String> = payload.choices.iter().collect();
    let expected: HashSet<&String> = pool.iter().collect();
    assert_eq!(choices, expected);
}

#[test]
fn small_pools_are_rejected() {
    for size in 0..CHOICE_COUNT {
        let pool: Vec<String> = (0..size).map(|i| format!("Name {i}")).collect();
        let err = quiz::generate(&pool).unwrap_err();
        assert_eq!(err, InsufficientData { available: size });
    }
}

#[test]
fn every_name_is_eventually_the_answer() {
    let pool = sample_pool();
    let mut rng = fastrand::Rng::with_seed(0x5EED);
    let mut counts: HashMap<String, u32> = HashMap::new();
    for _ in 0..2000 {
        let payload = quiz::generate_with(&pool, &mut rng).unwrap();
        *counts.entry(payload.correct_answer).or_default() += 1;
    }
    // Each of the 5 names should be the answer about 400 times out of 2000.
    for name in &pool {
        let count = counts.get(name).copied().unwrap_or(0);
        assert!(count > 250, "{name} was the answer only {count} times");
    }
}

#[test]
fn choice_order_varies_between_calls() {
    let pool = four_name_pool();
    let mut rng = fastrand::Rng::with_seed(42);
    let orderings: HashSet<Vec<String>> = (0..50)
        .map(|_| quiz::generate_with(&pool, &mut rng).unwrap().choices)
        .collect();
    assert!(orderings.len() > 1, "choices always came back in one order");
}

#[test]
fn payload_serializes_with_camel_case_keys() {
    let payload = quiz::generate(&sample_pool()).unwrap();
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("correctAnswer").is_some());
    assert_eq!(
        value["choices"].as_array().unwrap().len(),
        CHOICE_COUNT
    );
}
