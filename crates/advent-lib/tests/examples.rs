mod common;

use advent_lib::{lookup, solve, Answer, Part, PuzzleId, Year};

#[test]
fn every_example_matches_its_expected_answer() {
    let book = common::example_book();
    let cases = book.cases();
    assert!(!cases.is_empty(), "fixture book should not be empty");

    let mut failures = Vec::new();
    for case in &cases {
        match solve(&case.id.to_string(), case.input, case.params) {
            Ok(answer) if &answer == case.expected => {}
            Ok(answer) => failures.push(format!(
                "{}: expected {}, got {}",
                case.id, case.expected, answer
            )),
            Err(err) => failures.push(format!("{}: {}", case.id, err)),
        }
    }
    assert!(failures.is_empty(), "failing examples:\n{}", failures.join("\n"));
}

#[test]
fn every_example_refers_to_a_registered_puzzle() {
    let book = common::example_book();
    for case in book.cases() {
        lookup(&case.id.to_string()).expect("example puzzle is registered");
    }
}

#[test]
fn maze_example_answers_both_parts() {
    let book = common::example_book();
    let case = book
        .case(PuzzleId::new(Year::Aoc24, 16, Part::A))
        .expect("maze example present");
    let params = case.params.clone();

    assert_eq!(
        solve("aoc24:p16a", case.input_for(Part::A), &params).unwrap(),
        Answer::Int(7036)
    );
    assert_eq!(
        solve("aoc24:p16b", case.input_for(Part::B), &params).unwrap(),
        Answer::Int(45)
    );
}

#[test]
fn memory_example_needs_its_byte_override() {
    let book = common::example_book();
    let case = book
        .case(PuzzleId::new(Year::Aoc24, 18, Part::A))
        .expect("memory example present");

    assert_eq!(
        solve("aoc24:p18a", case.input_for(Part::A), &case.params).unwrap(),
        Answer::Int(22)
    );
    assert_eq!(
        solve("aoc24:p18b", case.input_for(Part::B), &case.params).unwrap(),
        Answer::Text("6,1".to_string())
    );
}
