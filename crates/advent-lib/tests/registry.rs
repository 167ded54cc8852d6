use advent_lib::{lookup, puzzles, solve, Error, PuzzleParams};

#[test]
fn catalogue_lists_both_years() {
    let ids: Vec<String> = puzzles().map(|entry| entry.id.to_string()).collect();

    assert!(ids.contains(&"aoc24:p16a".to_string()));
    assert!(ids.contains(&"aoc24:p16b".to_string()));
    assert!(ids.contains(&"aoc25:p11b".to_string()));
    assert!(ids.contains(&"aoc25:p12a".to_string()));
    assert!(puzzles().all(|entry| !entry.description.is_empty()));
}

#[test]
fn lookup_accepts_alternate_spellings() {
    let entry = lookup("AOC24/P16A").expect("maze puzzle registered");
    assert_eq!(entry.id.to_string(), "aoc24:p16a");
}

#[test]
fn unregistered_day_suggests_neighbours() {
    match lookup("aoc24:p22a") {
        Err(Error::UnknownPuzzle { name, suggestions }) => {
            assert_eq!(name, "aoc24:p22a");
            assert!(!suggestions.is_empty());
            assert!(suggestions.len() <= 3);
        }
        other => panic!("expected unknown puzzle, got {:?}", other),
    }
}

#[test]
fn missing_part_letter_is_reported_with_suggestions() {
    let err = lookup("aoc24:p16").unwrap_err();
    match err {
        Error::UnknownPuzzle { suggestions, .. } => {
            assert!(suggestions.iter().any(|s| s.starts_with("aoc24:p16")));
        }
        other => panic!("expected unknown puzzle, got {:?}", other),
    }
}

#[test]
fn gibberish_is_an_invalid_id() {
    assert!(matches!(lookup("zzz"), Err(Error::InvalidPuzzleId { .. })));
}

#[test]
fn bad_parameter_values_surface_from_solvers() {
    let params = PuzzleParams::new().with("bytes", "lots");
    let err = solve("aoc24:p18a", "0,0\n1,1\n", &params).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));
}

#[test]
fn malformed_maze_is_an_error_not_a_panic() {
    let err = solve("aoc24:p16a", "#####\n#..E#\n#####", &PuzzleParams::new()).unwrap_err();
    assert!(matches!(err, Error::MissingMarker { marker: 'S' }));
}
