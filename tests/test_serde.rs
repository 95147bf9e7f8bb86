#![cfg(feature = "serde")]

use nqueens_ga::{
    candidate::Candidate,
    evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel},
    report::NoopReporter,
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
    strategy::CrossfillStrategy,
};

#[test]
fn test_options_from_json() {
    let json = r#"{
        "board_size": 10,
        "population_size": 60,
        "mutation_probability": 0.5,
        "num_generations": 250,
        "tournament_size": 4,
        "log_level": "Minimal",
        "parallel_threshold": 1000,
        "seed": 12
    }"#;

    let options: EvolutionOptions = serde_json::from_str(json).unwrap();
    assert_eq!(options.get_board_size(), 10);
    assert_eq!(options.get_population_size(), 60);
    assert_eq!(options.get_num_generations(), 250);
    assert_eq!(options.get_tournament_size(), 4);
    assert_eq!(options.get_log_level(), LogLevel::Minimal);
    assert_eq!(options.get_seed(), Some(12));
    assert!(options.validate().is_ok());
}

#[test]
fn test_candidate_serializes_as_genes() {
    let candidate = Candidate::from_genes(vec![1, 3, 0, 2]).unwrap();
    let json = serde_json::to_string(&candidate).unwrap();
    assert_eq!(json, r#"{"genes":[1,3,0,2]}"#);
}

#[test]
fn test_candidate_from_json_is_validated() {
    let candidate: Candidate = serde_json::from_str(r#"{"genes":[1,3,0,2]}"#).unwrap();
    assert_eq!(candidate.genes(), &[1, 3, 0, 2]);

    for json in [r#"{"genes":[0,0,9]}"#, r#"{"genes":[0,1,1]}"#, r#"{"genes":[3]}"#] {
        let result = serde_json::from_str::<Candidate>(json);
        let err = result.expect_err(json);
        assert!(err.to_string().contains("not a permutation"), "{}", err);
    }
}

#[test]
fn test_result_with_invalid_candidate_rejected() {
    let json = r#"{"population":[{"genes":[0,1,2]},{"genes":[0,0,9]}],"history":[]}"#;
    assert!(serde_json::from_str::<EvolutionResult>(json).is_err());
}

#[test]
fn test_tournament_from_json_is_validated() {
    let selection: TournamentSelection = serde_json::from_str(r#"{"tournament_size":3}"#).unwrap();
    assert_eq!(selection.tournament_size(), 3);

    for json in [r#"{"tournament_size":1}"#, r#"{"tournament_size":0}"#] {
        assert!(serde_json::from_str::<TournamentSelection>(json).is_err(), "{}", json);
    }
}

#[test]
fn test_crossfill_from_json_is_validated() {
    let strategy: CrossfillStrategy =
        serde_json::from_str(r#"{"mutation_probability":0.25}"#).unwrap();
    assert_eq!(strategy.mutation_probability(), 0.25);

    for json in [r#"{"mutation_probability":1.5}"#, r#"{"mutation_probability":-0.1}"#] {
        assert!(serde_json::from_str::<CrossfillStrategy>(json).is_err(), "{}", json);
    }
}

#[test]
fn test_result_survives_json() {
    let options = EvolutionOptions::builder()
        .board_size(5)
        .population_size(8)
        .num_generations(10)
        .build();
    let launcher = EvolutionLauncher::for_options(&options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(6);
    let result = launcher.evolve(&options, &mut rng, &mut NoopReporter).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let restored: EvolutionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.population, result.population);
    assert_eq!(restored.history.len(), result.history.len());
}
