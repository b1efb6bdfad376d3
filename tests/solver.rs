//! Solver orchestration: swapping, reporting, configuration errors.

use gapfinder::{
    ArrayValidator, PresenceTable, Reporter, SolveError, Solver, SortAndSearch, StrategyKind,
    MISSING_NUMBER_INDICATOR,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Answer(StrategyKind, Option<Vec<i64>>, i64),
    Failure(StrategyKind, Option<Vec<i64>>, SolveError),
}

#[derive(Default, Clone)]
struct RecordingReporter {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingReporter {
    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn on_result(&self, strategy: StrategyKind, array: Option<&[i64]>, answer: i64) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Answer(strategy, array.map(<[i64]>::to_vec), answer));
    }

    fn on_error(&self, strategy: StrategyKind, array: Option<&[i64]>, error: &SolveError) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Failure(strategy, array.map(<[i64]>::to_vec), *error));
    }
}

#[test]
fn construction_requires_a_strategy() {
    assert_eq!(Solver::try_new(None).unwrap_err(), SolveError::MissingStrategy);
    assert_eq!(SolveError::MissingStrategy.kind(), "ConfigurationError");
}

#[test]
fn swapping_to_nothing_is_refused() {
    let mut solver = Solver::new(Box::new(SortAndSearch::new(ArrayValidator::new())));
    assert_eq!(solver.set_strategy(None), Err(SolveError::MissingStrategy));
    assert_eq!(solver.strategy_kind(), StrategyKind::SortAndSearch);
    assert_eq!(solver.run(Some(&[3, 0, 1])), Ok(2));
}

#[test]
fn swapping_switches_the_algorithm() {
    let mut solver = Solver::new(Box::new(SortAndSearch::new(ArrayValidator::new())));
    assert_eq!(solver.strategy_kind(), StrategyKind::SortAndSearch);

    solver
        .set_strategy(Some(Box::new(PresenceTable::new(ArrayValidator::new()))))
        .unwrap();
    assert_eq!(solver.strategy_kind(), StrategyKind::PresenceTable);
    assert_eq!(solver.run(Some(&[1, 2, 3])), Ok(0));
}

#[test]
fn reporter_sees_every_outcome_in_order() {
    let reporter = RecordingReporter::default();
    let mut solver = Solver::new(StrategyKind::SortAndSearch.build_default())
        .with_reporter(Box::new(reporter.clone()));

    assert_eq!(solver.run(Some(&[3, 0, 1])), Ok(2));
    solver
        .set_strategy(Some(StrategyKind::PresenceTable.build_default()))
        .unwrap();
    assert!(solver.run(Some(&[-1, 0, 1])).is_err());
    assert_eq!(solver.run(Some(&[1, 0])), Ok(MISSING_NUMBER_INDICATOR));

    let events = reporter.events();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0],
        Event::Answer(StrategyKind::SortAndSearch, Some(vec![3, 0, 1]), 2)
    );
    assert!(matches!(
        events[1],
        Event::Failure(StrategyKind::PresenceTable, _, SolveError::InvalidInput { .. })
    ));
    assert_eq!(
        events[2],
        Event::Answer(
            StrategyKind::PresenceTable,
            Some(vec![1, 0]),
            MISSING_NUMBER_INDICATOR
        )
    );
}

#[test]
fn reported_error_is_the_returned_error() {
    let reporter = RecordingReporter::default();
    let solver = Solver::new(StrategyKind::PresenceTable.build_default())
        .with_reporter(Box::new(reporter.clone()));

    let returned = solver.run(None).unwrap_err();
    match reporter.events().as_slice() {
        [Event::Failure(_, None, reported)] => assert_eq!(*reported, returned),
        other => panic!("unexpected events {:?}", other),
    }
}

#[cfg(feature = "sync")]
mod shared {
    use gapfinder::{SharedSolver, Solver, StrategyKind};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn shared_solver_serializes_swaps_and_runs() {
        let shared = Arc::new(SharedSolver::new(Solver::new(
            StrategyKind::PresenceTable.build_default(),
        )));

        let swapper = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..200 {
                    let kind = StrategyKind::ALL[i % 2];
                    shared.set_strategy(Some(kind.build_default())).unwrap();
                }
            })
        };

        let runners: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..200 {
                        assert_eq!(shared.run(Some(&[9, 6, 4, 2, 3, 5, 7, 0, 1])), Ok(8));
                    }
                })
            })
            .collect();

        swapper.join().unwrap();
        for runner in runners {
            runner.join().unwrap();
        }
    }
}
