use proptest::prelude::*;

use pitch_trainer::game::{CountSelector, QuestionCount, SelectionOutcome};
use pitch_trainer::input::{Direction, DirectionClassifier, EdgeDetector};
use pitch_trainer::model::{NOTE_COUNT, Question};
use pitch_trainer::pattern::{QuestionGenerator, derive_seed};
use pitch_trainer::traits::RawAxes;

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Center),
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn generated_questions_keep_adjacent_notes_distinct(seed in any::<u32>()) {
        let mut generator = QuestionGenerator::from_seed(seed);
        for _ in 0..20 {
            let [a, b, c] = generator.generate().indices();
            prop_assert!(a < NOTE_COUNT && b < NOTE_COUNT && c < NOTE_COUNT);
            prop_assert_ne!(a, b);
            prop_assert_ne!(b, c);
        }
    }

    #[test]
    fn derived_seed_is_never_zero(x in 0u16..=4095, y in 0u16..=4095) {
        prop_assert_ne!(derive_seed(RawAxes::new(x, y)), 0);
    }

    #[test]
    fn classifier_agrees_with_itself(x in 0u16..=4095, y in 0u16..=4095) {
        let classifier = DirectionClassifier::default();
        let axes = RawAxes::new(x, y);
        prop_assert_eq!(classifier.classify(axes), classifier.classify(axes));
    }

    #[test]
    fn selection_stays_in_range(moves in proptest::collection::vec(any_direction(), 0..200)) {
        let mut selector = CountSelector::new();
        for edge in moves.into_iter().filter(|d| *d != Direction::Up) {
            let before = selector.count();
            let outcome = selector.apply(edge);
            let count = selector.count().get();
            prop_assert!((QuestionCount::MIN..=QuestionCount::MAX).contains(&count));
            prop_assert_eq!(outcome == SelectionOutcome::Unchanged, before == selector.count());
        }
    }

    #[test]
    fn sustained_direction_fires_once(direction in any_direction(), polls in 1usize..100) {
        let mut edges = EdgeDetector::new();
        let fired = (0..polls).filter_map(|_| edges.update(direction)).count();
        let expected = usize::from(!direction.is_center());
        prop_assert_eq!(fired, expected);
    }

    #[test]
    fn valid_questions_have_a_defined_direction(a in 0usize..7, b in 0usize..7, c in 0usize..7) {
        match Question::new([a, b, c]) {
            Some(q) => {
                let truth = q.ground_truth();
                let [fa, fb, fc] = q.frequencies();
                prop_assert_eq!(truth.first_up, fb > fa);
                prop_assert_eq!(truth.second_up, fc > fb);
            }
            None => prop_assert!(a == b || b == c),
        }
    }
}
