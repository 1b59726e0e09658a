//! Property-based tests for the calculator state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated command sequences.

use proptest::prelude::*;
use reckon::core::format::parse_display;
use reckon::core::{CalculatorState, Operator};
use reckon::input::{normalize, Command, Digit, KeyInput};
use reckon::machine::{apply, step, StepResult};

fn digit(d: u8) -> Command {
    Command::Digit(Digit::new(d).unwrap())
}

fn run(state: CalculatorState, commands: &[Command]) -> CalculatorState {
    commands
        .iter()
        .fold(state, |state, &command| apply(&state, command))
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            _ => Operator::Divide,
        }
    }
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (0..10u8).prop_map(digit),
        1 => Just(Command::Decimal),
        2 => arbitrary_operator().prop_map(Command::Operate),
        1 => Just(Command::Equals),
        1 => Just(Command::Clear),
        1 => Just(Command::Backspace),
    ]
}

proptest! {
    #[test]
    fn digits_concatenate_with_leading_zero_collapsed(
        digits in prop::collection::vec(0..10u8, 1..15)
    ) {
        let commands: Vec<Command> = digits.iter().map(|&d| digit(d)).collect();
        let state = run(CalculatorState::new(), &commands);

        let typed: String = digits.iter().map(|d| d.to_string()).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(state.display, expected);
    }

    #[test]
    fn decimal_is_idempotent_per_number(
        digits in prop::collection::vec(0..10u8, 0..8)
    ) {
        let mut commands: Vec<Command> = digits.iter().map(|&d| digit(d)).collect();
        commands.push(Command::Decimal);
        let once = run(CalculatorState::new(), &commands);
        let twice = apply(&once, Command::Decimal);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.display.matches('.').count(), 1);
    }

    #[test]
    fn display_stays_well_formed(
        commands in prop::collection::vec(arbitrary_command(), 0..60)
    ) {
        let mut state = CalculatorState::new();
        for command in commands {
            state = apply(&state, command);
            prop_assert!(!state.display.is_empty());
            prop_assert!(state.display.matches('.').count() <= 1);
            prop_assert!(parse_display(&state.display).is_finite());
            prop_assert!(state.display.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn history_never_exceeds_bound(
        commands in prop::collection::vec(arbitrary_command(), 0..80)
    ) {
        let mut state = CalculatorState::new();
        for command in commands {
            state = apply(&state, command);
            prop_assert!(state.history.len() <= 5);
        }
    }

    #[test]
    fn clear_resets_everything_but_history(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let state = run(CalculatorState::new(), &commands);
        let cleared = apply(&state, Command::Clear);

        prop_assert_eq!(cleared.display.as_str(), "0");
        prop_assert!(cleared.pending_value.is_none());
        prop_assert!(cleared.pending_operator.is_none());
        prop_assert!(!cleared.awaiting_operand);
        prop_assert_eq!(cleared.history, state.history);
    }

    #[test]
    fn pending_value_and_operator_travel_together_after_equals(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let state = run(CalculatorState::new(), &commands);
        let next = apply(&state, Command::Equals);

        prop_assert!(next.pending_value.is_none() || next.pending_operator.is_some());
    }

    #[test]
    fn ignored_commands_leave_state_unchanged(
        commands in prop::collection::vec(arbitrary_command(), 0..40),
        command in arbitrary_command()
    ) {
        let state = run(CalculatorState::new(), &commands);
        if let StepResult::Ignored(_) = step(&state, command) {
            prop_assert_eq!(apply(&state, command), state);
        }
    }

    #[test]
    fn normalizer_only_accepts_known_keys(c in any::<char>()) {
        let accepted = normalize(KeyInput::Char(c)).is_some();
        prop_assert_eq!(accepted, "0123456789.+-*/×÷=cC".contains(c));
    }
}
