//! Property: at a fixed end-of-input boundary `eof_tok` is emitted at most
//! once. Only a scan at a non-EOF position or a restore may re-arm it.

use std::vec::Vec;

use quickcheck::QuickCheck;

use super::arbitrary::{Op, Outcome, Session, test_count};
use crate::{ScannerOptions, ScannerState};

#[test]
fn at_most_one_eof_tok_per_boundary_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(options: ScannerOptions, ops: Vec<Op>) -> bool {
        let mut session = Session::new(options);
        let mut armed_since_match = true;
        for op in &ops {
            match (op, session.apply(op)) {
                (Op::ScanAtEof { .. }, Outcome::Matched) => {
                    if !armed_since_match {
                        return false;
                    }
                    armed_since_match = false;
                }
                (Op::ScanBeforeEof | Op::Restore(_), _) => armed_since_match = true,
                _ => {}
            }
        }
        true
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(ScannerOptions, Vec<Op>) -> bool);
}

#[test]
fn scanner_agrees_with_reference_model_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(options: ScannerOptions, ops: Vec<Op>) -> bool {
        let mut session = Session::new(options);
        let mut model = false;
        for op in &ops {
            let expected = match op {
                Op::ScanAtEof { acceptable } => {
                    if model || (options.honor_valid_tokens && !acceptable) {
                        Outcome::Declined
                    } else {
                        model = true;
                        Outcome::Matched
                    }
                }
                Op::ScanBeforeEof => {
                    model = false;
                    Outcome::Declined
                }
                Op::Checkpoint => Outcome::Restored,
                Op::Restore(bytes) => match ScannerState::decode(bytes) {
                    Ok(state) => {
                        model = state.last_was_end_marker;
                        Outcome::Restored
                    }
                    Err(_) => {
                        model = false;
                        Outcome::Refused
                    }
                },
            };
            if session.apply(op) != expected
                || session.scanner.state().last_was_end_marker != model
            {
                return false;
            }
        }
        true
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(ScannerOptions, Vec<Op>) -> bool);
}

#[test]
fn scan_before_eof_always_declines_quickcheck() {
    fn prop(state: ScannerState, options: ScannerOptions) -> bool {
        let mut session = Session::new(options);
        session.scanner = crate::ExternalScanner::from_state(state, options);
        session.apply(&Op::ScanBeforeEof) == Outcome::Declined
            && !session.scanner.state().last_was_end_marker
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(ScannerState, ScannerOptions) -> bool);
}
