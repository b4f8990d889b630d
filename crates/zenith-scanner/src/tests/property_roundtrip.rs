//! Property: a checkpointed scanner behaves exactly like the original.

use std::vec::Vec;

use quickcheck::QuickCheck;

use super::arbitrary::{Op, Session, test_count};
use crate::{ExternalScanner, STATE_SIZE, ScannerOptions, ScannerState};

#[test]
fn checkpoint_preserves_next_scan_quickcheck() {
    fn prop(state: ScannerState, options: ScannerOptions, next: Op) -> bool {
        if matches!(next, Op::Restore(_) | Op::Checkpoint) {
            return true;
        }

        let mut original = Session::new(options);
        original.scanner = ExternalScanner::from_state(state, options);
        let mut resumed = Session::new(options);
        resumed.scanner = ExternalScanner::from_state(state, options);
        resumed.apply(&Op::Checkpoint);

        original.apply(&next) == resumed.apply(&next)
            && original.scanner.state() == resumed.scanner.state()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(ScannerState, ScannerOptions, Op) -> bool);
}

#[test]
fn restore_from_arbitrary_bytes_fails_closed_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(state: ScannerState, bytes: Vec<u8>) -> bool {
        let mut scanner = ExternalScanner::from_state(state, ScannerOptions::default());
        match scanner.deserialize(&bytes) {
            Ok(()) => {
                (bytes.len() == STATE_SIZE && scanner.state().encode()[..] == bytes[..])
                    || (bytes.is_empty() && scanner.state() == ScannerState::default())
            }
            Err(_) => scanner.state() == ScannerState::default(),
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(ScannerState, Vec<u8>) -> bool);
}
