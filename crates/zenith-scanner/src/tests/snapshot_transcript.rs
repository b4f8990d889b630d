//! Snapshot of the scanner's decisions across a typical engine session:
//! a first parse reaching the end, error recovery re-invoking the scanner at
//! the boundary, an edit that extends the input, and a resumed session.

use core::fmt::Write;
use std::{string::String, vec};

use insta::{assert_snapshot, assert_yaml_snapshot};

use super::arbitrary::{Op, Session};
use crate::{ScannerOptions, ScannerState};

#[test]
fn snapshot_engine_session() {
    let ops = vec![
        Op::ScanBeforeEof,
        Op::ScanBeforeEof,
        Op::ScanAtEof { acceptable: true },
        Op::ScanAtEof { acceptable: true },
        Op::ScanAtEof { acceptable: false },
        Op::Checkpoint,
        Op::ScanAtEof { acceptable: true },
        Op::ScanBeforeEof,
        Op::ScanAtEof { acceptable: false },
        Op::ScanAtEof { acceptable: true },
        Op::Restore(vec![0x10]),
        Op::ScanAtEof { acceptable: true },
        Op::Restore(vec![0x10, 0x11]),
        Op::ScanAtEof { acceptable: true },
    ];

    let mut session = Session::new(ScannerOptions::default());
    let mut transcript = String::new();
    for op in &ops {
        let outcome = session.apply(op);
        let marker = session.scanner.state().last_was_end_marker;
        let _ = writeln!(transcript, "{op:?} -> {outcome:?} (marker: {marker})");
    }

    assert_snapshot!(transcript.trim_end(), @r"
    ScanBeforeEof -> Declined (marker: false)
    ScanBeforeEof -> Declined (marker: false)
    ScanAtEof { acceptable: true } -> Matched (marker: true)
    ScanAtEof { acceptable: true } -> Declined (marker: true)
    ScanAtEof { acceptable: false } -> Declined (marker: true)
    Checkpoint -> Restored (marker: true)
    ScanAtEof { acceptable: true } -> Declined (marker: true)
    ScanBeforeEof -> Declined (marker: false)
    ScanAtEof { acceptable: false } -> Declined (marker: false)
    ScanAtEof { acceptable: true } -> Matched (marker: true)
    Restore([16]) -> Restored (marker: false)
    ScanAtEof { acceptable: true } -> Matched (marker: true)
    Restore([16, 17]) -> Refused (marker: false)
    ScanAtEof { acceptable: true } -> Matched (marker: true)
    ");
}

#[test]
fn snapshot_state_and_options() {
    assert_yaml_snapshot!(ScannerState { last_was_end_marker: true }, @"last_was_end_marker: true");
    assert_yaml_snapshot!(ScannerOptions::default(), @"honor_valid_tokens: true");
}
