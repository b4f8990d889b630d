#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use zenith_scanner::{
    Cursor, ExternalScanner, SERIALIZATION_BUFFER_SIZE, STATE_SIZE, ScannerOptions, ScannerState,
    SliceCursor, ValidTokens,
};

#[derive(Debug, Arbitrary)]
enum Op {
    /// Scan at byte `offset` of the input (clamped, so large values hit EOF).
    Scan { offset: u8, acceptable: bool },
    /// Serialize and restore into a fresh scanner.
    Checkpoint,
    /// Restore from host-supplied bytes.
    Restore(Vec<u8>),
}

#[derive(Debug, Arbitrary)]
struct Session {
    honor_valid_tokens: bool,
    input: Vec<u8>,
    ops: Vec<Op>,
}

fn run(session: Session) {
    let options = ScannerOptions {
        honor_valid_tokens: session.honor_valid_tokens,
    };
    let mut scanner = ExternalScanner::with_options(options);
    let mut buf = [0u8; SERIALIZATION_BUFFER_SIZE];
    // A second match at end-of-input needs a non-EOF scan or restore first.
    let mut armed = true;

    for op in &session.ops {
        match op {
            Op::Scan { offset, acceptable } => {
                let flags = [*acceptable];
                let mut cursor = SliceCursor::at(&session.input, usize::from(*offset));
                let at_eof = cursor.is_eof();
                let hit = scanner.scan(&mut cursor, ValidTokens::new(&flags));
                if !at_eof {
                    assert!(hit.is_none(), "matched before end of input");
                    assert!(!scanner.state().last_was_end_marker);
                    armed = true;
                } else if hit.is_some() {
                    assert!(armed, "eof_tok emitted twice at one boundary");
                    assert_eq!(cursor.token_span(), Some(cursor.position()..cursor.position()));
                    armed = false;
                }
            }
            Op::Checkpoint => {
                let len = scanner.serialize(&mut buf).expect("state fits engine buffer");
                assert_eq!(len, STATE_SIZE);
                let before = scanner.state();
                scanner = ExternalScanner::with_options(options);
                scanner.deserialize(&buf[..len]).expect("own record decodes");
                assert_eq!(scanner.state(), before);
            }
            Op::Restore(bytes) => {
                if scanner.deserialize(bytes).is_err() {
                    assert_eq!(scanner.state(), ScannerState::default());
                }
                armed = true;
            }
        }
    }
}

fuzz_target!(|session: Session| run(session));
