//! 扫描器性质测试

use proptest::prelude::*;
use yz_core::{scan_line, ClassificationTables, ScanState};

fn any_state() -> impl Strategy<Value = ScanState> {
    prop_oneof![
        Just(ScanState::Base),
        Just(ScanState::InString),
        Just(ScanState::InChar),
        Just(ScanState::InRawString),
        Just(ScanState::InBlockComment),
    ]
}

/// 偏向 Yz 源码字符的行
fn yz_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9_ \"'`/*+=<>!&|{}();,.@#:\\\\-]{0,60}",
        any::<String>().prop_map(|s| s.replace(['\n'], "")),
    ]
}

proptest! {
    #[test]
    fn prop_tokens_reconstruct_line(line in yz_line(), state in any_state()) {
        let scan = scan_line(&line, state, ClassificationTables::yz());
        prop_assert_eq!(scan.text(), line);
    }

    #[test]
    fn prop_scan_is_deterministic(line in yz_line(), state in any_state()) {
        let tables = ClassificationTables::yz();
        prop_assert_eq!(scan_line(&line, state, tables), scan_line(&line, state, tables));
    }

    #[test]
    fn prop_tokens_are_non_empty(line in yz_line(), state in any_state()) {
        let scan = scan_line(&line, state, ClassificationTables::yz());
        for token in &scan.tokens {
            prop_assert!(!token.text.is_empty());
            prop_assert!(!token.span.is_empty());
        }
    }

    #[test]
    fn prop_quoted_modes_never_carry(line in yz_line(), state in any_state()) {
        let next = scan_line(&line, state, ClassificationTables::yz()).next_state;
        prop_assert!(next != ScanState::InString && next != ScanState::InChar);
    }
}
