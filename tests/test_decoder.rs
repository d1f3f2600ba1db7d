//! Unit tests for `ResponseAccumulator`

use bedrock_agent_tester::{AgentError, ResponseAccumulator};

#[test]
fn test_push_returns_newly_completed_text() {
    let mut acc = ResponseAccumulator::new();
    assert_eq!(acc.push(b"Hel").unwrap(), "Hel");
    assert_eq!(acc.push(b"lo").unwrap(), "lo");
    assert_eq!(acc.fragments(), 2);
    assert_eq!(acc.finish().unwrap(), "Hello");
}

#[test]
fn test_split_sequence_is_held_back() {
    let euro = "€".as_bytes();
    assert_eq!(euro.len(), 3);

    let mut acc = ResponseAccumulator::new();
    assert_eq!(acc.push(&[b'a', euro[0]]).unwrap(), "a");
    assert_eq!(acc.push(&euro[1..2]).unwrap(), "");
    assert_eq!(acc.push(&[euro[2], b'b']).unwrap(), "€b");
    assert_eq!(acc.finish().unwrap(), "a€b");
}

#[test]
fn test_empty_payload() {
    let mut acc = ResponseAccumulator::new();
    assert_eq!(acc.push(b"").unwrap(), "");
    assert_eq!(acc.finish().unwrap(), "");
}

#[test]
fn test_invalid_bytes_fail() {
    let mut acc = ResponseAccumulator::new();
    let err = acc.push(&[b'o', b'k', 0xc3, 0x28]).unwrap_err();
    assert!(matches!(err, AgentError::Other { ref category, .. } if category == "UnicodeDecodeError"));
}

#[test]
fn test_dangling_sequence_at_end_fails() {
    let mut acc = ResponseAccumulator::new();
    acc.push(&"é".as_bytes()[..1]).unwrap();
    assert!(acc.finish().is_err());
}
