// VM ScriptBuilder Tests
// Covers the push encodings used by contract call scripts

use neo_invoke_core::UInt160;
use neo_invoke_vm::{OpCode, Script, ScriptBuilder};
use num_bigint::BigInt;

#[test]
fn test_emit_basic() {
    let mut script = ScriptBuilder::new();
    assert_eq!(script.to_array().len(), 0);

    script.emit_opcode(OpCode::NOP);
    assert_eq!(script.to_array(), vec![0x61]);
}

#[test]
fn test_emit_with_operand() {
    let mut script = ScriptBuilder::new();
    script.emit_opcode(OpCode::NOP);
    script.emit(0x66);
    assert_eq!(script.to_array(), vec![0x61, 0x66]);
}

#[test]
fn test_emit_push_big_integer() {
    let mut script = ScriptBuilder::new();
    script.emit_push_bigint(&BigInt::from(-100000));
    // -100000 = 0xFFFE7960, minimal little-endian two's complement is 60 79 FE
    assert_eq!(script.to_array(), vec![0x03, 0x60, 0x79, 0xFE]);

    let mut script = ScriptBuilder::new();
    script.emit_push_bigint(&BigInt::from(100000));
    assert_eq!(script.to_array(), vec![0x03, 0xA0, 0x86, 0x01]);
}

#[test]
fn test_emit_push_huge_integer() {
    let value = BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
    let mut script = ScriptBuilder::new();
    script.emit_push_bigint(&value);
    let bytes = script.to_array();

    let expected = value.to_signed_bytes_le();
    assert_eq!(bytes[0] as usize, expected.len());
    assert_eq!(&bytes[1..], expected.as_slice());
}

#[test]
fn test_emit_push_int_matches_bigint() {
    for value in [-300i64, -1, 0, 1, 16, 17, 255, 256, i64::MAX, i64::MIN] {
        let mut narrow = ScriptBuilder::new();
        narrow.emit_push_int(value);
        let mut wide = ScriptBuilder::new();
        wide.emit_push_bigint(&BigInt::from(value));
        assert_eq!(narrow.to_array(), wide.to_array(), "value {value}");
    }
}

#[test]
fn test_emit_push_string() {
    let mut script = ScriptBuilder::new();
    script.emit_push_string("transfer");
    let mut expected = vec![8u8];
    expected.extend_from_slice(b"transfer");
    assert_eq!(script.to_array(), expected);
}

#[test]
fn test_app_call_script_hex() {
    let hash = UInt160::parse("0x0102030405060708090a0b0c0d0e0f1011121314").unwrap();
    let mut script = ScriptBuilder::new();
    script.emit_push_int(0);
    script.emit_app_call(&hash);

    let hex = script.to_script().to_hex();
    assert_eq!(hex, "006714131211100f0e0d0c0b0a090807060504030201");
    assert_eq!(Script::from_hex(&hex).unwrap(), script.into_script());
}
