// Script Encoder Tests
// Call scripts built from registry signatures and user-supplied arguments

use neo_invoke_contract::{
    ContractError, ContractParameter, ContractParameterType, ContractParameterValue,
    ContractRegistry, ContractSignature, IntegerValue, MemoryContractRegistry, ScriptEncoder,
};
use neo_invoke_core::UInt160;
use num_bigint::BigInt;
use proptest::prelude::*;

const CONTRACT: &str = "0x0102030405060708090a0b0c0d0e0f1011121314";
const CONTRACT_LE_HEX: &str = "14131211100f0e0d0c0b0a090807060504030201";

fn contract_hash() -> UInt160 {
    UInt160::parse(CONTRACT).unwrap()
}

#[test]
fn test_integer_and_array_scenario() {
    let registry = MemoryContractRegistry::from_json_str(&format!(
        r#"[{{"hash": "{CONTRACT}", "name": "Scenario", "parameter_list": [2, 16]}}]"#
    ))
    .unwrap();
    let state = registry.get_contract(&contract_hash()).unwrap();
    let signature = ContractSignature::from_state(&state).unwrap();

    let mut parameters = signature.new_parameters();
    parameters[0].set_value("42").unwrap();
    parameters[1]
        .set_value(r#"[{"type":"Integer","value":"7"},{"type":"Integer","value":"9"}]"#)
        .unwrap();

    let script = ScriptEncoder::encode(&contract_hash(), &parameters).unwrap();
    // PUSH9 PUSH7 PUSH2 PACK PUSHBYTES1 2a APPCALL <hash>
    assert_eq!(script.to_hex(), format!("595752c1012a67{CONTRACT_LE_HEX}"));
}

#[test]
fn test_nested_narrow_and_wide_integers_encode_identically() {
    let narrow = vec![ContractParameter::array(vec![
        ContractParameter::integer(5),
        ContractParameter::array(vec![ContractParameter::integer(1_000_000)]),
    ])];
    let wide = vec![ContractParameter::array(vec![
        ContractParameter::integer(BigInt::from(5)),
        ContractParameter::array(vec![ContractParameter::integer(BigInt::from(1_000_000))]),
    ])];

    assert_eq!(
        ScriptEncoder::encode(&contract_hash(), &narrow).unwrap(),
        ScriptEncoder::encode(&contract_hash(), &wide).unwrap()
    );
}

#[test]
fn test_encoding_leaves_caller_parameters_untouched() {
    let parameters = vec![ContractParameter::integer(5)];
    ScriptEncoder::encode(&contract_hash(), &parameters).unwrap();
    assert_eq!(
        parameters[0].value(),
        Some(&ContractParameterValue::Integer(IntegerValue::Fixed(5)))
    );
}

#[test]
fn test_incomplete_nested_array_is_rejected() {
    let parameters = vec![
        ContractParameter::integer(1),
        ContractParameter::array(vec![
            ContractParameter::integer(2),
            ContractParameter::array(vec![ContractParameter::new(ContractParameterType::Hash256)]),
        ]),
    ];

    match ScriptEncoder::encode(&contract_hash(), &parameters) {
        Err(ContractError::IncompleteParameters { path }) => {
            assert_eq!(path, "parameters[1][1][0]");
        }
        other => panic!("expected IncompleteParameters, got {other:?}"),
    }
}

#[test]
fn test_legacy_array_code_from_registry() {
    let registry = MemoryContractRegistry::from_json_str(&format!(
        r#"[{{"hash": "{CONTRACT}", "parameter_list": [22], "return_type": 22}}]"#
    ))
    .unwrap();
    let state = registry.get_contract(&contract_hash()).unwrap();
    let signature = ContractSignature::from_state(&state).unwrap();

    assert_eq!(signature.parameters, vec![ContractParameterType::Array]);
    assert_eq!(signature.return_type, ContractParameterType::Array);
}

#[test]
fn test_long_byte_array_uses_pushdata1() {
    let parameters = vec![ContractParameter::from_value(
        ContractParameterValue::ByteArray(vec![0xAA; 80]),
    )];
    let script = ScriptEncoder::encode(&contract_hash(), &parameters).unwrap();
    let bytes = script.as_bytes();

    assert_eq!(&bytes[..2], &[0x4C, 80]);
    assert_eq!(bytes[82], 0x67);
    assert_eq!(bytes.len(), 2 + 80 + 21);
}

proptest! {
    #[test]
    fn test_encode_is_deterministic(values in prop::collection::vec(any::<i64>(), 0..8), flag in any::<bool>()) {
        let mut parameters: Vec<ContractParameter> =
            values.iter().copied().map(ContractParameter::integer).collect();
        parameters.push(ContractParameter::from_value(ContractParameterValue::Boolean(flag)));

        let first = ScriptEncoder::encode(&contract_hash(), &parameters).unwrap();
        let second = ScriptEncoder::encode(&contract_hash(), &parameters).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_narrow_matches_wide(value in any::<i64>()) {
        let narrow = ScriptEncoder::encode(&contract_hash(), &[ContractParameter::integer(value)]).unwrap();
        let wide = ScriptEncoder::encode(&contract_hash(), &[ContractParameter::integer(BigInt::from(value))]).unwrap();
        prop_assert_eq!(narrow, wide);
    }
}
