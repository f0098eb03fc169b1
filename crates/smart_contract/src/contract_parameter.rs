//! ContractParameter - one typed argument of a contract call.

use crate::contract_parameter_type::ContractParameterType;
use crate::error::{ContractError, ContractResult};
use neo_invoke_core::{UInt160, UInt256};
use neo_invoke_vm::StackItem;
use num_bigint::BigInt;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::PublicKey;
use serde_json::{json, Map, Value};
use std::fmt;

/// Byte length of a signature value.
pub const SIGNATURE_SIZE: usize = 64;

/// An integer argument, either from the narrow editing path or arbitrary precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegerValue {
    /// 64-bit value.
    Fixed(i64),
    /// Arbitrary precision value.
    Big(BigInt),
}

impl IntegerValue {
    /// Returns the value as a `BigInt`.
    pub fn to_bigint(&self) -> BigInt {
        match self {
            IntegerValue::Fixed(value) => BigInt::from(*value),
            IntegerValue::Big(value) => value.clone(),
        }
    }

    /// Converts to the `Big` representation.
    pub fn normalize(&mut self) {
        if let IntegerValue::Fixed(value) = *self {
            *self = IntegerValue::Big(BigInt::from(value));
        }
    }

    /// Returns `true` once the value is arbitrary precision.
    pub fn is_normalized(&self) -> bool {
        matches!(self, IntegerValue::Big(_))
    }
}

impl From<i64> for IntegerValue {
    fn from(value: i64) -> Self {
        IntegerValue::Fixed(value)
    }
}

impl From<BigInt> for IntegerValue {
    fn from(value: BigInt) -> Self {
        IntegerValue::Big(value)
    }
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegerValue::Fixed(value) => write!(f, "{value}"),
            IntegerValue::Big(value) => write!(f, "{value}"),
        }
    }
}

/// Represents the possible values of smart contract parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameterValue {
    /// 64-byte signature.
    Signature(Vec<u8>),
    /// Boolean.
    Boolean(bool),
    /// Integer.
    Integer(IntegerValue),
    /// 160-bit hash.
    Hash160(UInt160),
    /// 256-bit hash.
    Hash256(UInt256),
    /// Raw bytes.
    ByteArray(Vec<u8>),
    /// secp256r1 public key.
    PublicKey(PublicKey),
    /// UTF-8 string.
    String(String),
    /// Nested parameters.
    Array(Vec<ContractParameter>),
}

impl ContractParameterValue {
    /// The parameter kind this value belongs to.
    pub fn kind(&self) -> ContractParameterType {
        match self {
            ContractParameterValue::Signature(_) => ContractParameterType::Signature,
            ContractParameterValue::Boolean(_) => ContractParameterType::Boolean,
            ContractParameterValue::Integer(_) => ContractParameterType::Integer,
            ContractParameterValue::Hash160(_) => ContractParameterType::Hash160,
            ContractParameterValue::Hash256(_) => ContractParameterType::Hash256,
            ContractParameterValue::ByteArray(_) => ContractParameterType::ByteArray,
            ContractParameterValue::PublicKey(_) => ContractParameterType::PublicKey,
            ContractParameterValue::String(_) => ContractParameterType::String,
            ContractParameterValue::Array(_) => ContractParameterType::Array,
        }
    }
}

/// Represents a parameter of a smart contract method.
///
/// The kind is fixed at creation. The value stays `None` until input
/// supplies one, and only a value of the matching kind is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractParameter {
    param_type: ContractParameterType,
    value: Option<ContractParameterValue>,
}

impl ContractParameter {
    /// Creates an unset parameter of the given kind.
    pub fn new(param_type: ContractParameterType) -> Self {
        Self {
            param_type,
            value: None,
        }
    }

    /// Creates a parameter holding `value`; the kind is taken from the value.
    pub fn from_value(value: ContractParameterValue) -> Self {
        Self {
            param_type: value.kind(),
            value: Some(value),
        }
    }

    /// Shorthand for an integer parameter.
    pub fn integer(value: impl Into<IntegerValue>) -> Self {
        Self::from_value(ContractParameterValue::Integer(value.into()))
    }

    /// Shorthand for an array parameter.
    pub fn array(items: Vec<ContractParameter>) -> Self {
        Self::from_value(ContractParameterValue::Array(items))
    }

    /// The declared kind.
    pub fn param_type(&self) -> ContractParameterType {
        self.param_type
    }

    /// The current value, if any.
    pub fn value(&self) -> Option<&ContractParameterValue> {
        self.value.as_ref()
    }

    /// Replaces the value; the value's kind must match the declared kind.
    pub fn set(&mut self, value: ContractParameterValue) -> ContractResult<()> {
        let actual = value.kind();
        if actual != self.param_type {
            return Err(ContractError::TypeMismatch {
                expected: self.param_type,
                actual,
            });
        }
        self.value = Some(value);
        Ok(())
    }

    /// Removes the value.
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Sets the value from the text an editor would accept for this kind.
    pub fn set_value(&mut self, text: &str) -> ContractResult<()> {
        let kind = self.param_type;
        let value = match kind {
            ContractParameterType::Signature => {
                let bytes = decode_hex(kind, text)?;
                if bytes.len() != SIGNATURE_SIZE {
                    return Err(ContractError::invalid_value(
                        kind,
                        format!("expected {SIGNATURE_SIZE} bytes, got {}", bytes.len()),
                    ));
                }
                ContractParameterValue::Signature(bytes)
            }
            ContractParameterType::Boolean => {
                ContractParameterValue::Boolean(text.trim().eq_ignore_ascii_case("true"))
            }
            ContractParameterType::Integer => {
                ContractParameterValue::Integer(IntegerValue::Big(parse_integer(text)?))
            }
            ContractParameterType::Hash160 => ContractParameterValue::Hash160(
                UInt160::parse(text.trim())
                    .map_err(|e| ContractError::invalid_value(kind, e.to_string()))?,
            ),
            ContractParameterType::Hash256 => ContractParameterValue::Hash256(
                UInt256::parse(text.trim())
                    .map_err(|e| ContractError::invalid_value(kind, e.to_string()))?,
            ),
            ContractParameterType::ByteArray => {
                ContractParameterValue::ByteArray(decode_hex(kind, text)?)
            }
            ContractParameterType::PublicKey => {
                ContractParameterValue::PublicKey(parse_public_key(text)?)
            }
            ContractParameterType::String => ContractParameterValue::String(text.to_string()),
            ContractParameterType::Array => {
                let json: Value = serde_json::from_str(text)
                    .map_err(|e| ContractError::invalid_value(kind, e.to_string()))?;
                ContractParameterValue::Array(parse_array(&json)?)
            }
            ContractParameterType::InteropInterface | ContractParameterType::Void => {
                return Err(ContractError::UnsupportedParameterType(kind));
            }
        };

        self.value = Some(value);
        Ok(())
    }

    /// Returns `true` when this parameter and every nested element has a value.
    pub fn is_complete(&self) -> bool {
        match &self.value {
            None => false,
            Some(ContractParameterValue::Array(items)) => items.iter().all(Self::is_complete),
            Some(_) => true,
        }
    }

    /// Locates the first parameter without a value, depth first.
    ///
    /// The location reads like `parameters[1][0]`.
    pub fn find_incomplete(parameters: &[ContractParameter]) -> Option<String> {
        parameters
            .iter()
            .enumerate()
            .find_map(|(index, p)| p.missing_path(format!("parameters[{index}]")))
    }

    fn missing_path(&self, path: String) -> Option<String> {
        match &self.value {
            None => Some(path),
            Some(ContractParameterValue::Array(items)) => items
                .iter()
                .enumerate()
                .find_map(|(index, p)| p.missing_path(format!("{path}[{index}]"))),
            Some(_) => None,
        }
    }

    /// Rewrites every narrow integer, including nested ones, as arbitrary precision.
    ///
    /// [`ScriptEncoder::encode`](crate::ScriptEncoder::encode) applies this to
    /// its own copy of the arguments. Parameters held by a caller keep their
    /// `Fixed` values after encoding; the emitted bytes are the same either way.
    pub fn normalize_integers(&mut self) {
        match &mut self.value {
            Some(ContractParameterValue::Integer(value)) => value.normalize(),
            Some(ContractParameterValue::Array(items)) => {
                items.iter_mut().for_each(Self::normalize_integers)
            }
            _ => {}
        }
    }

    /// Converts the parameter to a JSON object.
    pub fn to_json(&self) -> Value {
        let mut json = Map::new();
        json.insert("type".to_string(), json!(self.param_type.as_str()));

        if let Some(value) = &self.value {
            let value_json = match value {
                ContractParameterValue::Signature(bytes)
                | ContractParameterValue::ByteArray(bytes) => json!(hex::encode(bytes)),
                ContractParameterValue::Boolean(b) => json!(b),
                ContractParameterValue::Integer(i) => json!(i.to_string()),
                ContractParameterValue::Hash160(h) => json!(h.to_string()),
                ContractParameterValue::Hash256(h) => json!(h.to_string()),
                ContractParameterValue::PublicKey(pk) => json!(encode_public_key(pk)),
                ContractParameterValue::String(s) => json!(s),
                ContractParameterValue::Array(items) => {
                    Value::Array(items.iter().map(Self::to_json).collect())
                }
            };
            json.insert("value".to_string(), value_json);
        }

        Value::Object(json)
    }

    /// Converts the parameter from a JSON object; a missing or null `value` leaves it unset.
    pub fn from_json(json: &Value) -> ContractResult<Self> {
        let type_name = json
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ContractError::InvalidRecord("missing or invalid 'type' field".into()))?;
        let kind = ContractParameterType::from_string(type_name)?;
        let mut parameter = ContractParameter::new(kind);

        let value = match json.get("value") {
            None | Some(Value::Null) => return Ok(parameter),
            Some(value) => value,
        };

        match (kind, value) {
            (ContractParameterType::Boolean, Value::Bool(b)) => {
                parameter.value = Some(ContractParameterValue::Boolean(*b));
            }
            (ContractParameterType::Integer, Value::Number(n)) => {
                let narrow = n.as_i64().ok_or_else(|| {
                    ContractError::invalid_value(kind, format!("{n} is not an integer"))
                })?;
                parameter.value = Some(ContractParameterValue::Integer(IntegerValue::Fixed(narrow)));
            }
            (ContractParameterType::Array, Value::Array(_)) => {
                parameter.value = Some(ContractParameterValue::Array(parse_array(value)?));
            }
            (_, Value::String(text)) if kind != ContractParameterType::Array => {
                parameter.set_value(text)?;
            }
            _ => {
                return Err(ContractError::invalid_value(
                    kind,
                    format!("unexpected JSON value {value}"),
                ));
            }
        }

        Ok(parameter)
    }

    /// Converts the value to the stack item an engine would see.
    pub fn to_stack_item(&self) -> ContractResult<StackItem> {
        let value = match &self.value {
            Some(value) => value,
            None if self.param_type == ContractParameterType::InteropInterface => {
                return Ok(StackItem::InteropInterface);
            }
            None => {
                return Err(ContractError::IncompleteParameters {
                    path: self.param_type.to_string(),
                });
            }
        };

        Ok(match value {
            ContractParameterValue::Signature(bytes) | ContractParameterValue::ByteArray(bytes) => {
                StackItem::ByteArray(bytes.clone())
            }
            ContractParameterValue::Boolean(b) => StackItem::Boolean(*b),
            ContractParameterValue::Integer(i) => StackItem::Integer(i.to_bigint()),
            ContractParameterValue::Hash160(h) => StackItem::from_bytes(h.as_bytes()),
            ContractParameterValue::Hash256(h) => StackItem::from_bytes(h.as_bytes()),
            ContractParameterValue::PublicKey(pk) => StackItem::ByteArray(compressed_point(pk)),
            ContractParameterValue::String(s) => StackItem::from_bytes(s.as_bytes()),
            ContractParameterValue::Array(items) => StackItem::Array(
                items
                    .iter()
                    .map(Self::to_stack_item)
                    .collect::<ContractResult<Vec<_>>>()?,
            ),
        })
    }
}

impl From<&StackItem> for ContractParameter {
    fn from(item: &StackItem) -> Self {
        match item {
            StackItem::ByteArray(bytes) => {
                ContractParameter::from_value(ContractParameterValue::ByteArray(bytes.clone()))
            }
            StackItem::Boolean(b) => ContractParameter::from_value(ContractParameterValue::Boolean(*b)),
            StackItem::Integer(i) => ContractParameter::integer(i.clone()),
            StackItem::InteropInterface => {
                ContractParameter::new(ContractParameterType::InteropInterface)
            }
            StackItem::Array(items) | StackItem::Struct(items) => {
                ContractParameter::array(items.iter().map(ContractParameter::from).collect())
            }
            StackItem::Map(entries) => ContractParameter::array(
                entries
                    .iter()
                    .map(|(key, value)| {
                        ContractParameter::array(vec![
                            ContractParameter::from(key),
                            ContractParameter::from(value),
                        ])
                    })
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for ContractParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            None => write!(f, "(null)"),
            Some(ContractParameterValue::Signature(bytes))
            | Some(ContractParameterValue::ByteArray(bytes)) => write!(f, "{}", hex::encode(bytes)),
            Some(ContractParameterValue::Boolean(b)) => write!(f, "{b}"),
            Some(ContractParameterValue::Integer(i)) => write!(f, "{i}"),
            Some(ContractParameterValue::Hash160(h)) => write!(f, "{h}"),
            Some(ContractParameterValue::Hash256(h)) => write!(f, "{h}"),
            Some(ContractParameterValue::PublicKey(pk)) => write!(f, "{}", encode_public_key(pk)),
            Some(ContractParameterValue::String(s)) => write!(f, "{s}"),
            Some(ContractParameterValue::Array(items)) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Compressed SEC1 encoding of a public key.
pub(crate) fn compressed_point(key: &PublicKey) -> Vec<u8> {
    key.to_encoded_point(true).as_bytes().to_vec()
}

fn encode_public_key(key: &PublicKey) -> String {
    hex::encode(compressed_point(key))
}

fn decode_hex(kind: ContractParameterType, text: &str) -> ContractResult<Vec<u8>> {
    hex::decode(text.trim()).map_err(|e| ContractError::invalid_value(kind, e.to_string()))
}

fn parse_integer(text: &str) -> ContractResult<BigInt> {
    text.trim().parse::<BigInt>().map_err(|e| {
        ContractError::invalid_value(ContractParameterType::Integer, format!("{text:?}: {e}"))
    })
}

fn parse_public_key(text: &str) -> ContractResult<PublicKey> {
    let bytes = decode_hex(ContractParameterType::PublicKey, text)?;
    PublicKey::from_sec1_bytes(&bytes).map_err(|_| {
        ContractError::invalid_value(
            ContractParameterType::PublicKey,
            "not a point on secp256r1",
        )
    })
}

fn parse_array(json: &Value) -> ContractResult<Vec<ContractParameter>> {
    json.as_array()
        .ok_or_else(|| {
            ContractError::invalid_value(ContractParameterType::Array, "expected a JSON array")
        })?
        .iter()
        .map(ContractParameter::from_json)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC_KEY: &str = "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

    #[test]
    fn test_new_parameter_is_unset() {
        let parameter = ContractParameter::new(ContractParameterType::Integer);
        assert_eq!(parameter.value(), None);
        assert!(!parameter.is_complete());
        assert_eq!(parameter.to_string(), "(null)");
    }

    #[test]
    fn test_set_rejects_mismatched_kind() {
        let mut parameter = ContractParameter::new(ContractParameterType::Integer);
        let err = parameter
            .set(ContractParameterValue::Boolean(true))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::TypeMismatch {
                expected: ContractParameterType::Integer,
                actual: ContractParameterType::Boolean,
            }
        );
        assert!(parameter.value().is_none());
    }

    #[test]
    fn test_set_value_boolean_is_lenient() {
        let mut parameter = ContractParameter::new(ContractParameterType::Boolean);
        parameter.set_value("TRUE").unwrap();
        assert_eq!(parameter.value(), Some(&ContractParameterValue::Boolean(true)));
        parameter.set_value("yes").unwrap();
        assert_eq!(parameter.value(), Some(&ContractParameterValue::Boolean(false)));
    }

    #[test]
    fn test_set_value_integer() {
        let mut parameter = ContractParameter::new(ContractParameterType::Integer);
        parameter.set_value("-123456789012345678901234567890").unwrap();
        assert_eq!(parameter.to_string(), "-123456789012345678901234567890");
        assert!(parameter.set_value("12.5").is_err());
    }

    #[test]
    fn test_set_value_signature_requires_64_bytes() {
        let mut parameter = ContractParameter::new(ContractParameterType::Signature);
        assert!(parameter.set_value(&"ab".repeat(63)).is_err());
        parameter.set_value(&"ab".repeat(64)).unwrap();
        assert!(parameter.is_complete());
    }

    #[test]
    fn test_set_value_public_key() {
        let mut parameter = ContractParameter::new(ContractParameterType::PublicKey);
        parameter.set_value(PUBLIC_KEY).unwrap();
        assert_eq!(parameter.to_string(), PUBLIC_KEY);
        assert!(parameter.set_value("02ffff").is_err());
    }

    #[test]
    fn test_set_value_unsupported_kinds() {
        for kind in [
            ContractParameterType::InteropInterface,
            ContractParameterType::Void,
        ] {
            let mut parameter = ContractParameter::new(kind);
            assert_eq!(
                parameter.set_value("anything"),
                Err(ContractError::UnsupportedParameterType(kind))
            );
        }
    }

    #[test]
    fn test_set_value_array_from_json() {
        let mut parameter = ContractParameter::new(ContractParameterType::Array);
        parameter
            .set_value(r#"[{"type":"Integer","value":"7"},{"type":"String","value":"neo"}]"#)
            .unwrap();
        assert_eq!(parameter.to_string(), "[7, neo]");
    }

    #[test]
    fn test_find_incomplete_reports_nested_path() {
        let parameters = vec![
            ContractParameter::integer(1),
            ContractParameter::array(vec![
                ContractParameter::integer(2),
                ContractParameter::new(ContractParameterType::String),
            ]),
        ];
        assert_eq!(
            ContractParameter::find_incomplete(&parameters).as_deref(),
            Some("parameters[1][1]")
        );
        assert_eq!(ContractParameter::find_incomplete(&parameters[..1]), None);
    }

    #[test]
    fn test_normalize_integers_recurses() {
        let mut parameter = ContractParameter::array(vec![
            ContractParameter::integer(5),
            ContractParameter::array(vec![ContractParameter::integer(6)]),
        ]);
        parameter.normalize_integers();

        let expected = ContractParameter::array(vec![
            ContractParameter::integer(BigInt::from(5)),
            ContractParameter::array(vec![ContractParameter::integer(BigInt::from(6))]),
        ]);
        assert_eq!(parameter, expected);
    }

    #[test]
    fn test_json_form() {
        let parameter = ContractParameter::array(vec![
            ContractParameter::integer(42),
            ContractParameter::from_value(ContractParameterValue::ByteArray(vec![0xde, 0xad])),
            ContractParameter::new(ContractParameterType::Boolean),
        ]);
        let json = parameter.to_json();
        assert_eq!(
            json,
            json!({
                "type": "Array",
                "value": [
                    {"type": "Integer", "value": "42"},
                    {"type": "ByteArray", "value": "dead"},
                    {"type": "Boolean"}
                ]
            })
        );

        let parsed = ContractParameter::from_json(&json).unwrap();
        assert_eq!(parsed.to_json(), json);
    }

    #[test]
    fn test_from_json_accepts_numbers_and_bools() {
        let parsed = ContractParameter::from_json(&json!({"type": "Integer", "value": 9})).unwrap();
        assert_eq!(parsed, ContractParameter::integer(9));

        let parsed = ContractParameter::from_json(&json!({"type": "Boolean", "value": true})).unwrap();
        assert_eq!(parsed.value(), Some(&ContractParameterValue::Boolean(true)));

        assert!(ContractParameter::from_json(&json!({"type": "Integer", "value": [1]})).is_err());
        assert!(ContractParameter::from_json(&json!({"value": "1"})).is_err());
    }

    #[test]
    fn test_from_stack_item() {
        let item = StackItem::Struct(vec![
            StackItem::from_int(1),
            StackItem::Map(vec![(StackItem::from_bytes(b"k".to_vec()), StackItem::Boolean(true))]),
            StackItem::InteropInterface,
        ]);
        let parameter = ContractParameter::from(&item);

        assert_eq!(parameter.param_type(), ContractParameterType::Array);
        assert_eq!(
            parameter.to_json(),
            json!({
                "type": "Array",
                "value": [
                    {"type": "Integer", "value": "1"},
                    {"type": "Array", "value": [
                        {"type": "Array", "value": [
                            {"type": "ByteArray", "value": "6b"},
                            {"type": "Boolean", "value": true}
                        ]}
                    ]},
                    {"type": "InteropInterface"}
                ]
            })
        );
    }

    #[test]
    fn test_to_stack_item() {
        let mut key = ContractParameter::new(ContractParameterType::PublicKey);
        key.set_value(PUBLIC_KEY).unwrap();
        let parameter = ContractParameter::array(vec![
            ContractParameter::integer(3),
            ContractParameter::from_value(ContractParameterValue::String("hi".into())),
            key,
        ]);

        let item = parameter.to_stack_item().unwrap();
        let StackItem::Array(items) = item else {
            panic!("expected array");
        };
        assert_eq!(items[0], StackItem::from_int(3));
        assert_eq!(items[1], StackItem::from_bytes(b"hi".to_vec()));
        assert_eq!(items[2], StackItem::from_bytes(hex::decode(PUBLIC_KEY).unwrap()));

        let unset = ContractParameter::new(ContractParameterType::Hash160);
        assert!(unset.to_stack_item().is_err());
    }
}
