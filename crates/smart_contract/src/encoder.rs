//! Call-script encoding.
//!
//! A call script pushes the arguments last-to-first, so the callee pops the
//! first declared argument first, and ends with `APPCALL <script hash>`.

use crate::contract_parameter::{compressed_point, ContractParameter, ContractParameterValue};
use crate::error::{ContractError, ContractResult};
use neo_invoke_core::UInt160;
use neo_invoke_vm::{Script, ScriptBuilder};
use tracing::{debug, trace};

/// Turns a contract hash and its arguments into a call script.
pub struct ScriptEncoder;

impl ScriptEncoder {
    /// Encodes a call to `script_hash` with `parameters` in declared order.
    ///
    /// Nothing is emitted unless every parameter, nested ones included, has a
    /// value of an encodable kind. Integers are normalized first, so a narrow
    /// and a wide integer of equal value produce the same bytes.
    pub fn encode(script_hash: &UInt160, parameters: &[ContractParameter]) -> ContractResult<Script> {
        Self::validate(parameters)?;

        let mut normalized = parameters.to_vec();
        normalized
            .iter_mut()
            .for_each(ContractParameter::normalize_integers);

        let mut builder = ScriptBuilder::new();
        for parameter in normalized.iter().rev() {
            Self::emit_parameter(&mut builder, parameter)?;
        }
        builder.emit_app_call(script_hash);

        let script = builder.into_script();
        debug!(contract = %script_hash, arguments = parameters.len(), size = script.len(), "encoded call script");
        trace!(script = %script, "call script bytes");
        Ok(script)
    }

    /// Checks kinds and completeness without emitting anything.
    pub fn validate(parameters: &[ContractParameter]) -> ContractResult<()> {
        fn check_kinds(parameters: &[ContractParameter]) -> ContractResult<()> {
            for parameter in parameters {
                if !parameter.param_type().is_encodable() {
                    return Err(ContractError::UnsupportedParameterType(parameter.param_type()));
                }
                if let Some(ContractParameterValue::Array(items)) = parameter.value() {
                    check_kinds(items)?;
                }
            }
            Ok(())
        }

        check_kinds(parameters)?;
        match ContractParameter::find_incomplete(parameters) {
            Some(path) => Err(ContractError::IncompleteParameters { path }),
            None => Ok(()),
        }
    }

    fn emit_parameter(builder: &mut ScriptBuilder, parameter: &ContractParameter) -> ContractResult<()> {
        let value = parameter
            .value()
            .ok_or_else(|| ContractError::IncompleteParameters {
                path: parameter.param_type().to_string(),
            })?;

        match value {
            ContractParameterValue::Signature(bytes) | ContractParameterValue::ByteArray(bytes) => {
                builder.emit_push(bytes);
            }
            ContractParameterValue::Boolean(b) => {
                builder.emit_push_bool(*b);
            }
            ContractParameterValue::Integer(i) => {
                builder.emit_push_bigint(&i.to_bigint());
            }
            ContractParameterValue::Hash160(h) => {
                builder.emit_push(h.as_bytes());
            }
            ContractParameterValue::Hash256(h) => {
                builder.emit_push(h.as_bytes());
            }
            ContractParameterValue::PublicKey(pk) => {
                builder.emit_push(&compressed_point(pk));
            }
            ContractParameterValue::String(s) => {
                builder.emit_push_string(s);
            }
            ContractParameterValue::Array(items) => {
                for item in items.iter().rev() {
                    Self::emit_parameter(builder, item)?;
                }
                builder.emit_push_int(items.len() as i64);
                builder.emit_pack();
            }
        }

        Ok(())
    }
}
