//! Stack item implementation for the Neo Virtual Machine.
//!
//! These are the values an engine leaves on its evaluation stack after a dry
//! run. They are reported back to the caller for display and audit only.

use num_bigint::BigInt;
use std::fmt;

/// The type tag of a stack item.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackItemType {
    /// Byte array.
    ByteArray = 0x00,
    /// Boolean.
    Boolean = 0x01,
    /// Integer.
    Integer = 0x02,
    /// Interop interface handle.
    InteropInterface = 0x40,
    /// Array.
    Array = 0x80,
    /// Struct (value-copied array).
    Struct = 0x81,
    /// Map.
    Map = 0x82,
}

impl fmt::Display for StackItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Represents a value in the Neo VM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackItem {
    /// Represents an immutable byte string.
    ByteArray(Vec<u8>),

    /// Represents a boolean value.
    Boolean(bool),

    /// Represents an integer value.
    Integer(BigInt),

    /// Represents an opaque engine-side object; it has no serializable value.
    InteropInterface,

    /// Represents an array of stack items.
    Array(Vec<StackItem>),

    /// Represents a struct of stack items.
    Struct(Vec<StackItem>),

    /// Represents a map of stack items, in insertion order.
    Map(Vec<(StackItem, StackItem)>),
}

impl StackItem {
    /// Creates an integer stack item.
    pub fn from_int<T: Into<BigInt>>(value: T) -> Self {
        StackItem::Integer(value.into())
    }

    /// Creates a byte array stack item.
    pub fn from_bytes(value: impl Into<Vec<u8>>) -> Self {
        StackItem::ByteArray(value.into())
    }

    /// Gets the type tag of this item.
    pub fn item_type(&self) -> StackItemType {
        match self {
            StackItem::ByteArray(_) => StackItemType::ByteArray,
            StackItem::Boolean(_) => StackItemType::Boolean,
            StackItem::Integer(_) => StackItemType::Integer,
            StackItem::InteropInterface => StackItemType::InteropInterface,
            StackItem::Array(_) => StackItemType::Array,
            StackItem::Struct(_) => StackItemType::Struct,
            StackItem::Map(_) => StackItemType::Map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type() {
        assert_eq!(StackItem::from_int(5).item_type(), StackItemType::Integer);
        assert_eq!(StackItem::from_bytes(vec![1]).item_type(), StackItemType::ByteArray);
        assert_eq!(StackItem::Struct(vec![]).item_type(), StackItemType::Struct);
        assert_eq!(StackItemType::Map.to_string(), "Map");
    }
}
