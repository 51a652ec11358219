//! Runtime value variants.
//!
//! Scalars, the control values an evaluator threads through (return
//! values and errors), functions with their captured scope, and the
//! composite array and hash values.

use std::{
    any::Any,
    cell::RefCell,
    collections::BTreeMap,
    fmt::{self, Debug},
    rc::Rc,
};

use crate::ast::{ast::join, expressions::Identifier, statements::BlockStmt};

use super::{
    environment::Environment,
    object::{Object, ObjectType, ObjectWrapper},
};

/// Key of a hash entry. Keys of different types never compare equal.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Integer {
    pub value: i64,
}

impl Object for Integer {
    fn get_type(&self) -> ObjectType {
        ObjectType::Integer
    }
    fn inspect(&self) -> String {
        self.value.to_string()
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn hash_key(&self) -> Option<HashKey> {
        Some(HashKey::Integer(self.value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub value: bool,
}

impl Object for Boolean {
    fn get_type(&self) -> ObjectType {
        ObjectType::Boolean
    }
    fn inspect(&self) -> String {
        self.value.to_string()
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn hash_key(&self) -> Option<HashKey> {
        Some(HashKey::Boolean(self.value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringObj {
    pub value: String,
}

impl Object for StringObj {
    fn get_type(&self) -> ObjectType {
        ObjectType::String
    }
    fn inspect(&self) -> String {
        self.value.clone()
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn hash_key(&self) -> Option<HashKey> {
        Some(HashKey::String(self.value.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Null;

impl Object for Null {
    fn get_type(&self) -> ObjectType {
        ObjectType::Null
    }
    fn inspect(&self) -> String {
        String::from("null")
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value on its way out of a function body.
#[derive(Debug, Clone)]
pub struct ReturnValue {
    pub value: ObjectWrapper,
}

impl Object for ReturnValue {
    fn get_type(&self) -> ObjectType {
        ObjectType::ReturnValue
    }
    fn inspect(&self) -> String {
        self.value.inspect()
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A runtime error raised by evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorObj {
    pub message: String,
}

impl Object for ErrorObj {
    fn get_type(&self) -> ObjectType {
        ObjectType::Error
    }
    fn inspect(&self) -> String {
        format!("ERROR: {}", self.message)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A function value: parameters, body and the scope it closes over.
#[derive(Clone)]
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
    pub env: Rc<RefCell<Environment>>,
}

// The captured scope may contain this function, so it is left out.
impl Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl Object for Function {
    fn get_type(&self) -> ObjectType {
        ObjectType::Function
    }
    fn inspect(&self) -> String {
        format!("fn({}) {{\n{}\n}}", join(&self.parameters), self.body)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone)]
pub struct Array {
    pub elements: Vec<ObjectWrapper>,
}

impl Object for Array {
    fn get_type(&self) -> ObjectType {
        ObjectType::Array
    }
    fn inspect(&self) -> String {
        format!("[{}]", join(&self.elements))
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone)]
pub struct HashPair {
    pub key: ObjectWrapper,
    pub value: ObjectWrapper,
}

#[derive(Debug, Clone, Default)]
pub struct Hash {
    pairs: BTreeMap<HashKey, HashPair>,
}

impl Hash {
    /// Builds a hash from key/value pairs. A later pair with an equal key
    /// replaces an earlier one.
    ///
    /// # Returns
    ///
    /// The type of the first key that cannot be hashed, if any.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (ObjectWrapper, ObjectWrapper)>,
    ) -> Result<Self, ObjectType> {
        let mut map = BTreeMap::new();

        for (key, value) in pairs {
            let hash_key = key.hash_key().ok_or(key.get_type())?;
            map.insert(hash_key, HashPair { key, value });
        }

        Ok(Hash { pairs: map })
    }

    /// Looks up the value stored under `key`.
    pub fn get(&self, key: &ObjectWrapper) -> Option<&ObjectWrapper> {
        let hash_key = key.hash_key()?;
        self.pairs.get(&hash_key).map(|pair| &pair.value)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &HashPair> {
        self.pairs.values()
    }
}

impl Object for Hash {
    fn get_type(&self) -> ObjectType {
        ObjectType::Hash
    }
    fn inspect(&self) -> String {
        let pairs = self
            .iter()
            .map(|pair| format!("{}: {}", pair.key.inspect(), pair.value.inspect()))
            .collect::<Vec<_>>();
        format!("{{{}}}", pairs.join(", "))
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
