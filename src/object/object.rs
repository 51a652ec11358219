use std::{
    any::Any,
    fmt::{self, Debug, Display},
    rc::Rc,
};

use super::values::HashKey;

/// Object Types
///
/// The type tag every runtime value reports.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ObjectType {
    Integer,
    Boolean,
    String,
    Null,
    ReturnValue,
    Error,
    Function,
    Array,
    Hash,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::String => "STRING",
            ObjectType::Null => "NULL",
            ObjectType::ReturnValue => "RETURN_VALUE",
            ObjectType::Error => "ERROR",
            ObjectType::Function => "FUNCTION",
            ObjectType::Array => "ARRAY",
            ObjectType::Hash => "HASH",
        }
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Object Trait
///
/// The contract of every runtime value. Values are immutable once built;
/// composite values hold their parts behind shared `ObjectWrapper`s.
pub trait Object: Debug {
    /// Returns the type tag of the value.
    fn get_type(&self) -> ObjectType;
    /// Returns the user-facing rendering of the value.
    fn inspect(&self) -> String;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Returns the key this value has when used in a hash, if it can be one.
    fn hash_key(&self) -> Option<HashKey> {
        None
    }
}

/// Object Wrapper
///
/// A shared handle to any value. Cloning shares the value.
#[derive(Debug, Clone)]
pub struct ObjectWrapper(Rc<dyn Object>);

impl ObjectWrapper {
    pub fn new<T: Object + 'static>(object: T) -> Self {
        ObjectWrapper(Rc::new(object))
    }

    /// Returns the concrete value if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Whether both handles point at the same value.
    pub fn ptr_eq(&self, other: &ObjectWrapper) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Object for ObjectWrapper {
    fn get_type(&self) -> ObjectType {
        self.0.get_type()
    }
    fn inspect(&self) -> String {
        self.0.inspect()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn hash_key(&self) -> Option<HashKey> {
        self.0.hash_key()
    }
}

impl Display for ObjectWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inspect())
    }
}
