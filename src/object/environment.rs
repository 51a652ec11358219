use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use super::object::ObjectWrapper;

/// Name bindings of one scope, chained to the scope it is nested in.
#[derive(Default)]
pub struct Environment {
    store: HashMap<String, ObjectWrapper>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Creates a scope nested inside `outer`, as for a function call.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Self {
        Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    /// Resolves a name in this scope, then in the enclosing ones.
    pub fn get(&self, name: &str) -> Option<ObjectWrapper> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this scope, shadowing any outer binding.
    pub fn set(&mut self, name: impl Into<String>, value: ObjectWrapper) -> ObjectWrapper {
        self.store.insert(name.into(), value.clone());
        value
    }
}

// Bound values may capture this scope, so only names are shown.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.store.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("enclosed", &self.outer.is_some())
            .finish()
    }
}
