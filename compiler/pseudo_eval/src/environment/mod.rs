//! Variable scoping for the interpreter.
//!
//! One global scope lives for a whole run. Each routine call pushes a scope
//! whose parent is the routine's defining scope, and pops it on return.
//! There are no block scopes: `if`, `while` and `for` bodies write into the
//! scope that is current when they run.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use crate::value::Value;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through [`LocalScope::new`]. The wrapper uses
/// `Rc`, so scopes (and anything holding one) are `!Send`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// A non-owning handle to the same scope.
    #[inline]
    pub fn downgrade(&self) -> WeakScope<T> {
        WeakScope(Rc::downgrade(&self.0))
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Weak counterpart of [`LocalScope`], held by function values.
pub struct WeakScope<T>(Weak<RefCell<T>>);

impl<T> WeakScope<T> {
    #[inline]
    pub fn upgrade(&self) -> Option<LocalScope<T>> {
        self.0.upgrade().map(LocalScope)
    }
}

impl<T> Clone for WeakScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        WeakScope(Weak::clone(&self.0))
    }
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look a name up here, then in each parent.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    /// Overwrite the nearest existing binding of `name`.
    ///
    /// Hands the value back when no scope in the chain binds the name.
    pub fn assign_existing(&mut self, name: &str, value: Value) -> Result<(), Value> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign_existing(name, value),
            None => Err(value),
        }
    }

    /// Bindings of this scope only, in no particular order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Every name visible from this scope, innermost first.
    pub fn visible_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bindings.keys().cloned().collect();
        if let Some(parent) = &self.parent {
            for name in parent.borrow().visible_names() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

/// Scope stack for one run.
pub struct Environment {
    /// Call scopes, innermost last. Empty while running top-level code.
    scopes: Vec<LocalScope<Scope>>,
    global: LocalScope<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scopes: Vec::new(),
            global: LocalScope::new(Scope::new()),
        }
    }

    /// Number of active call scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    fn current(&self) -> &LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global)
    }

    pub fn global(&self) -> &LocalScope<Scope> {
        &self.global
    }

    /// Enter a call: push a scope whose parent is `parent`.
    pub fn push_call_scope(&mut self, parent: LocalScope<Scope>) -> &LocalScope<Scope> {
        self.scopes.push(LocalScope::new(Scope::with_parent(parent)));
        self.current()
    }

    pub fn pop_call_scope(&mut self) {
        self.scopes.pop();
    }

    /// Bind `name` in the current scope.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.current().borrow_mut().define(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.current().borrow().lookup(name)
    }

    /// Write `name`: update the nearest binding, or create one in the
    /// current scope if the name is unbound.
    pub fn assign(&mut self, name: &str, value: Value) {
        let current = self.current();
        let unbound = current.borrow_mut().assign_existing(name, value);
        if let Err(value) = unbound {
            current.borrow_mut().define(name, value);
        }
    }

    pub fn visible_names(&self) -> Vec<String> {
        self.current().borrow().visible_names()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
