//! Method visibility tracking during a walk.

use std::fmt;

/// Ruby method visibility.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Visibility {
    /// Callable from anywhere.
    Public,
    /// Callable from instances of the class and its subclasses.
    Protected,
    /// Callable only without an explicit receiver.
    Private,
}

impl Visibility {
    /// Returns the visibility selected by a bare modifier call.
    pub fn from_modifier(name: &str) -> Option<Self> {
        match name {
            "public" => Some(Visibility::Public),
            "protected" => Some(Visibility::Protected),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    /// Returns `true` for [`Visibility::Public`].
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }

    /// Returns the modifier name.
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The visibility in effect at each open scope of a walk.
///
/// The bottom entry is the file's top level and is never popped. Entering a
/// class, module, or singleton class pushes a fresh public scope, so a
/// `private` in one class body does not leak into the next.
#[derive(Clone, Debug)]
pub struct VisibilityState {
    scopes: Vec<Visibility>,
}

impl VisibilityState {
    /// Creates a state with only the top-level scope, which is public.
    pub fn new() -> Self {
        Self {
            scopes: vec![Visibility::Public],
        }
    }

    /// Returns the visibility of the innermost scope.
    pub fn current(&self) -> Visibility {
        self.scopes.last().copied().unwrap_or(Visibility::Public)
    }

    /// Changes the visibility of the innermost scope.
    pub fn set(&mut self, visibility: Visibility) {
        if let Some(top) = self.scopes.last_mut() {
            *top = visibility;
        }
    }

    /// Opens a new public scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(Visibility::Public);
    }

    /// Closes the innermost scope. The top-level scope stays.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_public() {
        let state = VisibilityState::new();
        assert_eq!(state.current(), Visibility::Public);
    }

    #[test]
    fn scopes_restore_outer_visibility() {
        let mut state = VisibilityState::new();
        state.set(Visibility::Private);
        state.push_scope();
        assert_eq!(state.current(), Visibility::Public);
        state.set(Visibility::Protected);
        state.pop_scope();
        assert_eq!(state.current(), Visibility::Private);
    }

    #[test]
    fn top_level_is_never_popped() {
        let mut state = VisibilityState::new();
        state.set(Visibility::Private);
        state.pop_scope();
        state.pop_scope();
        assert_eq!(state.current(), Visibility::Private);
    }

    #[test]
    fn modifier_names() {
        assert_eq!(Visibility::from_modifier("private"), Some(Visibility::Private));
        assert_eq!(Visibility::from_modifier("protected"), Some(Visibility::Protected));
        assert_eq!(Visibility::from_modifier("public"), Some(Visibility::Public));
        assert_eq!(Visibility::from_modifier("module_function"), None);
        assert!(!Visibility::Protected.is_public());
        assert_eq!(Visibility::Private.to_string(), "private");
    }
}
