use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

// --- Reflected Objects ---

/// A duck-typed bag of named members, standing in for another extension's
/// runtime type. Members are owned by the publishing extension and may be
/// replaced at any time; readers get typed snapshots through `member` and
/// must treat every lookup as fallible.
pub struct ReflectedObject {
    full_name: String,
    members: RwLock<HashMap<String, Arc<dyn Any + Send + Sync>>>,
}

impl ReflectedObject {
    pub fn new(full_name: &str) -> Self {
        ReflectedObject {
            full_name: full_name.to_string(),
            members: RwLock::new(HashMap::new()),
        }
    }

    /// Fully-qualified name the object is registered under.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Publishes or replaces a member value.
    pub fn set_member<T: Any + Send + Sync>(&self, name: &str, value: T) {
        if let Ok(mut members) = self.members.write() {
            members.insert(name.to_string(), Arc::new(value));
        }
    }

    /// Removes a member, as if the publishing extension stopped exposing it.
    pub fn clear_member(&self, name: &str) {
        if let Ok(mut members) = self.members.write() {
            members.remove(name);
        }
    }

    /// Looks a member up by name and downcasts it. Absent members, wrong
    /// types, and a poisoned lock all come back as `None`.
    pub fn member<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        let members = self.members.read().ok()?;
        let value = members.get(name)?.clone();
        value.downcast::<T>().ok()
    }
}

// --- Extension Registry ---

/// The host's registry of loaded optional extensions: presence is queryable
/// by well-known identifier, and extension types are reachable by
/// fully-qualified name the way a reflection scan would find them.
#[derive(Default)]
pub struct ExtensionRegistry {
    loaded: HashSet<String>,
    types: HashMap<String, Arc<ReflectedObject>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        ExtensionRegistry::default()
    }

    pub fn register_extension(&mut self, id: &str) {
        self.loaded.insert(id.to_string());
    }

    pub fn is_loaded(&self, id: &str) -> bool {
        self.loaded.contains(id)
    }

    pub fn register_type(&mut self, object: Arc<ReflectedObject>) {
        self.types.insert(object.full_name().to_string(), object);
    }

    pub fn find_type(&self, full_name: &str) -> Option<Arc<ReflectedObject>> {
        self.types.get(full_name).cloned()
    }
}
