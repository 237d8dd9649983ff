//! Named guard profiles
//!
//! A profile is a reusable validation recipe registered once under a
//! symbolic name and a value type, then invoked by name from any call site.
//! Lookups dispatch on both the name and the value's type; a miss on either
//! is a configuration error ([`ProfileError::NotFound`]), never a
//! data-validation failure.
//!
//! The registry is safe for concurrent registration and lookup. The last
//! registration for a given (name, type) key wins.

use std::any::{Any, TypeId, type_name};
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::core::error::{GuardResult, ProfileError};

/// The stored shape of a recipe for values of type `T`.
type Recipe<T> = Arc<dyn Fn(&T, &str) -> GuardResult<()> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ProfileKey {
    name: String,
    type_id: TypeId,
}

impl ProfileKey {
    fn of<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id: TypeId::of::<T>(),
        }
    }
}

struct StoredProfile {
    recipe: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

/// A concurrent map of named validation recipes, keyed by (name, value type).
///
/// # Examples
///
/// ```
/// use orion_guard::core::chain::{chain_of, ChainExt, StrChainExt};
/// use orion_guard::registry::ProfileRegistry;
///
/// let registry = ProfileRegistry::new();
/// registry.register::<str>("SafeUsername", |value, parameter| {
///     chain_of(value, parameter)
///         .not_empty()
///         .length(3, 20)
///         .alphanumeric()
///         .finish()
/// });
///
/// assert!(registry.execute("SafeUsername", "ada42", "username").is_ok());
/// assert!(registry.execute("SafeUsername", "a", "username").is_err());
/// ```
#[derive(Default)]
pub struct ProfileRegistry {
    profiles: DashMap<ProfileKey, StoredProfile>,
}

impl ProfileRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a recipe under `name` for values of type `T`, overwriting any
    /// previous recipe for the same (name, type) key.
    ///
    /// The recipe is visible to every caller from the moment this returns.
    pub fn register<T: ?Sized + 'static>(
        &self,
        name: impl Into<String>,
        recipe: impl Fn(&T, &str) -> GuardResult<()> + Send + Sync + 'static,
    ) {
        let name = name.into();
        let key = ProfileKey::of::<T>(name.clone());
        let stored = StoredProfile {
            recipe: Box::new(Arc::new(recipe) as Recipe<T>),
            type_name: type_name::<T>(),
        };
        let replaced = self.profiles.insert(key, stored).is_some();
        debug!(
            profile = %name,
            value_type = type_name::<T>(),
            replaced,
            "registered guard profile"
        );
    }

    /// Looks up the recipe for `name` and the type of `value`, then runs it.
    ///
    /// A miss (unregistered name, or a recipe stored for a different value
    /// type) is [`ProfileError::NotFound`]. A hit runs the recipe; its guard
    /// failure, if any, surfaces as [`ProfileError::Guard`].
    pub fn execute<T: ?Sized + 'static>(
        &self,
        name: &str,
        value: &T,
        parameter: &str,
    ) -> Result<(), ProfileError> {
        let key = ProfileKey::of::<T>(name);
        // Clone the recipe out so no map shard is held while user code runs;
        // a recipe may itself register or execute profiles.
        let recipe: Option<Recipe<T>> = self
            .profiles
            .get(&key)
            .and_then(|entry| entry.recipe.downcast_ref::<Recipe<T>>().cloned());

        match recipe {
            Some(recipe) => {
                trace!(profile = %name, parameter, "executing guard profile");
                recipe.as_ref()(value, parameter)?;
                Ok(())
            }
            None => Err(ProfileError::NotFound {
                name: name.to_owned(),
                type_name: type_name::<T>(),
            }),
        }
    }

    /// Whether a recipe is registered under `name` for values of type `T`.
    pub fn contains<T: ?Sized + 'static>(&self, name: &str) -> bool {
        self.profiles.contains_key(&ProfileKey::of::<T>(name))
    }

    /// Removes the recipe for (name, `T`). Returns whether one was present.
    pub fn remove<T: ?Sized + 'static>(&self, name: &str) -> bool {
        self.profiles.remove(&ProfileKey::of::<T>(name)).is_some()
    }

    /// Removes every registered recipe.
    pub fn clear(&self) {
        self.profiles.clear();
    }

    /// Number of registered recipes.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no recipes are registered.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Names and value types of every registered recipe, unordered.
    pub fn profile_names(&self) -> Vec<(String, &'static str)> {
        self.profiles
            .iter()
            .map(|entry| (entry.key().name.clone(), entry.value().type_name))
            .collect()
    }
}

impl std::fmt::Debug for ProfileRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileRegistry")
            .field("profiles", &self.profiles.len())
            .finish()
    }
}

// ============================================================================
// PROCESS-WIDE REGISTRY
// ============================================================================

static GLOBAL: LazyLock<ProfileRegistry> = LazyLock::new(ProfileRegistry::new);

/// The process-wide registry shared by [`register`] and [`execute`].
pub fn global() -> &'static ProfileRegistry {
    &GLOBAL
}

/// Registers a recipe on the process-wide registry.
pub fn register<T: ?Sized + 'static>(
    name: impl Into<String>,
    recipe: impl Fn(&T, &str) -> GuardResult<()> + Send + Sync + 'static,
) {
    global().register(name, recipe);
}

/// Executes a recipe from the process-wide registry.
pub fn execute<T: ?Sized + 'static>(
    name: &str,
    value: &T,
    parameter: &str,
) -> Result<(), ProfileError> {
    global().execute(name, value, parameter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chain::{ChainExt, StrChainExt, chain_of};
    use crate::core::error::{GuardError, GuardErrorKind};
    use crate::guards::numeric;
    use pretty_assertions::assert_eq;

    fn safe_username(value: &str, parameter: &str) -> GuardResult<()> {
        chain_of(value, parameter)
            .not_empty()
            .length(3, 20)
            .alphanumeric()
            .finish()
    }

    #[test]
    fn test_round_trip() {
        let registry = ProfileRegistry::new();
        registry.register::<str>("SafeUsername", safe_username);

        assert!(registry.execute("SafeUsername", "ada42", "username").is_ok());

        let failure = registry
            .execute("SafeUsername", "a", "username")
            .unwrap_err();
        match failure {
            ProfileError::Guard(error) => {
                assert_eq!(error.kind(), &GuardErrorKind::OutOfRange);
                assert_eq!(error.parameter(), "username");
            }
            ProfileError::NotFound { .. } => panic!("expected a guard failure"),
        }
    }

    #[test]
    fn test_unregistered_name_is_a_configuration_error() {
        let registry = ProfileRegistry::new();
        let error = registry
            .execute("Unregistered", "value", "p")
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_type_mismatch_is_a_configuration_error() {
        let registry = ProfileRegistry::new();
        registry.register::<str>("Positive", |_, _| Ok(()));

        // Same name, different value type: the lookup misses.
        let error = registry.execute("Positive", &42_i64, "p").unwrap_err();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = ProfileRegistry::new();
        registry.register::<i64>("Limit", |value, parameter| {
            numeric::at_most(*value, 10, parameter)
        });
        registry.register::<i64>("Limit", |value, parameter| {
            numeric::at_most(*value, 100, parameter)
        });

        assert_eq!(registry.len(), 1);
        assert!(registry.execute("Limit", &50_i64, "p").is_ok());
    }

    #[test]
    fn test_remove_and_clear() {
        let registry = ProfileRegistry::new();
        registry.register::<str>("A", |_, _| Ok(()));
        registry.register::<i64>("B", |_, _| Ok(()));

        assert!(registry.contains::<str>("A"));
        assert!(registry.remove::<str>("A"));
        assert!(!registry.remove::<str>("A"));
        assert!(!registry.contains::<str>("A"));

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_recipes_can_fail_with_custom_errors() {
        let registry = ProfileRegistry::new();
        registry.register::<i64>("NeverValid", |_, parameter| {
            Err(GuardError::custom(
                "never",
                parameter,
                format!("`{parameter}` is never valid"),
            ))
        });

        let error = registry.execute("NeverValid", &1_i64, "p").unwrap_err();
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_concurrent_registration_and_lookup() {
        let registry = ProfileRegistry::new();
        registry.register::<i64>("Shared", |value, parameter| {
            numeric::not_negative(*value, parameter)
        });

        std::thread::scope(|scope| {
            for i in 0..4 {
                let registry = &registry;
                scope.spawn(move || {
                    for _ in 0..100 {
                        registry.register::<i64>(format!("Writer{i}"), |_, _| Ok(()));
                        assert!(registry.execute("Shared", &1_i64, "p").is_ok());
                    }
                });
            }
        });

        assert_eq!(registry.len(), 5);
    }
}
