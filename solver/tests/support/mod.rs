use std::collections::HashSet;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Solver environment variables cleared by [`with_solver_env`].
pub const SOLVER_ENV_VARS: [&str; 3] = [
    "DOUBLE_STAR_MAX_ITERATIONS",
    "DOUBLE_STAR_TOLERANCE",
    "DOUBLE_STAR_OBSERVED_ARC",
];

/// Runs `f` while the `DOUBLE_STAR_*` overrides read by
/// `SolverConfig::with_env_overrides` hold the given values.
///
/// Each `(key, value)` pair sets `key` to `value`, or unsets it for `None`.
/// Tests touching the environment are serialized through `ENV_LOCK`; the
/// previous values come back when `f` returns or panics.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::apply(changes);
    f()
}

/// Like [`with_scoped_env`], but every solver variable not named in
/// `changes` is removed first.
pub fn with_solver_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let mut all: Vec<(&str, Option<&str>)> = SOLVER_ENV_VARS
        .iter()
        .filter(|k| !changes.iter().any(|(c, _)| c == *k))
        .map(|k| (*k, None))
        .collect();
    all.extend_from_slice(changes);
    with_scoped_env(&all, f)
}

/// Saved values of the overridden variables, put back on drop.
struct EnvRestore {
    saved: Vec<(String, Option<String>)>,
}

impl EnvRestore {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let saved = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();
        for (key, value) in changes {
            set_or_unset(key, *value);
        }
        Self { saved }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            set_or_unset(&key, value.as_deref());
        }
    }
}

fn set_or_unset(key: &str, value: Option<&str>) {
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
}
