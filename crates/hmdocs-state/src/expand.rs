//! Folder expand/collapse state.

use crate::StateStore;

/// Key under which a folder's expand state is stored.
#[must_use]
pub fn state_key(folder_id: &str) -> String {
    format!("sidebar-{folder_id}")
}

/// Expand state of a sidebar folder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandState {
    /// Children are rendered.
    Expanded,
    /// Children are omitted from the output.
    Collapsed,
}

impl ExpandState {
    /// Read the persisted state of `folder_id`.
    ///
    /// Folders with no stored value, or a value that is not a JSON boolean,
    /// start expanded.
    #[must_use]
    pub fn load(store: &dyn StateStore, folder_id: &str) -> Self {
        Self::load_or(store, folder_id, Self::Expanded)
    }

    /// Read the persisted state of `folder_id`, falling back to `default`.
    #[must_use]
    pub fn load_or(store: &dyn StateStore, folder_id: &str, default: Self) -> Self {
        let key = state_key(folder_id);
        let Some(raw) = store.get(&key) else {
            return default;
        };

        match serde_json::from_str::<bool>(&raw) {
            Ok(open) => Self::from(open),
            Err(e) => {
                tracing::debug!(key = %key, raw = %raw, "ignoring unreadable expand state: {e}");
                default
            }
        }
    }

    /// Flip the persisted state of `folder_id` and return the new state.
    ///
    /// The new value is written immediately; there is no rollback.
    #[must_use]
    pub fn toggle(store: &dyn StateStore, folder_id: &str) -> Self {
        Self::toggle_or(store, folder_id, Self::Expanded)
    }

    /// Flip the state of `folder_id`, starting from `default` when nothing
    /// is stored yet.
    #[must_use]
    pub fn toggle_or(store: &dyn StateStore, folder_id: &str, default: Self) -> Self {
        let next = Self::load_or(store, folder_id, default).flipped();
        next.save(store, folder_id);
        next
    }

    /// Persist this state for `folder_id`.
    pub fn save(self, store: &dyn StateStore, folder_id: &str) {
        store.set(&state_key(folder_id), &self.is_expanded().to_string());
    }

    /// The opposite state.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    /// True if children should be rendered.
    #[must_use]
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

impl From<bool> for ExpandState {
    fn from(open: bool) -> Self {
        if open { Self::Expanded } else { Self::Collapsed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, NullStore};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_state_key_format() {
        assert_eq!(state_key("guides"), "sidebar-guides");
        assert_eq!(state_key("root:api/v2"), "sidebar-root:api/v2");
    }

    #[test]
    fn test_default_is_expanded() {
        let store = MemoryStore::new();
        assert_eq!(ExpandState::load(&store, "guides"), ExpandState::Expanded);
    }

    #[test]
    fn test_toggle_persists_opposite_boolean() {
        let store = MemoryStore::new();

        let state = ExpandState::toggle(&store, "guides");

        assert_eq!(state, ExpandState::Collapsed);
        assert_eq!(store.get("sidebar-guides").as_deref(), Some("false"));
    }

    #[test]
    fn test_reload_restores_persisted_value() {
        let store = MemoryStore::new();
        let _ = ExpandState::toggle(&store, "guides");

        assert_eq!(ExpandState::load(&store, "guides"), ExpandState::Collapsed);

        let _ = ExpandState::toggle(&store, "guides");
        assert_eq!(ExpandState::load(&store, "guides"), ExpandState::Expanded);
        assert_eq!(store.get("sidebar-guides").as_deref(), Some("true"));
    }

    #[test]
    fn test_toggle_only_touches_own_key() {
        let store = MemoryStore::new().with_entry("sidebar-other", "false");

        let _ = ExpandState::toggle(&store, "guides");

        assert_eq!(store.get("sidebar-other").as_deref(), Some("false"));
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn test_unreadable_value_falls_back_to_default() {
        let store = MemoryStore::new().with_entry("sidebar-guides", "maybe");
        assert_eq!(ExpandState::load(&store, "guides"), ExpandState::Expanded);
    }

    #[test]
    fn test_load_or_uses_supplied_default() {
        let store = MemoryStore::new();
        assert_eq!(
            ExpandState::load_or(&store, "guides", ExpandState::Collapsed),
            ExpandState::Collapsed
        );

        let store = store.with_entry("sidebar-guides", "true");
        assert_eq!(
            ExpandState::load_or(&store, "guides", ExpandState::Collapsed),
            ExpandState::Expanded
        );
    }

    #[test]
    fn test_toggle_or_flips_collapsed_default() {
        let store = MemoryStore::new();

        let state = ExpandState::toggle_or(&store, "closed", ExpandState::Collapsed);

        assert_eq!(state, ExpandState::Expanded);
        assert_eq!(store.get("sidebar-closed").as_deref(), Some("true"));
        assert_eq!(
            ExpandState::toggle_or(&store, "closed", ExpandState::Collapsed),
            ExpandState::Collapsed
        );
    }

    #[test]
    fn test_null_store_never_remembers() {
        let store = NullStore;

        assert_eq!(ExpandState::toggle(&store, "guides"), ExpandState::Collapsed);
        // Nothing was persisted, so the next render starts expanded again.
        assert_eq!(ExpandState::load(&store, "guides"), ExpandState::Expanded);
    }
}
