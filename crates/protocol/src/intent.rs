//! Activation intents routed back into the host app.
//!
//! Tapping the widget reopens the host app's main entry surface. A tap on a
//! specific row carries that row's item id under [`ITEM_ID`]; a tap on the
//! container or the empty-state area carries no extras.
//!
//! On the list engine rows do not build complete intents. Each row holds a
//! [`FillIn`] that gets merged into the list's template intent when tapped,
//! mirroring how collection widgets share one pending intent across rows.

use std::collections::BTreeMap;
use std::fmt;

/// Extra key carrying the activated item's id.
pub const ITEM_ID: &str = "ITEM_ID";

/// Default name of the host app's main entry surface.
pub const DEFAULT_ENTRY_SURFACE: &str = "main";

/// An immutable command that reopens the host app.
///
/// Intents are plain values: the same intent can be fired any number of
/// times and cloned freely.
///
/// # Examples
///
/// ```
/// use widget_protocol::{ClickRouter, ITEM_ID};
///
/// let router = ClickRouter::new("MainActivity");
/// let intent = router.route_activation("2222");
/// assert_eq!(intent.target(), "MainActivity");
/// assert_eq!(intent.extra(ITEM_ID), Some("2222"));
/// assert_eq!(intent.to_string(), "MainActivity?ITEM_ID=2222");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivationIntent {
    target: String,
    extras: BTreeMap<String, String>,
}

impl ActivationIntent {
    fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            extras: BTreeMap::new(),
        }
    }

    /// The entry surface this intent opens.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// All extras, keyed by name.
    #[must_use]
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }

    /// Looks up a single extra.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }

    /// The activated item's id, if this intent came from a row.
    #[must_use]
    pub fn item_id(&self) -> Option<&str> {
        self.extra(ITEM_ID)
    }

    /// Returns a copy of this template with the fill-in's extras merged in.
    #[must_use]
    pub fn with_fill_in(&self, fill_in: &FillIn) -> Self {
        let mut merged = self.clone();
        merged
            .extras
            .insert(ITEM_ID.to_string(), fill_in.item_id.clone());
        merged
    }
}

impl fmt::Display for ActivationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target)?;
        for (i, (key, value)) in self.extras.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

/// Per-row payload identifying which item a tap landed on.
///
/// # Examples
///
/// ```
/// use widget_protocol::FillIn;
///
/// let fill_in = FillIn::new("1111");
/// assert_eq!(fill_in.item_id(), "1111");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FillIn {
    item_id: String,
}

impl FillIn {
    /// Creates a fill-in for the given item id.
    #[must_use]
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
        }
    }

    /// The item id embedded in this fill-in.
    #[must_use]
    pub fn item_id(&self) -> &str {
        &self.item_id
    }
}

/// Builds activation intents targeting the host app's entry surface.
///
/// The router keeps its default intent around and hands out copies, so
/// repeated taps do not rebuild anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickRouter {
    default_intent: ActivationIntent,
}

impl ClickRouter {
    /// Creates a router targeting the given entry surface.
    #[must_use]
    pub fn new(entry_surface: impl Into<String>) -> Self {
        Self {
            default_intent: ActivationIntent::new(entry_surface),
        }
    }

    /// Intent for a tap on the row showing `item_id`.
    #[must_use]
    pub fn route_activation(&self, item_id: &str) -> ActivationIntent {
        self.route_fill_in(&FillIn::new(item_id))
    }

    /// Intent for a tap on the container or empty-state area.
    #[must_use]
    pub fn route_default_activation(&self) -> ActivationIntent {
        self.default_intent.clone()
    }

    /// Resolves a row's fill-in against the router's template.
    #[must_use]
    pub fn route_fill_in(&self, fill_in: &FillIn) -> ActivationIntent {
        self.default_intent.with_fill_in(fill_in)
    }
}

impl Default for ClickRouter {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRY_SURFACE)
    }
}
