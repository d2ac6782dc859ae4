//! Appearance (texture) table
//!
//! Handles are resolved by the collaborator at startup. Bubbles only carry an
//! `Appearance` index into this table.

use crate::consts::APPEARANCE_COUNT;
use crate::sim::Appearance;

/// Names of the bundled bubble variants, in table order
pub const VARIANT_NAMES: [&str; APPEARANCE_COUNT] = ["bubble-blue", "bubble-purple", "bubble-red"];

/// One handle per appearance variant
#[derive(Debug, Clone)]
pub struct AppearanceTable<T> {
    handles: [T; APPEARANCE_COUNT],
}

impl<T> AppearanceTable<T> {
    pub fn new(handles: [T; APPEARANCE_COUNT]) -> Self {
        Self { handles }
    }

    /// Resolve every variant through `load`, in table order
    pub fn resolve<E>(mut load: impl FnMut(Appearance, &str) -> Result<T, E>) -> Result<Self, E> {
        let mut load_at = |index: usize| {
            let appearance = Appearance::new(index).unwrap_or_default();
            load(appearance, VARIANT_NAMES[index])
        };
        Ok(Self::new([load_at(0)?, load_at(1)?, load_at(2)?]))
    }

    pub fn get(&self, appearance: Appearance) -> &T {
        &self.handles[appearance.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Appearance, &T)> {
        Appearance::all().zip(self.handles.iter())
    }
}
