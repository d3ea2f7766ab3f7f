/// Per-label edit costs.
///
/// The default charges 1 for every insertion and removal, and 1 for an update between unequal
/// labels (0 between equal ones).
pub struct EditCosts<'c, D> {
    insert: Box<dyn Fn(&D) -> f64 + 'c>,
    remove: Box<dyn Fn(&D) -> f64 + 'c>,
    update: Box<dyn Fn(&D, &D) -> f64 + 'c>,
}

impl<'c, D> EditCosts<'c, D> {
    pub fn new(
        insert: impl Fn(&D) -> f64 + 'c,
        remove: impl Fn(&D) -> f64 + 'c,
        update: impl Fn(&D, &D) -> f64 + 'c,
    ) -> Self {
        Self {
            insert: Box::new(insert),
            remove: Box::new(remove),
            update: Box::new(update),
        }
    }

    pub fn with_insert(mut self, insert: impl Fn(&D) -> f64 + 'c) -> Self {
        self.insert = Box::new(insert);
        self
    }

    pub fn with_remove(mut self, remove: impl Fn(&D) -> f64 + 'c) -> Self {
        self.remove = Box::new(remove);
        self
    }

    pub fn with_update(mut self, update: impl Fn(&D, &D) -> f64 + 'c) -> Self {
        self.update = Box::new(update);
        self
    }

    pub fn insert(&self, data: &D) -> f64 {
        (self.insert)(data)
    }

    pub fn remove(&self, data: &D) -> f64 {
        (self.remove)(data)
    }

    pub fn update(&self, from: &D, to: &D) -> f64 {
        (self.update)(from, to)
    }
}

impl<'c, D: PartialEq + 'c> Default for EditCosts<'c, D> {
    fn default() -> Self {
        Self::new(
            |_| 1.0,
            |_| 1.0,
            |from, to| if from == to { 0.0 } else { 1.0 },
        )
    }
}

impl<D> std::fmt::Debug for EditCosts<'_, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditCosts").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditOptions {
    /// Keep zero-cost `Match` operations in the script.
    pub keep_matches: bool,
}
