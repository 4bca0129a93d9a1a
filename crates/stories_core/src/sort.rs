use crate::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    Title,
    Author,
    Comments,
    Points,
}

/// Display-only ordering of the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub reversed: bool,
}

impl SortState {
    /// Clicking the active key flips the direction; any other key starts over.
    pub fn toggle(self, key: SortKey) -> Self {
        let reversed = key == self.key && !self.reversed;
        Self { key, reversed }
    }

    /// Returns a sorted copy; `items` keeps its fetch order.
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        let mut sorted = items.to_vec();
        match self.key {
            SortKey::None => {}
            SortKey::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Author => sorted.sort_by(|a, b| a.author.cmp(&b.author)),
            // Highest first.
            SortKey::Comments => {
                sorted.sort_by_key(|item| item.num_comments);
                sorted.reverse();
            }
            SortKey::Points => {
                sorted.sort_by_key(|item| item.points);
                sorted.reverse();
            }
        }
        if self.reversed {
            sorted.reverse();
        }
        sorted
    }
}
