pub const ITEMS: [&str; 5] = ["Apple", "Banana", "Cherry", "Date", "Elderberry"];

/// Items must be strictly longer than this (in chars) to survive processing.
pub const MIN_ITEM_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedItems {
    pub items: Vec<String>,
}

impl ProcessedItems {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub timestamp: String,
    pub processed: ProcessedItems,
    pub calculation: i32,
}
