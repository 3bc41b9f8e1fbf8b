use crate::domain::model::ProcessedItems;

/// Keeps items longer than `min_length` characters and uppercases them,
/// preserving source order.
pub fn process_items<S: AsRef<str>>(items: &[S], min_length: usize) -> ProcessedItems {
    let items = items
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| item.chars().count() > min_length)
        .map(str::to_uppercase)
        .collect::<Vec<_>>();

    tracing::debug!("Kept {} item(s) longer than {} chars", items.len(), min_length);

    ProcessedItems { items }
}
