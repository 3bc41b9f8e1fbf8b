use chrono::NaiveDateTime;

pub trait Clock {
    /// Current wall-clock time in the local timezone.
    fn now(&self) -> NaiveDateTime;
}

pub trait ConfigProvider {
    fn version(&self) -> &str;
    fn items(&self) -> &[&'static str];
    fn min_item_length(&self) -> usize;
    fn operands(&self) -> (i32, i32);
}
