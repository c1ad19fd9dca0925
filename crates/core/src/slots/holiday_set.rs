use std::collections::HashSet;

use chrono::NaiveDate;

use crate::slots::sources::HolidaySource;

/// Holiday dates for one generation run.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Loads the holidays between `start` and `end`, both inclusive.
    pub async fn load<H>(source: &H, start: NaiveDate, end: NaiveDate) -> eyre::Result<Self>
    where
        H: HolidaySource + ?Sized,
    {
        let dates = source.get_dates_in_range(start, end).await?;
        Ok(Self::new(dates))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::sources::MockHolidaySource;
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains_and_duplicates() {
        let set = HolidaySet::new([date(2024, 3, 20), date(2024, 3, 20), date(2024, 3, 21)]);

        assert_eq!(set.len(), 2);
        assert!(set.contains(date(2024, 3, 20)));
        assert!(set.contains(date(2024, 3, 21)));
        assert!(!set.contains(date(2024, 3, 22)));
    }

    #[tokio::test]
    async fn test_load_queries_requested_range() {
        let mut source = MockHolidaySource::new();
        source
            .expect_get_dates_in_range()
            .with(eq(date(2024, 3, 1)), eq(date(2024, 3, 31)))
            .times(1)
            .returning(|_, _| Ok(vec![NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()]));

        let set = HolidaySet::load(&source, date(2024, 3, 1), date(2024, 3, 31))
            .await
            .unwrap();

        assert!(set.contains(date(2024, 3, 20)));
        assert_eq!(set.len(), 1);
    }

    #[tokio::test]
    async fn test_load_propagates_errors() {
        let mut source = MockHolidaySource::new();
        source
            .expect_get_dates_in_range()
            .returning(|_, _| Err(eyre::eyre!("connection refused")));

        let result = HolidaySet::load(&source, date(2024, 3, 1), date(2024, 3, 31)).await;

        assert!(result.is_err());
    }
}
