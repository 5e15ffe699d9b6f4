use chrono::Utc;

/// Clock-derived id source.
///
/// Ids are millisecond timestamps rendered as decimal strings. Each id is
/// strictly greater than the previous one, so two requests inside the same
/// millisecond still get distinct values.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start past every numeric id in `existing`
    pub fn seeded_past<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let last = existing
            .into_iter()
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last.saturating_add(1));
        self.last.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_strictly_increasing() {
        let mut ids = IdGenerator::new();
        let generated: Vec<i64> = (0..500)
            .map(|_| ids.next_id().parse().unwrap())
            .collect();

        assert!(generated.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(generated.iter().collect::<HashSet<_>>().len(), 500);
    }

    #[test]
    fn seeding_skips_existing_ids() {
        let far_future = "99999999999999";
        let mut ids = IdGenerator::seeded_past(["12", far_future, "not-a-number"]);

        assert_eq!(ids.next_id(), "100000000000000");
    }
}
