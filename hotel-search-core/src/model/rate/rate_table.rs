use super::{RatePlan, Stay};
use std::collections::HashMap;

/// exact-match availability lookup, built once from the inventory feed.
#[derive(Default, Debug)]
pub struct RateTable {
    rates: HashMap<Stay, RatePlan>,
}

impl RateTable {
    /// bulk loads the table. when two plans share a stay, the later one is
    /// kept.
    pub fn from_rate_plans(rate_plans: Vec<RatePlan>) -> RateTable {
        let mut rates = HashMap::with_capacity(rate_plans.len());
        for rate_plan in rate_plans {
            let stay = rate_plan.stay();
            if let Some(prev) = rates.insert(stay, rate_plan) {
                log::warn!(
                    "duplicate rate plan for stay {}, replacing rate code {}",
                    prev.stay(),
                    prev.code
                );
            }
        }
        RateTable { rates }
    }

    pub fn lookup(&self, stay: &Stay) -> Option<&RatePlan> {
        self.rates.get(stay)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rate::RoomType;

    fn plan(hotel_id: &str, in_date: &str, out_date: &str, code: &str) -> RatePlan {
        RatePlan {
            hotel_id: hotel_id.to_string(),
            code: code.to_string(),
            in_date: in_date.to_string(),
            out_date: out_date.to_string(),
            room_type: RoomType {
                bookable_rate: 100.0,
                total_rate: 100.0,
                total_rate_inclusive: 112.0,
                code: "KNG".to_string(),
                currency: "USD".to_string(),
                room_description: "King sized bed".to_string(),
            },
        }
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let table = RateTable::from_rate_plans(vec![
            plan("1", "2015-04-09", "2015-04-10", "RACK"),
            plan("2", "2015-04-09", "2015-04-10", "RACK"),
        ]);
        assert_eq!(table.len(), 2);
        let hit = table.lookup(&Stay::new("1", "2015-04-09", "2015-04-10"));
        assert_eq!(hit.map(|p| p.hotel_id.as_str()), Some("1"));
        assert!(table
            .lookup(&Stay::new("1", "2015-04-09", "2015-04-11"))
            .is_none());
        assert!(table
            .lookup(&Stay::new("3", "2015-04-09", "2015-04-10"))
            .is_none());
    }

    #[test]
    fn test_dates_are_compared_verbatim() {
        let table = RateTable::from_rate_plans(vec![plan("1", "2015-04-09", "2015-04-10", "RACK")]);
        assert!(table
            .lookup(&Stay::new("1", "2015-4-9", "2015-4-10"))
            .is_none());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let table = RateTable::from_rate_plans(vec![
            plan("1", "a", "b", "RACK"),
            plan("1", "a", "b", "PROMO"),
        ]);
        assert_eq!(table.len(), 1);
        let hit = table.lookup(&Stay::new("1", "a", "b")).unwrap();
        assert_eq!(hit.code, "PROMO");
    }

    #[test]
    fn test_empty_table() {
        let table = RateTable::default();
        assert!(table.is_empty());
        assert!(table.lookup(&Stay::new("1", "a", "b")).is_none());
    }
}
