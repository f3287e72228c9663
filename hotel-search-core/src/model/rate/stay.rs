use std::fmt::Display;

/// availability lookup key. dates are kept as the caller supplied them and
/// compared as plain strings.
#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct Stay {
    pub hotel_id: String,
    pub in_date: String,
    pub out_date: String,
}

impl Stay {
    pub fn new(hotel_id: &str, in_date: &str, out_date: &str) -> Stay {
        Stay {
            hotel_id: hotel_id.to_string(),
            in_date: in_date.to_string(),
            out_date: out_date.to_string(),
        }
    }
}

impl Display for Stay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}, {}]", self.hotel_id, self.in_date, self.out_date)
    }
}
