use super::HotelProfile;
use std::collections::HashMap;

/// exact-match profile lookup by hotel id, built once from the hotel feed.
#[derive(Default, Debug)]
pub struct ProfileStore {
    profiles: HashMap<String, HotelProfile>,
}

impl ProfileStore {
    pub fn from_profiles(profiles: Vec<HotelProfile>) -> ProfileStore {
        let mut by_id = HashMap::with_capacity(profiles.len());
        for profile in profiles {
            if let Some(prev) = by_id.insert(profile.id.clone(), profile) {
                log::warn!("duplicate profile for hotel {}, keeping the later one", prev.id);
            }
        }
        ProfileStore { profiles: by_id }
    }

    pub fn lookup(&self, hotel_id: &str) -> Option<&HotelProfile> {
        self.profiles.get(hotel_id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::profile::Address;

    fn profile(id: &str, name: &str) -> HotelProfile {
        HotelProfile {
            id: id.to_string(),
            name: name.to_string(),
            phone_number: "(415) 555-0100".to_string(),
            description: String::new(),
            address: Address::default(),
            images: vec![],
        }
    }

    #[test]
    fn test_lookup() {
        let store = ProfileStore::from_profiles(vec![profile("1", "a"), profile("2", "b")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("2").map(|p| p.name.as_str()), Some("b"));
        assert!(store.lookup("3").is_none());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let store = ProfileStore::from_profiles(vec![profile("1", "old"), profile("1", "new")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("1").map(|p| p.name.as_str()), Some("new"));
    }
}
