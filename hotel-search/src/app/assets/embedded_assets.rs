use super::{AssetError, AssetSource, GEO_ASSET, HOTELS_ASSET, INVENTORY_ASSET};
use std::borrow::Cow;

const GEO_BYTES: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/geo.json"));
const HOTELS_BYTES: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/hotels.json"));
const INVENTORY_BYTES: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/inventory.json"));

/// the sample data set compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn load(&self, name: &str) -> Result<Cow<'_, [u8]>, AssetError> {
        let bytes = match name {
            GEO_ASSET => GEO_BYTES,
            HOTELS_ASSET => HOTELS_BYTES,
            INVENTORY_ASSET => INVENTORY_BYTES,
            _ => {
                return Err(AssetError::NotFound {
                    name: name.to_string(),
                    location: self.location(),
                })
            }
        };
        Ok(Cow::Borrowed(bytes))
    }

    fn location(&self) -> String {
        String::from("embedded assets")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_assets() {
        for name in [GEO_ASSET, HOTELS_ASSET, INVENTORY_ASSET] {
            let bytes = EmbeddedAssets.load(name).unwrap();
            assert!(!bytes.is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn test_unknown_asset() {
        let result = EmbeddedAssets.load("reviews.json");
        assert!(matches!(result, Err(AssetError::NotFound { .. })));
    }
}
