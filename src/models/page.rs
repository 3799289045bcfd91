use serde::{Deserialize, Deserializer};

/// One page of a catalog listing. The backend answers most list endpoints
/// with `{items, total}` but a handful of older ones still return a bare
/// array; both decode into this one shape so callers never see the split.
/// A bare array carries no count, so `total` falls back to the page length.
#[derive(Clone, Debug, Default)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageRepr<T> {
    Envelope { items: Vec<T>, total: u64 },
    Bare(Vec<T>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        Ok(match PageRepr::deserialize(de)? {
            PageRepr::Envelope { items, total } => Page { items, total },
            PageRepr::Bare(items) => {
                let total = items.len() as u64;
                Page { items, total }
            }
        })
    }
}
