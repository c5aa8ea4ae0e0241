use serde_json::Value;

// ---------------------------------------------------------------------------
// CardLookup — The card object of an EDHREC card page, if any
// ---------------------------------------------------------------------------

/// Result of locating the card object inside an EDHREC card page.
///
/// Pages for unknown cards (or pages whose layout changed) carry no card
/// object at all; that is `Missing`, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CardLookup {
    Missing,
    Found(CardObject),
}

/// The fields DeckStats reads from `container.json_dict.card`.
///
/// Each field is independently optional. Values of the wrong JSON type are
/// read as absent rather than rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardObject {
    pub salt: Option<f64>,
    /// Finite `price` values from the `prices` map, one per price source.
    /// `None` when the page has no `prices` object.
    pub prices: Option<Vec<f64>>,
    pub num_decks: Option<f64>,
    pub potential_decks: Option<f64>,
    /// `normal` image URLs from `image_uris`, in page order.
    pub image_uris: Vec<String>,
}

impl CardLookup {
    /// Locate and read the card object of a parsed card page.
    pub fn from_page(page: &Value) -> Self {
        let card = page
            .get("container")
            .and_then(|c| c.get("json_dict"))
            .and_then(|d| d.get("card"))
            .filter(|c| c.is_object());

        match card {
            Some(card) => CardLookup::Found(CardObject::from_value(card)),
            None => CardLookup::Missing,
        }
    }
}

impl CardObject {
    fn from_value(card: &Value) -> Self {
        let prices = card.get("prices").and_then(|v| v.as_object()).map(|map| {
            map.values()
                .filter_map(|entry| entry.get("price").and_then(finite_f64))
                .collect()
        });

        let image_uris = card
            .get("image_uris")
            .and_then(|v| v.as_array())
            .map(|uris| {
                uris.iter()
                    .filter_map(|u| u.get("normal").and_then(|n| n.as_str()))
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            salt: card.get("salt").and_then(finite_f64),
            prices,
            num_decks: card.get("num_decks").and_then(finite_f64),
            potential_decks: card.get("potential_decks").and_then(finite_f64),
            image_uris,
        }
    }

    /// Arithmetic mean of the finite prices, or `None` if there are none.
    pub fn average_price(&self) -> Option<f64> {
        let prices = self.prices.as_ref()?;
        if prices.is_empty() {
            return None;
        }
        let mean = prices.iter().sum::<f64>() / prices.len() as f64;
        Some(mean).filter(|m| m.is_finite())
    }

    /// Share of the decks that could play this card that actually do.
    ///
    /// Absent when either count is missing or the ratio is not finite
    /// (a zero `potential_decks`).
    pub fn popularity(&self) -> Option<f64> {
        let ratio = self.num_decks? / self.potential_decks?;
        Some(ratio).filter(|r| r.is_finite())
    }
}

fn finite_f64(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}
