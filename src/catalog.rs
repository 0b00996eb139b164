pub const PRICE_PLACEHOLDER: &str = "—";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub key: &'static str,
    pub price: u32,
}

/// Fixed price list, keyed by the value of the service dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceCatalog {
    entries: Vec<ServiceEntry>,
}

impl ServiceCatalog {
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ServiceEntry { key: "house", price: 120 },
                ServiceEntry { key: "apartment", price: 90 },
                ServiceEntry { key: "carpet", price: 70 },
            ],
        }
    }

    pub fn services(&self) -> impl Iterator<Item = &ServiceEntry> {
        self.entries.iter()
    }

    pub fn price_of(&self, key: &str) -> Option<u32> {
        if key.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.price)
    }

    pub fn price_display(&self, key: &str) -> String {
        match self.price_of(key) {
            Some(price) => price.to_string(),
            None => PRICE_PLACEHOLDER.to_string(),
        }
    }

    pub fn price_with_unit(&self, key: &str, unit: &str) -> String {
        match self.price_of(key) {
            Some(price) => format!("{} {}", price, unit),
            None => PRICE_PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_key_displays_its_price() {
        let catalog = ServiceCatalog::standard();
        for entry in catalog.services() {
            assert_eq!(catalog.price_display(entry.key), entry.price.to_string());
        }
        assert_eq!(catalog.price_display("apartment"), "90");
        assert_eq!(catalog.price_display("house"), "120");
        assert_eq!(catalog.price_display("carpet"), "70");
    }

    #[test]
    fn unknown_or_empty_key_shows_placeholder() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(catalog.price_display(""), PRICE_PLACEHOLDER);
        assert_eq!(catalog.price_display("garage"), PRICE_PLACEHOLDER);
        assert_eq!(catalog.price_with_unit("", "LYD"), PRICE_PLACEHOLDER);
    }

    #[test]
    fn price_with_unit_appends_currency() {
        let catalog = ServiceCatalog::standard();
        assert_eq!(catalog.price_with_unit("carpet", "LYD"), "70 LYD");
        assert_eq!(catalog.price_with_unit("house", "د.ل"), "120 د.ل");
    }
}
