use std::collections::HashSet;

use serde::Serialize;

use super::errors::CatalogError;

/// A known snack with its price (whole rupees) and nutrition facts
/// (grams per serving). The `id` matches the class index emitted by
/// the inference model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub carbs: u32,
    pub protein: u32,
    pub fat: u32,
}

impl CatalogItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u32,
        carbs: u32,
        protein: u32,
        fat: u32,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::NameEmpty);
        }

        Ok(Self {
            id,
            name,
            price,
            carbs,
            protein,
            fat,
        })
    }
}

/// The static list of items the inference model can detect.
///
/// Constructed once at startup and read-only for the lifetime of the
/// process. Item ids must be unique so that a detected id maps to at
/// most one catalog entry.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId);
            }
        }

        Ok(Self { items })
    }

    /// The snack table shipped with the application, ids aligned with
    /// the deployed inference model's class indices.
    pub fn builtin() -> Self {
        let rows: [(u32, &str, u32, u32, u32, u32); 11] = [
            (0, "Coke", 40, 11, 0, 0),
            (1, "Parle peri-peri Chips", 40, 57, 7, 34),
            (2, "Lays American Style Cream & Onion", 25, 15, 2, 10),
            (3, "Bikano Aloo Bhujia", 20, 12, 3, 14),
            (4, "Dairy milk", 20, 60, 8, 29),
            (5, "Unibic chocochip", 20, 15, 1, 4),
            (6, "Bauli Moonfils Choco", 20, 59, 6, 17),
            (7, "Goodday Butter", 10, 68, 7, 23),
            (8, "Bauli Goodness Bar", 60, 58, 10, 11),
            (9, "Boomer", 10, 2, 0, 0),
            (10, "Mcvities Dark", 30, 61, 6, 24),
        ];

        let items = rows
            .into_iter()
            .map(|(id, name, price, carbs, protein, fat)| CatalogItem {
                id,
                name: name.to_string(),
                price,
                carbs,
                protein,
                fat,
            })
            .collect();

        // The builtin table has unique ids by construction.
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn find(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, price: u32) -> CatalogItem {
        CatalogItem::new(id, name, price, 0, 0, 0).unwrap()
    }

    #[test]
    fn should_create_item_when_name_valid() {
        let result = CatalogItem::new(3, "Bikano Aloo Bhujia", 20, 12, 3, 14);

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.name, "Bikano Aloo Bhujia");
        assert_eq!(item.price, 20);
    }

    #[test]
    fn should_reject_item_when_name_empty() {
        let result = CatalogItem::new(3, "   ", 20, 12, 3, 14);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CatalogError::NameEmpty));
    }

    #[test]
    fn should_build_catalog_when_ids_unique() {
        let result = Catalog::new(vec![item(0, "Coke", 40), item(1, "Boomer", 10)]);

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[test]
    fn should_reject_catalog_when_ids_collide() {
        let result = Catalog::new(vec![item(7, "Goodday Butter", 10), item(7, "Boomer", 10)]);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CatalogError::DuplicateId));
    }

    #[test]
    fn should_ship_builtin_snack_table() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.find(0).unwrap().name, "Coke");
        assert_eq!(catalog.find(4).unwrap().name, "Dairy milk");
        assert_eq!(catalog.find(10).unwrap().price, 30);
        assert!(catalog.find(999).is_none());
    }

    #[test]
    fn should_keep_builtin_ids_unique() {
        let catalog = Catalog::builtin();

        let revalidated = Catalog::new(catalog.items().to_vec());
        assert!(revalidated.is_ok());
    }
}
