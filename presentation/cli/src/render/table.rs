use business::domain::catalog::model::CatalogItem;

/// Plain-text table of matched items, name and price columns.
pub fn render(items: &[CatalogItem]) -> String {
    let name_width = items
        .iter()
        .map(|item| item.name.len())
        .chain(std::iter::once("ITEM".len()))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    out.push_str(&format!("{:<name_width$}  {:>5}\n", "ITEM", "PRICE"));
    for item in items {
        out.push_str(&format!("{:<name_width$}  {:>5}\n", item.name, item.price));
    }

    out
}
