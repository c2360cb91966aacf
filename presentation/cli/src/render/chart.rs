use business::domain::catalog::model::CatalogItem;

const BAR_WIDTH: usize = 40;
// Axis labels in the web chart were clipped to 7 characters; keep the
// same clipping so long snack names stay readable.
const LABEL_WIDTH: usize = 7;

/// Grouped horizontal bar chart of carbs, protein and fat per item.
///
/// Bars are scaled against the largest value in the matched set so
/// the group proportions survive the move to a fixed-width terminal.
pub fn render(items: &[CatalogItem]) -> String {
    let max = items
        .iter()
        .flat_map(|item| [item.carbs, item.protein, item.fat])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{}\n", clip_label(&item.name)));
        for (nutrient, grams) in [
            ("carbs", item.carbs),
            ("protein", item.protein),
            ("fat", item.fat),
        ] {
            out.push_str(&format!(
                "  {:<8} {:<width$} {:>3} g\n",
                nutrient,
                "█".repeat(bar_len(grams, max)),
                grams,
                width = BAR_WIDTH
            ));
        }
        out.push('\n');
    }

    out
}

fn bar_len(grams: u32, max: u32) -> usize {
    if max == 0 {
        return 0;
    }

    let scaled = (grams as usize * BAR_WIDTH) / max as usize;
    if grams > 0 && scaled == 0 {
        // A detected nutrient should never be invisible.
        1
    } else {
        scaled
    }
}

fn clip_label(name: &str) -> String {
    name.chars().take(LABEL_WIDTH).collect()
}
