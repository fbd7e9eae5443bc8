use chrono::NaiveDate;

use crate::parse::Canteen;

/// Renders the chat reply for one canteen. At most `max_items` dishes are
/// listed; the rest are summarised in one trailing line.
pub fn format_menu(canteen: &Canteen, date: NaiveDate, max_items: usize) -> String {
    let header_date = canteen
        .page_date()
        .map_or_else(|| date.format("%Y-%m-%d").to_string(), ToString::to_string);
    let mut out = format!("**{}** ({header_date})", canteen.name());

    let items = canteen.items();
    if items.is_empty() {
        out.push_str("\n_No items found._");
        return out;
    }
    for item in items.iter().take(max_items) {
        out.push_str(&format!("\n- {item}"));
    }
    if items.len() > max_items {
        out.push_str(&format!(
            "\n_... and {} more items omitted._",
            items.len() - max_items
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::MenuItem;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
    }

    #[test]
    fn test_truncation() {
        let items = (1..=40).map(|i| MenuItem::new(format!("Gericht {i}"))).collect();
        let canteen = Canteen::new("Zentralmensa", items);
        let out = format_menu(&canteen, date(), 30);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "**Zentralmensa** (2026-02-02)");
        assert_eq!(lines.iter().filter(|l| l.starts_with("- ")).count(), 30);
        assert_eq!(lines[30], "- Gericht 30");
        assert_eq!(lines[31], "_... and 10 more items omitted._");
        assert_eq!(lines.len(), 32);
    }

    #[test]
    fn test_no_truncation_at_limit() {
        let items = (1..=3).map(|i| MenuItem::new(format!("Gericht {i}"))).collect();
        let out = format_menu(&Canteen::new("CGiN", items), date(), 3);
        assert_eq!(
            out,
            "**CGiN** (2026-02-02)\n- Gericht 1\n- Gericht 2\n- Gericht 3"
        );
    }

    #[test]
    fn test_empty() {
        let out = format_menu(&Canteen::new("CGiN", vec![]), date(), 30);
        assert_eq!(out, "**CGiN** (2026-02-02)\n_No items found._");
    }

    #[test]
    fn test_item_lines_carry_kind_and_details() {
        let items = vec![MenuItem::new("Falafel")
            .with_kind("Vegetarisch")
            .with_details("mit Hummus")];
        let out = format_menu(&Canteen::new("Mensa am Turm", items), date(), 30);
        assert_eq!(
            out,
            "**Mensa am Turm** (2026-02-02)\n- **Vegetarisch**: Falafel · mit Hummus"
        );
    }
}
