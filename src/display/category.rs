//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Locale;
use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
}

/// Format a list of categories as a table
pub fn format_category_list<'a, I>(categories: I, locale: Locale) -> String
where
    I: IntoIterator<Item = &'a Category>,
{
    let rows: Vec<CategoryRow> = categories
        .into_iter()
        .map(|c| CategoryRow {
            id: c.id.to_string(),
            name: c.name.clone(),
            kind: locale.kind_label(c.kind).to_string(),
        })
        .collect();

    if rows.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ledger;

    #[test]
    fn test_category_list() {
        let ledger = Ledger::demo();
        let output = format_category_list(ledger.categories(), Locale::PtBr);

        assert!(output.contains("Alimentação"));
        assert!(output.contains("Receita"));
        assert!(output.contains("Despesa"));
    }

    #[test]
    fn test_empty_list() {
        let output = format_category_list(std::iter::empty::<&Category>(), Locale::En);
        assert_eq!(output, "No categories found.\n");
    }
}
