//! Dashboard rendering
//!
//! Renders a `DashboardReport` as plain text: the three summary cards, the
//! expense breakdown, the monthly bars and the recent transactions table.

use super::report::{double_separator, format_bar, format_money, format_percentage, left_align, separator, truncate};
use super::transaction::format_recent_table;
use crate::config::{Locale, Settings};
use crate::reports::DashboardReport;

const WIDTH: usize = 72;
const BAR_WIDTH: usize = 24;
const NAME_WIDTH: usize = 18;

struct Headings {
    title: &'static str,
    income: &'static str,
    expense: &'static str,
    balance: &'static str,
    by_category: &'static str,
    no_expenses: &'static str,
    monthly: &'static str,
    recent: &'static str,
}

fn headings(locale: Locale) -> Headings {
    match locale {
        Locale::PtBr => Headings {
            title: "Painel Financeiro",
            income: "Receitas",
            expense: "Despesas",
            balance: "Saldo",
            by_category: "Despesas por Categoria",
            no_expenses: "Nenhuma despesa registrada.",
            monthly: "Receitas vs Despesas por Mês",
            recent: "Transações Recentes",
        },
        Locale::En => Headings {
            title: "Finance Dashboard",
            income: "Income",
            expense: "Expenses",
            balance: "Balance",
            by_category: "Expenses by Category",
            no_expenses: "No expenses recorded.",
            monthly: "Monthly Income vs Expenses",
            recent: "Recent Transactions",
        },
    }
}

/// Render the full dashboard
pub fn format_dashboard(report: &DashboardReport, settings: &Settings) -> String {
    let labels = headings(settings.locale);
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(labels.title);
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    // Summary cards
    for (label, amount) in [
        (labels.income, report.totals.income),
        (labels.expense, report.totals.expense),
        (labels.balance, report.totals.balance),
    ] {
        output.push_str(&format!(
            "{} {:>16}\n",
            left_align(&format!("{}:", label), 12),
            format_money(amount, symbol)
        ));
    }
    output.push('\n');

    // Expense breakdown
    output.push_str(labels.by_category);
    output.push('\n');
    output.push_str(&separator(WIDTH));
    output.push('\n');
    if report.categories.is_empty() {
        output.push_str(labels.no_expenses);
        output.push('\n');
    } else {
        let peak = report
            .categories
            .entries
            .iter()
            .map(|e| e.total)
            .max()
            .unwrap_or_default();
        for entry in &report.categories.entries {
            output.push_str(&format!(
                "{} {} {:>14} {:>6}\n",
                left_align(&truncate(&entry.name, NAME_WIDTH), NAME_WIDTH),
                format_bar(entry.total, peak, BAR_WIDTH),
                format_money(entry.total, symbol),
                format_percentage(entry.percentage)
            ));
        }
    }
    output.push('\n');

    // Monthly series
    match report.monthly.year {
        Some(year) => output.push_str(&format!("{} ({})\n", labels.monthly, year)),
        None => {
            output.push_str(labels.monthly);
            output.push('\n');
        }
    }
    output.push_str(&separator(WIDTH));
    output.push('\n');
    let peak = report.monthly.peak();
    for bucket in &report.monthly.buckets {
        output.push_str(&format!(
            "{} + {} {:>14}\n",
            left_align(&bucket.label, 4),
            format_bar(bucket.income, peak, BAR_WIDTH),
            format_money(bucket.income, symbol)
        ));
        output.push_str(&format!(
            "{} - {} {:>14}\n",
            left_align("", 4),
            format_bar(bucket.expense, peak, BAR_WIDTH),
            format_money(bucket.expense, symbol)
        ));
    }
    output.push('\n');

    // Recent transactions
    output.push_str(labels.recent);
    output.push('\n');
    output.push_str(&format_recent_table(&report.recent, settings));

    output
}
