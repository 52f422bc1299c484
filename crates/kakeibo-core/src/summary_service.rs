//! Aggregation over the entry book: day and month summaries, category
//! breakdowns, and per-day chart data.

use chrono::NaiveDate;

use kakeibo_domain::{
    CategoryTotal, DaySummary, DayTotal, Entry, EntryBook, MonthSummary, YearMonth,
    UNCATEGORIZED_LABEL,
};

/// Pure aggregation functions over an entry book snapshot.
///
/// Every function is deterministic in its arguments and holds no state; an
/// empty day or month yields zero-valued aggregates rather than an error.
/// Amounts pass through unrounded.
///
/// Day-level functions deliberately take the whole book, not a month slice:
/// calendar day markers are computed from the full collection while only the
/// chart aggregates are month-scoped.
pub struct SummaryService;

impl SummaryService {
    /// Entries recorded on `date`, in insertion order.
    pub fn entries_on_day<'a>(book: &'a EntryBook, date: NaiveDate) -> Vec<&'a Entry> {
        book.entries_on(date)
    }

    /// Entries whose date falls inside `month`, in insertion order.
    pub fn entries_in_month<'a>(book: &'a EntryBook, month: YearMonth) -> Vec<&'a Entry> {
        book.entries_in(month)
    }

    /// Income and expense totals for a single day.
    pub fn day_summary(book: &EntryBook, date: NaiveDate) -> DaySummary {
        book.entries_on(date)
            .into_iter()
            .fold(DaySummary::default(), |mut acc, entry| {
                acc.income += entry.income;
                acc.expense += entry.expense;
                acc
            })
    }

    /// Expense totals per resolved category for the given month.
    ///
    /// Entries without an expense leg contribute nothing, even when they
    /// carry income. Each category appears at most once; result order
    /// follows first appearance in the book.
    pub fn category_totals(book: &EntryBook, month: YearMonth) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for entry in book.entries_in(month) {
            if !entry.has_expense() {
                continue;
            }
            let label = entry.category.as_deref().unwrap_or(UNCATEGORIZED_LABEL);
            match totals.iter_mut().find(|total| total.category == label) {
                Some(total) => total.amount += entry.expense,
                None => totals.push(CategoryTotal {
                    category: label.to_string(),
                    amount: entry.expense,
                }),
            }
        }
        totals
    }

    /// Month-level income, expense, and balance.
    pub fn month_summary(book: &EntryBook, month: YearMonth) -> MonthSummary {
        let mut summary = MonthSummary::default();
        for entry in book.entries_in(month) {
            summary.income += entry.income;
            summary.expense += entry.expense;
        }
        summary.balance = summary.income - summary.expense;
        summary
    }

    /// One income/expense total per calendar day of `month`, zero-filled
    /// for days without entries.
    pub fn daily_totals(book: &EntryBook, month: YearMonth) -> Vec<DayTotal> {
        month
            .days()
            .map(|date| {
                let summary = Self::day_summary(book, date);
                DayTotal {
                    date,
                    income: summary.income,
                    expense: summary.expense,
                }
            })
            .collect()
    }
}
