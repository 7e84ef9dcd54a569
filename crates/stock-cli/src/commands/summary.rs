use stock_core::SummaryTotals;

use crate::app::AppContext;
use crate::cli::DisplayArgs;
use crate::output::{print_json, summary_json, totals_lines, ConsoleObserver};
use crate::ui::{blank_line, divider, header, hint, print};

use super::{count_label, display_context};

pub fn handle_summary(ctx: &AppContext, args: &DisplayArgs) -> anyhow::Result<()> {
    let ui = display_context(ctx, args)?;
    let mut book = ctx.open_book()?;

    let chatty = ui.mode.is_pretty() && !ctx.quiet();
    if chatty {
        let context = format!(
            "{}, {}",
            count_label(book.inventory_entries().len(), "receipt", "receipts"),
            count_label(book.order_entries().len(), "order", "orders")
        );
        print(&ui, &header(&ui, "summary", Some(&context)));
    }

    book.subscribe(ConsoleObserver::new(ui.clone(), ctx.quiet()));
    let rows = book.summary();
    let totals = SummaryTotals::from_rows(&rows, book.order_entries());

    if ui.mode.is_json() {
        return print_json(&summary_json(&rows, &totals));
    }
    if rows.is_empty() {
        if chatty {
            print(&ui, &hint(&ui, "Nothing recorded yet. Start with `stock inventory add`."));
        }
        return Ok(());
    }
    if !ctx.quiet() {
        blank_line(&ui);
        print(&ui, &divider(&ui));
        for line in totals_lines(&ui, &totals) {
            print(&ui, &line);
        }
    }
    Ok(())
}
