use stock_core::{LedgerKind, NewOrder, OrderEntry};

use crate::app::AppContext;
use crate::cli::{OrderAddArgs, OrderListArgs, OrdersCommand, SearchArgs};
use crate::helpers::{parse_price, parse_quantity};
use crate::output::{order_rows, print_json, ConsoleObserver, ORDER_COLUMNS};
use crate::ui::{header, hint, print, simple_table, UiContext};

use super::ledger::{handle_clear, handle_remove};
use super::{count_label, display_context};

pub fn handle_orders(ctx: &AppContext, command: &OrdersCommand) -> anyhow::Result<()> {
    match command {
        OrdersCommand::Add(args) => handle_add(ctx, args),
        OrdersCommand::List(args) => handle_list(ctx, args),
        OrdersCommand::Search(args) => handle_search(ctx, args),
        OrdersCommand::Remove(args) => handle_remove(ctx, LedgerKind::Orders, args),
        OrdersCommand::Clear(args) => handle_clear(ctx, LedgerKind::Orders, args),
    }
}

fn handle_add(ctx: &AppContext, args: &OrderAddArgs) -> anyhow::Result<()> {
    let unit_price = parse_price(&args.price)?;
    let quantity = parse_quantity(&args.quantity)?;
    let order = NewOrder::new(&args.product, unit_price, quantity)
        .with_customer(&args.name, &args.phone);

    let mut book = ctx.open_book()?;
    book.subscribe(ConsoleObserver::new(ctx.ui_context(None), ctx.quiet()));
    book.orders().add(order)?;
    Ok(())
}

fn handle_list(ctx: &AppContext, args: &OrderListArgs) -> anyhow::Result<()> {
    let ui = display_context(ctx, &args.display)?;
    let book = ctx.open_book()?;
    let orders = match args.product.as_deref() {
        Some(product) => book.order_ledger().search_product(product),
        None => book.order_entries().to_vec(),
    };
    let context = match args.product.as_deref() {
        Some(product) => format!(
            "{} for \"{}\"",
            count_label(orders.len(), "order", "orders"),
            product
        ),
        None => count_label(orders.len(), "order", "orders"),
    };
    render_orders(ctx, &ui, &orders, &context)
}

fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let ui = display_context(ctx, &args.display)?;
    let book = ctx.open_book()?;
    let orders = book.order_ledger().search(&args.term);
    let context = format!(
        "\"{}\", {}",
        args.term,
        count_label(orders.len(), "match", "matches")
    );
    render_orders(ctx, &ui, &orders, &context)
}

fn render_orders(
    ctx: &AppContext,
    ui: &UiContext,
    orders: &[OrderEntry],
    context: &str,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        return print_json(orders);
    }

    let chatty = ui.mode.is_pretty() && !ctx.quiet();
    if chatty {
        print(ui, &header(ui, "orders", Some(context)));
    }
    if orders.is_empty() {
        if chatty {
            print(
                ui,
                &hint(
                    ui,
                    "Record an order with `stock orders add --name <NAME> <PRODUCT> <PRICE> <QTY>`.",
                ),
            );
        }
        return Ok(());
    }
    print(ui, &simple_table(ui, &ORDER_COLUMNS, &order_rows(ui, orders)));
    Ok(())
}
