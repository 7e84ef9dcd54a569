use stock_core::LedgerKind;

use crate::app::AppContext;
use crate::cli::{DisplayArgs, InventoryAddArgs, InventoryCommand};
use crate::helpers::parse_quantity;
use crate::output::{inventory_rows, print_json, ConsoleObserver, INVENTORY_COLUMNS};
use crate::ui::{header, hint, print, simple_table};

use super::ledger::{handle_clear, handle_remove};
use super::{count_label, display_context};

pub fn handle_inventory(ctx: &AppContext, command: &InventoryCommand) -> anyhow::Result<()> {
    match command {
        InventoryCommand::Add(args) => handle_add(ctx, args),
        InventoryCommand::List(args) => handle_list(ctx, args),
        InventoryCommand::Remove(args) => handle_remove(ctx, LedgerKind::Inventory, args),
        InventoryCommand::Clear(args) => handle_clear(ctx, LedgerKind::Inventory, args),
    }
}

fn handle_add(ctx: &AppContext, args: &InventoryAddArgs) -> anyhow::Result<()> {
    let quantity = parse_quantity(&args.quantity)?;
    let mut book = ctx.open_book()?;
    book.subscribe(ConsoleObserver::new(ctx.ui_context(None), ctx.quiet()));
    book.inventory().add(&args.product, quantity)?;
    Ok(())
}

fn handle_list(ctx: &AppContext, args: &DisplayArgs) -> anyhow::Result<()> {
    let ui = display_context(ctx, args)?;
    let book = ctx.open_book()?;
    let entries = book.inventory_entries();

    if ui.mode.is_json() {
        return print_json(entries);
    }

    let chatty = ui.mode.is_pretty() && !ctx.quiet();
    if chatty {
        let context = count_label(entries.len(), "entry", "entries");
        print(&ui, &header(&ui, "inventory", Some(&context)));
    }
    if entries.is_empty() {
        if chatty {
            print(
                &ui,
                &hint(&ui, "Record stock with `stock inventory add <PRODUCT> <QTY>`."),
            );
        }
        return Ok(());
    }
    print(
        &ui,
        &simple_table(&ui, &INVENTORY_COLUMNS, &inventory_rows(&ui, entries)),
    );
    Ok(())
}
