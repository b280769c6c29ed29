//! Customer console menu: browse the shelf, purchase, review history.

use bookstore_core::CoreError;
use bookstore_db::{purchase, Database, PurchaseError};

use crate::console::input;
use crate::error::AppResult;

/// Customer menu for one authenticated customer. Returns on logout.
pub async fn menu(db: &Database, cust_id: i64) -> AppResult<()> {
    loop {
        println!();
        println!("--- CUSTOMER MENU ---");
        println!("1. Available books");
        println!("2. Purchase a book");
        println!("3. My purchase history");
        println!("0. Logout");

        match input::prompt("Choice")?.as_str() {
            "1" => show_available(db).await?,
            "2" => purchase_book(db, cust_id).await?,
            "3" => show_history(db, cust_id).await?,
            "0" => return Ok(()),
            _ => println!("  unknown choice"),
        }
    }
}

/// Lists only books with stock; sold-out titles stay off the shelf.
async fn show_available(db: &Database) -> AppResult<()> {
    let books = db.books().list_in_stock().await?;
    println!();
    println!(
        "{:<6} {:<32} {:<22} {:>5} {:>12}",
        "ID", "TITLE", "AUTHOR", "QTY", "PRICE"
    );
    for b in &books {
        println!(
            "{:<6} {:<32} {:<22} {:>5} {:>12}",
            b.b_id,
            b.b_name,
            b.a_name,
            b.quantity,
            b.price().to_string()
        );
    }
    println!("({} titles available)", books.len());
    Ok(())
}

async fn purchase_book(db: &Database, cust_id: i64) -> AppResult<()> {
    let b_id = input::prompt_i64("Book id")?;
    let qty = input::prompt_i64("Quantity")?;

    match purchase::record_purchase(db, cust_id, b_id, qty).await {
        Ok(report) => {
            println!(
                "  purchase recorded: report #{}, {} copies, total {}",
                report.r_no,
                report.quantity,
                report.price()
            );
            Ok(())
        }
        // refused purchases re-show the menu; storage failures abort
        Err(PurchaseError::Core(e @ CoreError::BookNotFound(_))) => {
            println!("  {e}");
            Ok(())
        }
        Err(PurchaseError::Core(e @ CoreError::InsufficientStock { .. })) => {
            println!("  {e}");
            Ok(())
        }
        Err(PurchaseError::Core(e @ CoreError::InvalidQuantity(_))) => {
            println!("  {e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn show_history(db: &Database, cust_id: i64) -> AppResult<()> {
    let reports = db.reports().list_for_customer(cust_id).await?;
    println!();
    println!(
        "{:<6} {:<8} {:<12} {:>5} {:>12}",
        "NO", "BOOK", "DATE", "QTY", "TOTAL"
    );
    for r in &reports {
        println!(
            "{:<6} {:<8} {:<12} {:>5} {:>12}",
            r.r_no,
            r.b_id.map_or("-".to_string(), |id| id.to_string()),
            r.date_of_purchase,
            r.quantity,
            r.price().to_string()
        );
    }
    println!("({} purchases)", reports.len());
    Ok(())
}
