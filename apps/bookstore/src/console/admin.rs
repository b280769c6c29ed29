//! Admin console menus: inventory, people, accounts and reports.

use bookstore_core::{Author, Book, BookAuthor, Credentials, Customer, Staff};
use bookstore_db::{Database, DbError, DbResult};

use crate::console::input;
use crate::error::AppResult;

/// Top-level admin menu. Returns on logout.
pub async fn menu(db: &Database) -> AppResult<()> {
    loop {
        println!();
        println!("--- ADMIN MENU ---");
        println!("1. Books");
        println!("2. Authors");
        println!("3. Customers");
        println!("4. Staff");
        println!("5. Purchase reports");
        println!("6. Login accounts");
        println!("0. Logout");

        match input::prompt("Choice")?.as_str() {
            "1" => books_menu(db).await?,
            "2" => authors_menu(db).await?,
            "3" => customers_menu(db).await?,
            "4" => staff_menu(db).await?,
            "5" => show_reports(db).await?,
            "6" => accounts_menu(db).await?,
            "0" => return Ok(()),
            _ => println!("  unknown choice"),
        }
    }
}

/// Prints the outcome of a write. Constraint violations are operator
/// mistakes (duplicate id, unknown reference, negative quantity) and
/// re-show the menu; anything else is a storage failure and aborts.
fn report_outcome(result: DbResult<()>, success: &str) -> AppResult<()> {
    match result {
        Ok(()) => {
            println!("  {success}");
            Ok(())
        }
        Err(
            e @ (DbError::UniqueViolation { .. }
            | DbError::ForeignKeyViolation { .. }
            | DbError::CheckViolation { .. }),
        ) => {
            println!("  rejected: {e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Books
// =============================================================================

async fn books_menu(db: &Database) -> AppResult<()> {
    loop {
        println!();
        println!("--- BOOKS ---");
        println!("1. Add book");
        println!("2. Delete book");
        println!("3. View all books");
        println!("0. Back");

        match input::prompt("Choice")?.as_str() {
            "1" => {
                let book = Book {
                    b_id: input::prompt_i64("Book id")?,
                    b_name: input::prompt_required("Title")?,
                    a_name: input::prompt_required("Author name")?,
                    genre: input::prompt_required("Genre")?,
                    quantity: input::prompt_i64("Quantity")?,
                    price_paise: input::prompt_money("Price (rupees)")?.paise(),
                };
                report_outcome(db.books().add(&book).await, "book added")?;
            }
            "2" => {
                let b_id = input::prompt_i64("Book id")?;
                report_outcome(db.books().delete(b_id).await, "deleted (if it existed)")?;
            }
            "3" => {
                let books = db.books().list().await?;
                println!(
                    "{:<6} {:<32} {:<22} {:<14} {:>5} {:>12}",
                    "ID", "TITLE", "AUTHOR", "GENRE", "QTY", "PRICE"
                );
                for b in &books {
                    println!(
                        "{:<6} {:<32} {:<22} {:<14} {:>5} {:>12}",
                        b.b_id,
                        b.b_name,
                        b.a_name,
                        b.genre,
                        b.quantity,
                        b.price().to_string()
                    );
                }
                println!("({} books)", books.len());
            }
            "0" => return Ok(()),
            _ => println!("  unknown choice"),
        }
    }
}

// =============================================================================
// Authors
// =============================================================================

async fn authors_menu(db: &Database) -> AppResult<()> {
    loop {
        println!();
        println!("--- AUTHORS ---");
        println!("1. Add author");
        println!("2. Delete author");
        println!("3. View all authors");
        println!("4. Link author to book");
        println!("0. Back");

        match input::prompt("Choice")?.as_str() {
            "1" => {
                let author = Author {
                    a_id: input::prompt_i64("Author id")?,
                    a_name: input::prompt_required("Name")?,
                };
                report_outcome(db.authors().add(&author).await, "author added")?;
            }
            "2" => {
                let a_id = input::prompt_i64("Author id")?;
                report_outcome(db.authors().delete(a_id).await, "deleted (if it existed)")?;
            }
            "3" => {
                let authors = db.authors().list().await?;
                println!("{:<6} {:<30}", "ID", "NAME");
                for a in &authors {
                    println!("{:<6} {:<30}", a.a_id, a.a_name);
                }
                println!("({} authors)", authors.len());
            }
            "4" => {
                let link = BookAuthor {
                    b_id: input::prompt_i64("Book id")?,
                    a_id: input::prompt_i64("Author id")?,
                };
                report_outcome(db.authors().link_book(&link).await, "linked")?;
            }
            "0" => return Ok(()),
            _ => println!("  unknown choice"),
        }
    }
}

// =============================================================================
// Customers
// =============================================================================

async fn customers_menu(db: &Database) -> AppResult<()> {
    loop {
        println!();
        println!("--- CUSTOMERS ---");
        println!("1. Add customer");
        println!("2. Delete customer");
        println!("3. View all customers");
        println!("0. Back");

        match input::prompt("Choice")?.as_str() {
            "1" => {
                let customer = Customer {
                    cust_id: input::prompt_i64("Customer id")?,
                    c_name: input::prompt_required("Name")?,
                    address: input::prompt_required("Address")?,
                    phoneno: input::prompt_required("Phone")?,
                    login_id: input::prompt_optional("Login id")?,
                };
                report_outcome(db.customers().add(&customer).await, "customer added")?;
            }
            "2" => {
                let cust_id = input::prompt_i64("Customer id")?;
                report_outcome(
                    db.customers().delete(cust_id).await,
                    "deleted (if it existed)",
                )?;
            }
            "3" => {
                let customers = db.customers().list().await?;
                println!(
                    "{:<6} {:<20} {:<20} {:<12} {:<10}",
                    "ID", "NAME", "ADDRESS", "PHONE", "LOGIN"
                );
                for c in &customers {
                    println!(
                        "{:<6} {:<20} {:<20} {:<12} {:<10}",
                        c.cust_id,
                        c.c_name,
                        c.address,
                        c.phoneno,
                        c.login_id.as_deref().unwrap_or("-")
                    );
                }
                println!("({} customers)", customers.len());
            }
            "0" => return Ok(()),
            _ => println!("  unknown choice"),
        }
    }
}

// =============================================================================
// Staff
// =============================================================================

async fn staff_menu(db: &Database) -> AppResult<()> {
    loop {
        println!();
        println!("--- STAFF ---");
        println!("1. Add staff member");
        println!("2. Delete staff member");
        println!("3. View all staff");
        println!("0. Back");

        match input::prompt("Choice")?.as_str() {
            "1" => {
                let staff = Staff {
                    s_id: input::prompt_i64("Staff id")?,
                    s_name: input::prompt_required("Name")?,
                    s_phone: input::prompt_required("Phone")?,
                    designation: input::prompt_required("Designation")?,
                };
                report_outcome(db.staff().add(&staff).await, "staff member added")?;
            }
            "2" => {
                let s_id = input::prompt_i64("Staff id")?;
                report_outcome(db.staff().delete(s_id).await, "deleted (if it existed)")?;
            }
            "3" => {
                let staff = db.staff().list().await?;
                println!("{:<6} {:<24} {:<14} {:<16}", "ID", "NAME", "PHONE", "ROLE");
                for s in &staff {
                    println!(
                        "{:<6} {:<24} {:<14} {:<16}",
                        s.s_id, s.s_name, s.s_phone, s.designation
                    );
                }
                println!("({} staff)", staff.len());
            }
            "0" => return Ok(()),
            _ => println!("  unknown choice"),
        }
    }
}

// =============================================================================
// Reports & accounts
// =============================================================================

async fn show_reports(db: &Database) -> AppResult<()> {
    let reports = db.reports().list().await?;
    println!();
    println!(
        "{:<6} {:<8} {:<8} {:<12} {:>5} {:>12}",
        "NO", "BOOK", "CUST", "DATE", "QTY", "TOTAL"
    );
    for r in &reports {
        println!(
            "{:<6} {:<8} {:<8} {:<12} {:>5} {:>12}",
            r.r_no,
            r.b_id.map_or("-".to_string(), |id| id.to_string()),
            r.c_id.map_or("-".to_string(), |id| id.to_string()),
            r.date_of_purchase,
            r.quantity,
            r.price().to_string()
        );
    }
    println!("({} purchases)", reports.len());
    Ok(())
}

async fn accounts_menu(db: &Database) -> AppResult<()> {
    loop {
        println!();
        println!("--- LOGIN ACCOUNTS ---");
        println!("1. Add account");
        println!("2. Delete account");
        println!("0. Back");

        match input::prompt("Choice")?.as_str() {
            "1" => {
                let creds = Credentials {
                    login_id: input::prompt_required("Login id")?,
                    password: input::prompt_password("Password")?,
                };
                report_outcome(db.credentials().add(&creds).await, "account added")?;
            }
            "2" => {
                let login_id = input::prompt_required("Login id")?;
                report_outcome(
                    db.credentials().delete(&login_id).await,
                    "deleted (if it existed)",
                )?;
            }
            "0" => return Ok(()),
            _ => println!("  unknown choice"),
        }
    }
}
