//! # Console Front End
//!
//! The interactive menu: a login loop that routes to the admin menu or
//! the customer menu depending on who signed in. Menus are numbered,
//! `0` always goes back (or logs out).

mod admin;
mod customer;
mod input;

use tracing::debug;

use bookstore_db::Database;

use crate::auth::{self, LoginError, SessionContext};
use crate::error::AppResult;

/// Runs the console front end until the user exits at the login prompt.
pub async fn run(db: Database) -> AppResult<()> {
    println!("=========================================");
    println!("       BOOKSTORE MANAGEMENT SYSTEM       ");
    println!("=========================================");

    loop {
        println!();
        let login_id = input::prompt("Login id (blank to exit)")?;
        if login_id.is_empty() {
            println!("Goodbye.");
            return Ok(());
        }
        let password = input::prompt_password("Password")?;

        match auth::login(&db, &login_id, &password).await {
            Ok(SessionContext::Admin) => {
                debug!(login_id, "Entering admin menu");
                admin::menu(&db).await?;
            }
            Ok(SessionContext::Customer { cust_id }) => {
                debug!(login_id, cust_id, "Entering customer menu");
                customer::menu(&db, cust_id).await?;
            }
            // storage failures are fatal; bad credentials just re-prompt
            Err(LoginError::Db(e)) => return Err(e.into()),
            Err(e) => println!("{e}"),
        }
    }
}
