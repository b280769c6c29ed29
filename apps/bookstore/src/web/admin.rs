//! Admin dashboard pages: inventory, people, accounts and reports.
//!
//! Every GET renders the current table plus the add/delete forms; every
//! POST performs the write and redirects back to the table, except that
//! constraint violations render a notice page instead of a 500.

use std::str::FromStr;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use maud::{html, Markup};
use serde::Deserialize;

use bookstore_core::{Author, Book, BookAuthor, Credentials, Customer, Money, Staff};
use bookstore_db::{DbError, DbResult};
use tower_cookies::Cookies;

use crate::web::views::{self, admin_nav};
use crate::web::{require_admin, AppState, WebError};

/// Redirect on success, notice page on an operator mistake, 500 on a
/// storage failure.
fn write_outcome(result: DbResult<()>, back: &str) -> Result<Response, WebError> {
    match result {
        Ok(()) => Ok(Redirect::to(back).into_response()),
        Err(
            e @ (DbError::UniqueViolation { .. }
            | DbError::ForeignKeyViolation { .. }
            | DbError::CheckViolation { .. }),
        ) => Ok(
            views::message_page("Rejected", admin_nav(), &e.to_string(), back).into_response(),
        ),
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Dashboard
// =============================================================================

pub async fn dashboard(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }

    let books = state.db.books().list().await?.len();
    let customers = state.db.customers().list().await?.len();
    let purchases = state.db.reports().count().await?;

    Ok(views::layout(
        "Dashboard",
        admin_nav(),
        html! {
            ul {
                li { (books) " books in the catalogue" }
                li { (customers) " registered customers" }
                li { (purchases) " recorded purchases" }
            }
        },
    )
    .into_response())
}

// =============================================================================
// Books
// =============================================================================

pub async fn books_page(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }

    let books = state.db.books().list().await?;

    Ok(views::layout(
        "Books",
        admin_nav(),
        html! {
            table {
                thead { tr {
                    th { "ID" } th { "Title" } th { "Author" }
                    th { "Genre" } th { "Qty" } th { "Price" } th {}
                } }
                tbody {
                    @for b in &books {
                        tr {
                            td { (b.b_id) }
                            td { (b.b_name) }
                            td { (b.a_name) }
                            td { (b.genre) }
                            td { (b.quantity) }
                            td { (b.price()) }
                            td {
                                form class="inline" method="post" action="/admin/books/delete" {
                                    input type="hidden" name="b_id" value=(b.b_id);
                                    button { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
            h2 { "Add a book" }
            form method="post" action="/admin/books/add" {
                p { input name="b_id" type="number" placeholder="id" required; }
                p { input name="b_name" placeholder="title" required; }
                p { input name="a_name" placeholder="author" required; }
                p { input name="genre" placeholder="genre" required; }
                p { input name="quantity" type="number" placeholder="quantity" required; }
                p { input name="price" placeholder="price (rupees)" required; }
                button { "Add" }
            }
        },
    )
    .into_response())
}

#[derive(Deserialize)]
pub struct BookForm {
    b_id: i64,
    b_name: String,
    a_name: String,
    genre: String,
    quantity: i64,
    price: String,
}

pub async fn add_book(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<BookForm>,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }

    let price = match Money::from_str(&form.price) {
        Ok(m) => m,
        Err(e) => {
            return Ok(views::message_page(
                "Rejected",
                admin_nav(),
                &e.to_string(),
                "/admin/books",
            )
            .into_response())
        }
    };

    let book = Book {
        b_id: form.b_id,
        b_name: form.b_name,
        a_name: form.a_name,
        genre: form.genre,
        quantity: form.quantity,
        price_paise: price.paise(),
    };
    write_outcome(state.db.books().add(&book).await, "/admin/books")
}

#[derive(Deserialize)]
pub struct DeleteByIdForm {
    b_id: i64,
}

pub async fn delete_book(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<DeleteByIdForm>,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }
    write_outcome(state.db.books().delete(form.b_id).await, "/admin/books")
}

// =============================================================================
// Authors
// =============================================================================

pub async fn authors_page(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }

    let authors = state.db.authors().list().await?;
    let links = state.db.authors().list_links().await?;

    Ok(views::layout(
        "Authors",
        admin_nav(),
        html! {
            table {
                thead { tr { th { "ID" } th { "Name" } th {} } }
                tbody {
                    @for a in &authors {
                        tr {
                            td { (a.a_id) }
                            td { (a.a_name) }
                            td {
                                form class="inline" method="post" action="/admin/authors/delete" {
                                    input type="hidden" name="a_id" value=(a.a_id);
                                    button { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
            h2 { "Add an author" }
            form method="post" action="/admin/authors/add" {
                p { input name="a_id" type="number" placeholder="id" required; }
                p { input name="a_name" placeholder="name" required; }
                button { "Add" }
            }
            h2 { "Book links" }
            table {
                thead { tr { th { "Book" } th { "Author" } } }
                tbody {
                    @for l in &links {
                        tr { td { (l.b_id) } td { (l.a_id) } }
                    }
                }
            }
            form method="post" action="/admin/authors/link" {
                p { input name="b_id" type="number" placeholder="book id" required; }
                p { input name="a_id" type="number" placeholder="author id" required; }
                button { "Link" }
            }
        },
    )
    .into_response())
}

#[derive(Deserialize)]
pub struct AuthorForm {
    a_id: i64,
    a_name: String,
}

pub async fn add_author(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<AuthorForm>,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }
    let author = Author {
        a_id: form.a_id,
        a_name: form.a_name,
    };
    write_outcome(state.db.authors().add(&author).await, "/admin/authors")
}

#[derive(Deserialize)]
pub struct DeleteAuthorForm {
    a_id: i64,
}

pub async fn delete_author(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<DeleteAuthorForm>,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }
    write_outcome(state.db.authors().delete(form.a_id).await, "/admin/authors")
}

#[derive(Deserialize)]
pub struct LinkForm {
    b_id: i64,
    a_id: i64,
}

pub async fn link_author(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<LinkForm>,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }
    let link = BookAuthor {
        b_id: form.b_id,
        a_id: form.a_id,
    };
    write_outcome(state.db.authors().link_book(&link).await, "/admin/authors")
}

// =============================================================================
// Customers
// =============================================================================

pub async fn customers_page(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }

    let customers = state.db.customers().list().await?;

    Ok(views::layout(
        "Customers",
        admin_nav(),
        html! {
            table {
                thead { tr {
                    th { "ID" } th { "Name" } th { "Address" }
                    th { "Phone" } th { "Login" } th {}
                } }
                tbody {
                    @for c in &customers {
                        tr {
                            td { (c.cust_id) }
                            td { (c.c_name) }
                            td { (c.address) }
                            td { (c.phoneno) }
                            td { (c.login_id.as_deref().unwrap_or("-")) }
                            td {
                                form class="inline" method="post" action="/admin/customers/delete" {
                                    input type="hidden" name="cust_id" value=(c.cust_id);
                                    button { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
            h2 { "Add a customer" }
            form method="post" action="/admin/customers/add" {
                p { input name="cust_id" type="number" placeholder="id" required; }
                p { input name="c_name" placeholder="name" required; }
                p { input name="address" placeholder="address" required; }
                p { input name="phoneno" placeholder="phone" required; }
                p { input name="login_id" placeholder="login id (optional)"; }
                button { "Add" }
            }
        },
    )
    .into_response())
}

#[derive(Deserialize)]
pub struct CustomerForm {
    cust_id: i64,
    c_name: String,
    address: String,
    phoneno: String,
    #[serde(default)]
    login_id: String,
}

pub async fn add_customer(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<CustomerForm>,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }

    let customer = Customer {
        cust_id: form.cust_id,
        c_name: form.c_name,
        address: form.address,
        phoneno: form.phoneno,
        // an empty form field means "no login"
        login_id: Some(form.login_id).filter(|s| !s.is_empty()),
    };
    write_outcome(state.db.customers().add(&customer).await, "/admin/customers")
}

#[derive(Deserialize)]
pub struct DeleteCustomerForm {
    cust_id: i64,
}

pub async fn delete_customer(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<DeleteCustomerForm>,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }
    write_outcome(
        state.db.customers().delete(form.cust_id).await,
        "/admin/customers",
    )
}

// =============================================================================
// Staff
// =============================================================================

pub async fn staff_page(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }

    let staff = state.db.staff().list().await?;

    Ok(views::layout(
        "Staff",
        admin_nav(),
        html! {
            table {
                thead { tr { th { "ID" } th { "Name" } th { "Phone" } th { "Role" } th {} } }
                tbody {
                    @for s in &staff {
                        tr {
                            td { (s.s_id) }
                            td { (s.s_name) }
                            td { (s.s_phone) }
                            td { (s.designation) }
                            td {
                                form class="inline" method="post" action="/admin/staff/delete" {
                                    input type="hidden" name="s_id" value=(s.s_id);
                                    button { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
            h2 { "Add a staff member" }
            form method="post" action="/admin/staff/add" {
                p { input name="s_id" type="number" placeholder="id" required; }
                p { input name="s_name" placeholder="name" required; }
                p { input name="s_phone" placeholder="phone" required; }
                p { input name="designation" placeholder="designation" required; }
                button { "Add" }
            }
        },
    )
    .into_response())
}

#[derive(Deserialize)]
pub struct StaffForm {
    s_id: i64,
    s_name: String,
    s_phone: String,
    designation: String,
}

pub async fn add_staff(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<StaffForm>,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }
    let staff = Staff {
        s_id: form.s_id,
        s_name: form.s_name,
        s_phone: form.s_phone,
        designation: form.designation,
    };
    write_outcome(state.db.staff().add(&staff).await, "/admin/staff")
}

#[derive(Deserialize)]
pub struct DeleteStaffForm {
    s_id: i64,
}

pub async fn delete_staff(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<DeleteStaffForm>,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }
    write_outcome(state.db.staff().delete(form.s_id).await, "/admin/staff")
}

// =============================================================================
// Login accounts
// =============================================================================

pub async fn accounts_page(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }

    // Credential rows are listed through the customers they belong to;
    // the accounts page only manages additions and removals.
    Ok(views::layout(
        "Login accounts",
        admin_nav(),
        html! {
            h2 { "Add an account" }
            form method="post" action="/admin/accounts/add" {
                p { input name="login_id" placeholder="login id" required; }
                p { input name="password" type="password" placeholder="password" required; }
                button { "Add" }
            }
            h2 { "Delete an account" }
            form method="post" action="/admin/accounts/delete" {
                p { input name="login_id" placeholder="login id" required; }
                button { "Delete" }
            }
        },
    )
    .into_response())
}

#[derive(Deserialize)]
pub struct AccountForm {
    login_id: String,
    password: String,
}

pub async fn add_account(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<AccountForm>,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }
    let creds = Credentials {
        login_id: form.login_id,
        password: form.password,
    };
    write_outcome(state.db.credentials().add(&creds).await, "/admin/accounts")
}

#[derive(Deserialize)]
pub struct DeleteAccountForm {
    login_id: String,
}

pub async fn delete_account(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<DeleteAccountForm>,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }
    write_outcome(
        state.db.credentials().delete(&form.login_id).await,
        "/admin/accounts",
    )
}

// =============================================================================
// Reports
// =============================================================================

pub async fn reports_page(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Response, WebError> {
    if let Err(r) = require_admin(&state, &cookies).await {
        return Ok(r.into_response());
    }

    let reports = state.db.reports().list().await?;

    Ok(views::layout(
        "Purchase reports",
        admin_nav(),
        html! {
            table {
                thead { tr {
                    th { "No" } th { "Book" } th { "Customer" }
                    th { "Date" } th { "Qty" } th { "Total" }
                } }
                tbody {
                    @for r in &reports {
                        tr {
                            td { (r.r_no) }
                            td { (r.b_id.map_or("-".to_string(), |id| id.to_string())) }
                            td { (r.c_id.map_or("-".to_string(), |id| id.to_string())) }
                            td { (r.date_of_purchase) }
                            td { (r.quantity) }
                            td { (r.price()) }
                        }
                    }
                }
            }
            p { (reports.len()) " purchases recorded" }
        },
    )
    .into_response())
}
