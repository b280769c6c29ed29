//! Customer storefront: the in-stock shelf, purchasing and history.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Form;
use maud::html;
use serde::Deserialize;
use tower_cookies::Cookies;

use bookstore_db::{purchase, PurchaseError};

use crate::web::views::{self, shop_nav};
use crate::web::{require_customer, AppState, WebError};

/// The shelf: only books with stock, each with a buy form.
pub async fn storefront(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Response, WebError> {
    if let Err(r) = require_customer(&state, &cookies).await {
        return Ok(r.into_response());
    }

    let books = state.db.books().list_in_stock().await?;

    Ok(views::layout(
        "Shelf",
        shop_nav(),
        html! {
            table {
                thead { tr {
                    th { "ID" } th { "Title" } th { "Author" }
                    th { "Genre" } th { "In stock" } th { "Price" } th {}
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
                                form class="inline" method="post" action="/shop/buy" {
                                    input type="hidden" name="b_id" value=(b.b_id);
                                    input name="quantity" type="number" value="1" min="1";
                                    button { "Buy" }
                                }
                            }
                        }
                    }
                }
            }
            p { (books.len()) " titles available" }
        },
    )
    .into_response())
}

#[derive(Deserialize)]
pub struct BuyForm {
    b_id: i64,
    quantity: i64,
}

pub async fn buy(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<BuyForm>,
) -> Result<Response, WebError> {
    let cust_id = match require_customer(&state, &cookies).await {
        Ok(id) => id,
        Err(r) => return Ok(r.into_response()),
    };

    match purchase::record_purchase(&state.db, cust_id, form.b_id, form.quantity).await {
        Ok(report) => Ok(views::message_page(
            "Purchase complete",
            shop_nav(),
            &format!(
                "Report #{}: {} copies, total {}",
                report.r_no,
                report.quantity,
                report.price()
            ),
            "/shop",
        )
        .into_response()),
        // a refused purchase is a notice, not a server failure
        Err(PurchaseError::Core(e)) => Ok(views::message_page(
            "Purchase refused",
            shop_nav(),
            &e.to_string(),
            "/shop",
        )
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// The customer's own purchase history.
pub async fn history(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Response, WebError> {
    let cust_id = match require_customer(&state, &cookies).await {
        Ok(id) => id,
        Err(r) => return Ok(r.into_response()),
    };

    let reports = state.db.reports().list_for_customer(cust_id).await?;

    Ok(views::layout(
        "My purchases",
        shop_nav(),
        html! {
            table {
                thead { tr {
                    th { "No" } th { "Book" } th { "Date" } th { "Qty" } th { "Total" }
                } }
                tbody {
                    @for r in &reports {
                        tr {
                            td { (r.r_no) }
                            td { (r.b_id.map_or("-".to_string(), |id| id.to_string())) }
                            td { (r.date_of_purchase) }
                            td { (r.quantity) }
                            td { (r.price()) }
                        }
                    }
                }
            }
            p { (reports.len()) " purchases" }
        },
    )
    .into_response())
}
