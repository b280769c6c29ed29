//! Shared page chrome for the web dashboard.
//!
//! Every page goes through [`layout`]; the admin and shop modules build
//! their tables and forms inline with `html!` and wrap them here.

use maud::{html, Markup, DOCTYPE};

const STYLE: &str = "\
    body { font-family: sans-serif; margin: 2em auto; max-width: 60em; } \
    table { border-collapse: collapse; width: 100%; margin: 1em 0; } \
    th, td { border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; } \
    th { background: #f0f0f0; } \
    nav a { margin-right: 1em; } \
    form.inline { display: inline; } \
    .error { color: #a00; } \
    .notice { color: #070; }";

/// Wraps page content in the shared HTML shell.
pub fn layout(title: &str, nav: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) " - Bookstore" }
                style { (STYLE) }
            }
            body {
                h1 { (title) }
                nav { (nav) }
                (content)
            }
        }
    }
}

/// Navigation bar for admin pages.
pub fn admin_nav() -> Markup {
    html! {
        a href="/admin" { "Dashboard" }
        a href="/admin/books" { "Books" }
        a href="/admin/authors" { "Authors" }
        a href="/admin/customers" { "Customers" }
        a href="/admin/staff" { "Staff" }
        a href="/admin/accounts" { "Accounts" }
        a href="/admin/reports" { "Reports" }
        form class="inline" method="post" action="/logout" {
            button { "Logout" }
        }
    }
}

/// Navigation bar for the customer storefront.
pub fn shop_nav() -> Markup {
    html! {
        a href="/shop" { "Shelf" }
        a href="/shop/history" { "My purchases" }
        form class="inline" method="post" action="/logout" {
            button { "Logout" }
        }
    }
}

/// The login form, with an optional rejection message.
pub fn login_page(error: Option<&str>) -> Markup {
    layout(
        "Sign in",
        html! {},
        html! {
            @if let Some(msg) = error {
                p class="error" { (msg) }
            }
            form method="post" action="/login" {
                p {
                    input name="login_id" placeholder="login id" required;
                }
                p {
                    input name="password" type="password" placeholder="password" required;
                }
                button { "Sign in" }
            }
        },
    )
}

/// Plain notice page with a link back.
pub fn message_page(title: &str, nav: Markup, message: &str, back: &str) -> Markup {
    layout(
        title,
        nav,
        html! {
            p class="notice" { (message) }
            p { a href=(back) { "Back" } }
        },
    )
}

/// Internal failure page (rendered with status 500).
pub fn error_page(detail: &str) -> Markup {
    layout(
        "Something went wrong",
        html! {},
        html! {
            p class="error" { (detail) }
            p { a href="/" { "Back to sign in" } }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_wraps_content() {
        let page = layout("Books", html! {}, html! { p { "hello" } }).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Books - Bookstore</title>"));
        assert!(page.contains("<p>hello</p>"));
    }

    #[test]
    fn test_login_page_shows_rejection() {
        let page = login_page(Some("invalid login id or password")).into_string();
        assert!(page.contains("invalid login id or password"));
        assert!(page.contains("action=\"/login\""));
    }

    #[test]
    fn test_login_page_without_error_has_no_error_class() {
        let page = login_page(None).into_string();
        assert!(!page.contains("class=\"error\""));
    }
}
