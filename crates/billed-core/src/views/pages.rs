use billed_types::User;
use maud::{html, Markup};

use super::layout::vertical_layout;

/// Shown while the bill list is being fetched
pub fn render_loading_page(user: Option<&User>) -> String {
    html! {
        div class="layout" {
            (vertical_layout(user, None))
            div class="content" id="loading" { "Loading..." }
        }
    }
    .into_string()
}

/// Inline error view; the message is displayed exactly as received
pub fn render_error_page(user: Option<&User>, message: &str) -> String {
    error_page(user, message).into_string()
}

pub(crate) fn error_page(user: Option<&User>, message: &str) -> Markup {
    html! {
        div class="layout" {
            (vertical_layout(user, None))
            div class="content" {
                div class="content-header" {
                    div class="content-title" { " Erreur " }
                }
                div data-testid="error-message" { (message) }
            }
        }
    }
}

/// Landing page of the login route; sign-in itself is handled elsewhere
pub fn render_login_page() -> String {
    html! {
        div class="login-page" data-testid="login-page" {
            div class="login-title" { "Billed" }
            p { "Connectez-vous avec votre compte employé pour accéder à vos notes de frais." }
        }
    }
    .into_string()
}
