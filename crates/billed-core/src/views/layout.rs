use billed_types::User;
use maud::{html, Markup};

use super::icons::{DISCONNECT_ICON, MAIL_ICON, WINDOW_ICON};
use crate::routes::Route;

/// Height of the side navbar, in `vh`
const NAVBAR_HEIGHT: u32 = 120;

fn icon_class(active: bool) -> &'static str {
    if active {
        "layout-icon active-icon"
    } else {
        "layout-icon"
    }
}

/// Side navbar; navigation icons only appear for employees
pub fn vertical_layout(user: Option<&User>, active: Option<Route>) -> Markup {
    let is_employee = user.is_some_and(User::is_employee);
    html! {
        div class="vertical-navbar" style=(format!("height: {}vh;", NAVBAR_HEIGHT)) {
            div class="layout-title" { "Billed" }
            @if is_employee {
                div id="layout-icon1" class=(icon_class(active == Some(Route::Bills))) data-testid="icon-window" {
                    (WINDOW_ICON)
                }
                div id="layout-icon2" class=(icon_class(active == Some(Route::NewBill))) data-testid="icon-mail" {
                    (MAIL_ICON)
                }
                div id="layout-disconnect" data-testid="layout-disconnect" {
                    (DISCONNECT_ICON)
                }
            }
        }
    }
}
