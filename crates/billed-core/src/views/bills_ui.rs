use std::cmp::Ordering;

use billed_types::{format_amount, Bill, User};
use maud::{html, Markup};

use super::icons::EYE_ICON;
use super::layout::vertical_layout;
use super::pages::{error_page, render_loading_page};
use crate::routes::Route;

/// Bill ready for display: the record plus its formatted date
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub bill: Bill,
    /// Short French date, or the raw date when it could not be formatted
    pub date_label: String,
}

/// State of the bills page
#[derive(Debug, Clone, PartialEq)]
pub enum BillsPage {
    Loading,
    Loaded(Vec<BillRow>),
    Failed(String),
}

/// Most recent first; unparseable dates go last, by raw text
fn anti_chrono(a: &BillRow, b: &BillRow) -> Ordering {
    let key_a = (a.bill.parsed_date(), a.bill.date.as_str());
    let key_b = (b.bill.parsed_date(), b.bill.date.as_str());
    key_b.cmp(&key_a)
}

fn row(row: &BillRow) -> Markup {
    let bill = &row.bill;
    html! {
        tr {
            td { (bill.expense_type) }
            td { (bill.name) }
            td { time datetime=(bill.date) { (row.date_label) } }
            td { (format_amount(bill.amount)) }
            td class=(format!("status status-{}", bill.status.as_str())) { (bill.status.label()) }
            td {
                div class="icon-actions" {
                    div id="eye" data-testid="icon-eye" data-bill-url=[bill.file_url.as_deref()] {
                        (EYE_ICON)
                    }
                }
            }
        }
    }
}

fn modal() -> Markup {
    html! {
        div class="modal fade" id="modaleFile" tabindex="-1" role="dialog" aria-labelledby="modaleFileTitle" aria-hidden="true" {
            div class="modal-dialog modal-dialog-centered modal-lg" role="document" {
                div class="modal-content" {
                    div class="modal-header" {
                        h5 class="modal-title" id="modaleFileTitle" { "Justificatif" }
                        button type="button" class="close" data-dismiss="modal" aria-label="Close" {
                            span aria-hidden="true" { "×" }
                        }
                    }
                    div class="modal-body" {}
                }
            }
        }
    }
}

/// Table body rows, sorted most recent first
pub fn render_bills_table(rows: &[BillRow]) -> String {
    table_body(rows).into_string()
}

fn table_body(rows: &[BillRow]) -> Markup {
    let mut sorted: Vec<&BillRow> = rows.iter().collect();
    sorted.sort_by(|a, b| anti_chrono(a, b));
    html! {
        @for r in sorted {
            (row(r))
        }
    }
}

/// Bills page for any state: loading, error or the table
pub fn render_bills_list(page: &BillsPage, user: Option<&User>) -> String {
    match page {
        BillsPage::Loading => render_loading_page(user),
        BillsPage::Failed(message) => error_page(user, message).into_string(),
        BillsPage::Loaded(rows) => html! {
            div class="layout" {
                (vertical_layout(user, Some(Route::Bills)))
                div class="content" {
                    div class="content-header" {
                        div class="content-title" { " Mes notes de frais " }
                        button type="button" data-testid="btn-new-bill" class="btn btn-primary" {
                            "Nouvelle note de frais"
                        }
                    }
                    div id="data-table" {
                        table id="bills-table" class="table table-striped" style="width:100%" {
                            thead {
                                tr {
                                    th { "Type" }
                                    th { "Nom" }
                                    th { "Date" }
                                    th { "Montant" }
                                    th { "Statut" }
                                    th { "Actions" }
                                }
                            }
                            tbody data-testid="tbody" {
                                (table_body(rows))
                            }
                        }
                    }
                }
                (modal())
            }
        }
        .into_string(),
    }
}

/// Modal body showing a justificatory image at `width` pixels
pub fn justificatory_markup(bill_url: Option<&str>, width: u32) -> String {
    html! {
        div class="bill-proof-container" style="text-align: center;" {
            @match bill_url {
                Some(url) => {
                    img width=(width) src=(url) alt="Bill";
                }
                None => {
                    p { "Aucun justificatif" }
                }
            }
        }
    }
    .into_string()
}
