use billed_types::{ExpenseType, User};
use maud::html;

use super::layout::vertical_layout;
use crate::attachment::ACCEPT_ATTRIBUTE;
use crate::routes::Route;

/// New bill form; `required` marks type, date, amount, pct and file
pub fn render_new_bill_form(user: Option<&User>) -> String {
    html! {
        div class="layout" {
            (vertical_layout(user, Some(Route::NewBill)))
            div class="content" {
                div class="content-header" {
                    div class="content-title" { " Envoyer une note de frais " }
                }
                div class="form-newbill-container content-inner" {
                    form data-testid="form-new-bill" {
                        div class="row" {
                            div class="col-md-6" {
                                div class="col-half" {
                                    label for="expense-type" class="bold-label" { "Type de dépense" }
                                    select required id="expense-type" class="form-control blue-border" data-testid="expense-type" {
                                        @for t in ExpenseType::ALL {
                                            option { (t.label()) }
                                        }
                                    }
                                }
                                div class="col-half" {
                                    label for="expense-name" class="bold-label" { "Nom de la dépense" }
                                    input type="text" id="expense-name" class="form-control blue-border" data-testid="expense-name" placeholder="Vol Paris Londres";
                                }
                                div class="col-half" {
                                    label for="datepicker" class="bold-label" { "Date" }
                                    input required type="date" id="datepicker" class="form-control blue-border" data-testid="datepicker";
                                }
                                div class="col-half" {
                                    label for="amount" class="bold-label" { "Montant TTC " }
                                    input required type="number" id="amount" class="form-control blue-border input-icon input-icon-right" data-testid="amount" placeholder="348";
                                }
                                div class="col-half-row" {
                                    div class="flex-col" {
                                        label for="vat" class="bold-label" { "TVA" }
                                        input type="number" id="vat" class="form-control blue-border" data-testid="vat" placeholder="70";
                                    }
                                    div class="flex-col" {
                                        input required type="number" id="pct" class="form-control blue-border" data-testid="pct" placeholder="20";
                                    }
                                }
                            }
                            div class="col-md-6" {
                                div class="col-half" {
                                    label for="commentary" class="bold-label" { "Commentaire" }
                                    textarea id="commentary" class="form-control blue-border" data-testid="commentary" rows="3" {}
                                }
                                div class="col-half" {
                                    label for="file" class="bold-label" { "Justificatif" }
                                    input required type="file" id="file" accept=(ACCEPT_ATTRIBUTE) class="form-control blue-border" data-testid="file";
                                    div class="file-error" data-testid="file-error" role="alert" {}
                                }
                            }
                        }
                        div class="row" {
                            div class="col-md-6" {
                                div class="col-half" {
                                    button type="submit" id="btn-send-bill" class="btn btn-primary" { "Envoyer" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}
