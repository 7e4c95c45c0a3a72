//! Sample bills used by the mock store

use billed_types::{Bill, BillStatus};

#[allow(clippy::too_many_arguments)]
fn bill(
    id: &str,
    expense_type: &str,
    name: &str,
    date: &str,
    amount: i64,
    vat: &str,
    file_name: &str,
    status: BillStatus,
) -> Bill {
    Bill {
        id: id.to_string(),
        email: "a@a".to_string(),
        expense_type: expense_type.to_string(),
        name: name.to_string(),
        amount,
        date: date.to_string(),
        vat: vat.to_string(),
        pct: 20,
        commentary: String::new(),
        file_url: Some(format!("https://test.storage.tld/v0/b/billable/{}", file_name)),
        file_name: Some(file_name.to_string()),
        status,
        comment_admin: None,
    }
}

/// Four bills with distinct dates, one per status plus a second refusal
pub fn bills() -> Vec<Bill> {
    let mut hotel = bill(
        "47qAXb6fIm2zOKkLzMro",
        "Hôtel et logement",
        "encore",
        "2004-04-04",
        400,
        "80",
        "preview-facture-free-201801-pdf-1.jpg",
        BillStatus::Pending,
    );
    hotel.commentary = "séminaire billed".to_string();
    hotel.comment_admin = Some("ok".to_string());

    let mut transports = bill(
        "BeKy5Mo4jkmdfPGYpTxZ",
        "Transports",
        "test1",
        "2001-01-01",
        100,
        "",
        "1592770761.jpeg",
        BillStatus::Refused,
    );
    transports.commentary = "plop".to_string();
    transports.comment_admin = Some("en fait non".to_string());

    let mut online = bill(
        "UIUZtnPQvnbFnB0ozvJh",
        "Services en ligne",
        "test3",
        "2003-03-03",
        300,
        "60",
        "facture-client-php-exportee.png",
        BillStatus::Accepted,
    );
    online.comment_admin = Some("bon bah d'accord".to_string());

    let mut restaurant = bill(
        "qcCK3SzECmaZAGRrHjaC",
        "Restaurants et bars",
        "test2",
        "2002-02-02",
        200,
        "40",
        "preview-facture-free-201801-pdf-1.jpg",
        BillStatus::Refused,
    );
    restaurant.commentary = "test2".to_string();
    restaurant.comment_admin = Some("pas la bonne facture".to_string());

    vec![hotel, transports, online, restaurant]
}
