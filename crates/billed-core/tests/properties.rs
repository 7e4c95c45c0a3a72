//! Property tests over ordering and submission

mod common;

use std::collections::BTreeSet;

use billed_core::containers::format_row;
use billed_core::fixtures;
use billed_core::mock::StoreCall;
use billed_core::views::render_bills_table;
use billed_core::NewBillForm;
use billed_types::BillStatus;
use common::{new_bill_app, rendered_dates};
use proptest::prelude::*;
use tokio_test::block_on;

fn date_strategy() -> impl Strategy<Value = String> {
    (1970i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

/// Distinct dates in random order
fn distinct_dates() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(date_strategy(), 1..20)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn rendered_rows_strictly_descending(dates in distinct_dates()) {
        let template = fixtures::bills().remove(0);
        let rows: Vec<_> = dates
            .iter()
            .map(|date| {
                let mut bill = template.clone();
                bill.date = date.clone();
                format_row(bill)
            })
            .collect();

        let rendered = rendered_dates(&render_bills_table(&rows));
        prop_assert_eq!(rendered.len(), dates.len());
        for pair in rendered.windows(2) {
            prop_assert!(pair[0] > pair[1], "{} should come before {}", pair[0], pair[1]);
        }
        let expected: BTreeSet<_> = dates.into_iter().collect();
        let actual: BTreeSet<_> = rendered.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn each_submit_calls_store_once(
        email in "[a-z]{1,10}@[a-z]{1,10}\\.[a-z]{2,3}",
        amount in "[0-9]{0,6}",
        pct in "[0-9]{0,3}",
        submits in 1usize..5,
    ) {
        let (store, _, app) = new_bill_app(Some(billed_types::User::employee(email.clone())));
        let form = NewBillForm {
            expense_type: "Transports".to_string(),
            date: "2022-01-01".to_string(),
            amount,
            pct,
            ..NewBillForm::default()
        };

        for n in 1..=submits {
            block_on(app.handle_submit(form.clone()));
            prop_assert_eq!(store.calls().len(), n);
        }

        for call in store.calls() {
            match call {
                StoreCall::Create(billed_core::CreatePayload::Bill(bill)) => {
                    prop_assert_eq!(&bill.email, &email);
                    prop_assert_eq!(bill.status, BillStatus::Pending);
                }
                other => prop_assert!(false, "unexpected call {:?}", other),
            }
        }
    }
}
