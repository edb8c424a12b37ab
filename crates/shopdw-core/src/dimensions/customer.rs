//! Customer dimension builder.

use shopdw_ingest::UserRecord;
use shopdw_model::{CustomerRow, UNKNOWN_EMAIL, UNKNOWN_NAME};

use crate::text::{non_blank, normalize_email, title_case};

/// Build `dim_customer` from the raw user collection.
///
/// Administrators are operational accounts, not customers, and are filtered
/// out. Missing attributes degrade to sentinel values; nothing here aborts.
pub fn build_customer_dimension(users: &[UserRecord]) -> Vec<CustomerRow> {
    let mut rows = Vec::with_capacity(users.len());
    for user in users {
        if user.is_admin {
            continue;
        }
        let customer_name = match non_blank(user.name.as_deref()) {
            Some(name) => title_case(name),
            None => UNKNOWN_NAME.to_string(),
        };
        let email = match non_blank(user.email.as_deref()) {
            Some(email) => normalize_email(email),
            None => UNKNOWN_EMAIL.to_string(),
        };
        rows.push(CustomerRow {
            customer_id: rows.len() as i64 + 1,
            mongo_id: user.id.clone(),
            customer_name,
            email,
            registration_date: user.created_at.map(|dt| dt.date()),
            is_active: true,
        });
    }
    rows
}
