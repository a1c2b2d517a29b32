//! Customer reconciliation.

use std::sync::Arc;

use greengrocer_core::Address;

use crate::db::{CustomerRepository, RepositoryError};
use crate::models::{Customer, CustomerProfile};

/// Resolves customers during order creation.
#[derive(Clone)]
pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    /// Create a new customer service over a repository.
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    /// Ensure a customer record exists for the profile's email and that the
    /// delivery address is recorded against it.
    ///
    /// Absent customers are created with the address as their first entry;
    /// existing customers get the address appended only when it is not
    /// already in their list (addresses are trim-normalized, so whitespace
    /// variants do not duplicate). Exactly one record is created or
    /// persisted per call.
    ///
    /// This is a read-then-write with no per-email lock; see the note on
    /// [`crate::db`] about concurrent first orders for the same email.
    ///
    /// # Errors
    ///
    /// Propagates [`RepositoryError`] from the storage layer.
    pub async fn reconcile(
        &self,
        profile: CustomerProfile,
        address: Address,
    ) -> Result<Customer, RepositoryError> {
        match self.customers.find_by_email(&profile.email).await? {
            None => {
                let customer = Customer::new(profile, address);
                self.customers.insert(customer).await
            }
            Some(mut customer) => {
                customer.refresh_profile(&profile);
                if customer.record_address(address) {
                    customer.updated_at = chrono::Utc::now();
                }
                self.customers.update(customer).await
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use greengrocer_core::Email;

    use super::*;
    use crate::db::InMemoryCustomers;

    fn profile(email: &str) -> CustomerProfile {
        CustomerProfile {
            email: Email::parse(email).unwrap(),
            first_name: Some("Ada".to_owned()),
            last_name: None,
        }
    }

    fn addr(s: &str) -> Address {
        Address::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_first_order_creates_customer_with_one_address() {
        let repo = Arc::new(InMemoryCustomers::new());
        let service = CustomerService::new(repo.clone());

        let customer = service.reconcile(profile("a@x.com"), addr("12 Elm St")).await.unwrap();

        assert_eq!(repo.len().unwrap(), 1);
        assert_eq!(customer.addresses, vec![addr("12 Elm St")]);
    }

    #[tokio::test]
    async fn test_new_address_is_appended() {
        let repo = Arc::new(InMemoryCustomers::new());
        let service = CustomerService::new(repo.clone());

        service.reconcile(profile("a@x.com"), addr("12 Elm St")).await.unwrap();
        let customer = service.reconcile(profile("a@x.com"), addr("4 Oak Ave")).await.unwrap();

        assert_eq!(repo.len().unwrap(), 1);
        assert_eq!(customer.addresses, vec![addr("12 Elm St"), addr("4 Oak Ave")]);
    }

    #[tokio::test]
    async fn test_duplicate_address_leaves_count_unchanged() {
        let repo = Arc::new(InMemoryCustomers::new());
        let service = CustomerService::new(repo);

        service.reconcile(profile("a@x.com"), addr("12 Elm St")).await.unwrap();
        let customer = service
            .reconcile(profile("a@x.com"), addr("  12 Elm St "))
            .await
            .unwrap();

        assert_eq!(customer.addresses.len(), 1);
    }

    #[tokio::test]
    async fn test_profile_fields_refresh_on_later_orders() {
        let repo = Arc::new(InMemoryCustomers::new());
        let service = CustomerService::new(repo);

        service.reconcile(profile("a@x.com"), addr("12 Elm St")).await.unwrap();
        let updated = service
            .reconcile(
                CustomerProfile {
                    email: Email::parse("a@x.com").unwrap(),
                    first_name: None,
                    last_name: Some("Lovelace".to_owned()),
                },
                addr("12 Elm St"),
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name.as_deref(), Some("Ada"));
        assert_eq!(updated.last_name.as_deref(), Some("Lovelace"));
    }
}
