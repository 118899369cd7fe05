use std::collections::HashMap;
use std::sync::Arc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::catalog::command::create_book_cmd::{CreateBookCommand, CreateBookCommandRequest};
use crate::catalog::command::delete_book_cmd::{DeleteBookCommand, DeleteBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::contract::{Operation, OperationContract};
use crate::catalog::domain::CatalogService;
use crate::catalog::fault::Fault;
use crate::core::command::Command;
use crate::core::library::LibraryError;

/// Arguments of one call as unmarshalled from the envelope, keyed by part name.
pub type ArgumentRecord = HashMap<String, String>;

/// Result of one call in the order the operation's output message declares.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRecord {
    fields: Vec<(&'static str, String)>,
}

impl ResultRecord {
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    // absent and null values are left out instead of being sent empty
    fn from_response<T: Serialize>(contract: &OperationContract, response: &T) -> Result<Self, Fault> {
        let value = serde_json::to_value(response).map_err(LibraryError::from)?;
        let mut fields = vec![];
        for field in contract.output {
            match value.get(field.name) {
                None | Some(Value::Null) => {}
                Some(Value::String(s)) => fields.push((field.name, s.clone())),
                Some(other) => fields.push((field.name, other.to_string())),
            }
        }
        Ok(Self { fields })
    }
}

fn decode<T: DeserializeOwned>(contract: &OperationContract, args: &ArgumentRecord) -> Result<T, Fault> {
    let declared: Map<String, Value> = args.iter()
        .filter(|(name, _)| contract.accepts(name))
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();
    serde_json::from_value(Value::Object(declared)).map_err(|err| Fault::from(LibraryError::from(err)))
}

/// Routes a named operation with its argument record to the matching command.
pub struct OperationDispatcher {
    catalog_service: Arc<dyn CatalogService>,
}

impl OperationDispatcher {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }

    pub fn catalog_service(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    pub async fn dispatch(&self, operation: Operation, args: &ArgumentRecord) -> Result<ResultRecord, Fault> {
        let contract = operation.contract();
        match operation {
            Operation::GetBook => {
                let req: GetBookCommandRequest = decode(contract, args)?;
                let res = GetBookCommand::new(self.catalog_service()).execute(req).await?;
                ResultRecord::from_response(contract, &res)
            }
            Operation::CreateBook => {
                let req: CreateBookCommandRequest = decode(contract, args)?;
                let res = CreateBookCommand::new(self.catalog_service()).execute(req).await?;
                ResultRecord::from_response(contract, &res)
            }
            Operation::UpdateBook => {
                let req: UpdateBookCommandRequest = decode(contract, args)?;
                let res = UpdateBookCommand::new(self.catalog_service()).execute(req).await?;
                ResultRecord::from_response(contract, &res)
            }
            Operation::DeleteBook => {
                let req: DeleteBookCommandRequest = decode(contract, args)?;
                let res = DeleteBookCommand::new(self.catalog_service()).execute(req).await?;
                ResultRecord::from_response(contract, &res)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::contract::Operation;
    use crate::catalog::dispatcher::{ArgumentRecord, OperationDispatcher};
    use crate::catalog::factory;
    use crate::catalog::fault::{Fault, FaultCode};
    use crate::catalog::store::{CatalogStore, IdAssignment};

    fn build_dispatcher() -> OperationDispatcher {
        OperationDispatcher::new(factory::create_catalog_service(Arc::new(CatalogStore::seeded(IdAssignment::Monotonic))))
    }

    fn args(pairs: &[(&str, &str)]) -> ArgumentRecord {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[tokio::test]
    async fn test_should_run_seed_scenario() {
        let dispatcher = build_dispatcher();

        let created = dispatcher.dispatch(Operation::CreateBook,
                                          &args(&[("title", "New Book"), ("author", "Jane"), ("year", "2025")]))
            .await.expect("should create");
        assert_eq!(&[("message", "Book created".to_string()), ("id", "2".to_string())], created.fields());

        let loaded = dispatcher.dispatch(Operation::GetBook, &args(&[("id", "2")])).await.expect("should get");
        assert_eq!(&[
            ("id", "2".to_string()),
            ("title", "New Book".to_string()),
            ("author", "Jane".to_string()),
            ("year", "2025".to_string()),
        ], loaded.fields());

        let deleted = dispatcher.dispatch(Operation::DeleteBook, &args(&[("id", "1")])).await.expect("should delete");
        assert_eq!(&[("message", "Book deleted".to_string())], deleted.fields());

        let fault = dispatcher.dispatch(Operation::GetBook, &args(&[("id", "1")])).await.expect_err("should fault");
        assert_eq!(Fault::client("Book not found"), fault);
    }

    #[tokio::test]
    async fn test_should_fault_for_unknown_ids() {
        let dispatcher = build_dispatcher();
        for op in [Operation::GetBook, Operation::UpdateBook, Operation::DeleteBook] {
            let fault = dispatcher.dispatch(op, &args(&[("id", "99"), ("title", "x")])).await.expect_err("should fault");
            assert_eq!("Book not found", fault.string.as_str());
        }
        assert_eq!(1, dispatcher.catalog_service().count_books().await);
    }

    #[tokio::test]
    async fn test_should_update_and_report_id() {
        let dispatcher = build_dispatcher();
        let updated = dispatcher.dispatch(Operation::UpdateBook, &args(&[("id", "1"), ("year", "1999")]))
            .await.expect("should update");
        assert_eq!(Some("Book updated"), updated.get("message"));
        assert_eq!(Some("1"), updated.get("id"));

        let loaded = dispatcher.dispatch(Operation::GetBook, &args(&[("id", "1")])).await.expect("should get");
        assert_eq!(Some("SOAP for Beginners"), loaded.get("title"));
        assert_eq!(Some("1999"), loaded.get("year"));
    }

    #[tokio::test]
    async fn test_should_ignore_undeclared_arguments() {
        let dispatcher = build_dispatcher();
        let created = dispatcher.dispatch(Operation::CreateBook, &args(&[("title", "T"), ("id", "77")]))
            .await.expect("should create");
        assert_eq!(Some("2"), created.get("id"));
    }

    #[tokio::test]
    async fn test_should_omit_absent_values() {
        let dispatcher = build_dispatcher();
        let _ = dispatcher.dispatch(Operation::CreateBook, &args(&[("title", "T"), ("year", "someday")]))
            .await.expect("should create");
        let loaded = dispatcher.dispatch(Operation::GetBook, &args(&[("id", "2")])).await.expect("should get");
        assert_eq!(&[("id", "2".to_string()), ("title", "T".to_string())], loaded.fields());

        let _ = dispatcher.dispatch(Operation::CreateBook, &args(&[("author", "A")])).await.expect("should create");
        let untitled = dispatcher.dispatch(Operation::GetBook, &args(&[("id", "3")])).await.expect("should get");
        assert_eq!(&[("id", "3".to_string()), ("author", "A".to_string())], untitled.fields());
    }

    #[tokio::test]
    async fn test_should_fault_as_server_when_ids_run_out() {
        let store = Arc::new(CatalogStore::seeded(IdAssignment::Monotonic));
        store.set_last_id(i64::MAX);
        let dispatcher = OperationDispatcher::new(factory::create_catalog_service(store));
        let fault = dispatcher.dispatch(Operation::CreateBook, &args(&[("title", "T")])).await.expect_err("should fault");
        assert_eq!(FaultCode::Server, fault.code);
        assert_eq!("no book id left to assign", fault.string.as_str());
    }
}
