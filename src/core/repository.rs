use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, returning it with the key assigned by the store
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: i64) -> LibraryResult<usize>;

    // find by exact attribute match, all records when predicate is empty
    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<Entity>>;
}
