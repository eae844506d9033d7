//! Book Endpoints

use super::{get_list, Transport};
use crate::error::ApiResult;
use crate::models::Book;

pub async fn list_books(transport: &dyn Transport) -> ApiResult<Vec<Book>> {
    get_list(transport, "/books").await
}
