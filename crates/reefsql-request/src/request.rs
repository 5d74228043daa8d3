//! Top-level request enum

use crate::{
    AddColumnRequest, CreateSequenceRequest, CreateTableRequest, DeleteRequest, DropTableRequest,
    InsertRequest, SelectRequest, UpdateRequest,
};

/// A complete request, one per statement the external parser produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    CreateTable(CreateTableRequest),
    AddColumn(AddColumnRequest),
    DropTable(DropTableRequest),
    CreateSequence(CreateSequenceRequest),
    Insert(InsertRequest),
    Update(UpdateRequest),
    Delete(DeleteRequest),
    Select(SelectRequest),
}
