pub mod query_payable_by_scope_id;
pub mod query_payable_by_uuid;
pub mod query_state;
