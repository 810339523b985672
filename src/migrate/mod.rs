pub mod migrate_contract;
pub mod version_info;
