pub mod init_contract;
