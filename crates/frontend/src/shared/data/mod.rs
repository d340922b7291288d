pub mod local_db;
