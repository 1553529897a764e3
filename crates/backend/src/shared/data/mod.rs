pub mod codec;
pub mod db;
