pub mod guard;
pub mod type_name;
