/// Order direction and order type enumerations with their wire tokens
pub mod order;
