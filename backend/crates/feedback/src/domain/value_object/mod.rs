pub mod pagination;
pub mod phone;
pub mod rating;
pub mod status;
