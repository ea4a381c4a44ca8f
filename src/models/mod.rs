pub mod contact;
pub mod day;
pub mod legacy;
pub mod place;
pub mod shift;
