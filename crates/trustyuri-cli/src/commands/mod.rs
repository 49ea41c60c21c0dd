pub mod canonicalize;
pub mod check;
pub mod hash;
pub mod mint;
