pub mod constants;
pub mod conversions;
pub mod fees;
pub mod provenance_util;
pub mod traits;
