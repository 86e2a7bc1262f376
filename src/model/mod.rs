pub mod options;
pub mod response;
pub mod result;
