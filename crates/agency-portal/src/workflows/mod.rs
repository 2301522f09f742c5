pub mod leads;
pub mod portal;
